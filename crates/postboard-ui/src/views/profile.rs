//! Profile page.

use dioxus::prelude::*;

use super::{LoginRequired, PageHeader};
use crate::state::use_session;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let session = session.read();

    let Some(email) = session.user_email() else {
        return rsx! {
            section { class: "page",
                PageHeader { title: "Profile", subtitle: None }
                LoginRequired {}
            }
        };
    };

    let role = if session.is_admin() { "Administrator" } else { "Member" };

    rsx! {
        section { class: "page",
            PageHeader { title: "Profile", subtitle: Some(email.to_string()) }
            dl { class: "profile-details",
                dt { "Role" }
                dd { "{role}" }
                if session.is_blocked() {
                    dt { "Status" }
                    dd { class: "text-error", "Blocked from posting" }
                }
            }
        }
    }
}
