//! Admin panel page.

use dioxus::prelude::*;

use super::PageHeader;
use crate::state::use_session;

#[component]
pub fn AdminPanel() -> Element {
    let is_admin = use_session().read().is_admin();

    rsx! {
        section { class: "page",
            PageHeader { title: "Admin Panel", subtitle: None }
            if is_admin {
                div { class: "empty-state", p { "Moderation tools live here." } }
            } else {
                div { class: "empty-state", p { "Administrators only." } }
            }
        }
    }
}
