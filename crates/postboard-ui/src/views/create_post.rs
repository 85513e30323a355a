//! Create post page.

use dioxus::prelude::*;

use super::{LoginRequired, PageHeader};
use crate::state::use_session;

#[component]
pub fn CreatePost() -> Element {
    let session = use_session();
    let session = session.read();

    rsx! {
        section { class: "page",
            PageHeader { title: "Create Post", subtitle: None }
            if !session.is_logged_in() {
                LoginRequired {}
            } else if session.is_blocked() {
                div { class: "empty-state",
                    p { "Your account is blocked from creating posts." }
                }
            } else {
                div { class: "empty-state", p { "Share something with the board." } }
            }
        }
    }
}
