//! Home page.

use dioxus::prelude::*;

use super::PageHeader;
use crate::state::use_session;

/// Landing page.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let greeting = match session.read().user_email() {
        Some(email) => format!("Welcome back, {email}."),
        None => "Open the menu to log in.".to_string(),
    };

    rsx! {
        section { class: "page",
            PageHeader { title: "Home", subtitle: Some(greeting) }
        }
    }
}
