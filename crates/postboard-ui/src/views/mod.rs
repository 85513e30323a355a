//! Pages reachable from the sidebar.

pub mod admin;
pub mod create_post;
pub mod favorites;
pub mod home;
pub mod not_found;
pub mod notifications;
pub mod profile;

use dioxus::prelude::*;

/// Page header shared by every view.
#[component]
fn PageHeader(title: &'static str, subtitle: Option<String>) -> Element {
    rsx! {
        header { class: "page-header",
            h1 { class: "page-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Shown in place of a page that needs a session.
#[component]
fn LoginRequired() -> Element {
    rsx! {
        div { class: "empty-state",
            p { "Open the menu and log in to see this page." }
        }
    }
}
