//! Fallback for unknown paths.

use dioxus::prelude::*;

use super::PageHeader;
use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page",
            PageHeader { title: "Page not found", subtitle: Some(path) }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to Home" }
        }
    }
}
