//! Favorites page.

use dioxus::prelude::*;

use super::{LoginRequired, PageHeader};
use crate::state::use_session;

#[component]
pub fn Favorites() -> Element {
    let logged_in = use_session().read().is_logged_in();

    rsx! {
        section { class: "page",
            PageHeader { title: "Favorites", subtitle: None }
            if logged_in {
                div { class: "empty-state", p { "Posts you favorite will show up here." } }
            } else {
                LoginRequired {}
            }
        }
    }
}
