//! Root component.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{use_app_state_provider, use_services};
use crate::theme::STYLES;

/// Application root. Expects [`crate::AppServices`] in the root context.
#[component]
pub fn App() -> Element {
    let services = use_services();
    use_app_state_provider(&services);

    rsx! {
        style { "{STYLES}" }
        Router::<Route> {}
    }
}
