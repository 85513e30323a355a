//! Unread notification indicator.

use dioxus::prelude::*;
use postboard_core::notification::unread_badge;

use crate::components::icons::BellIcon;
use crate::state::{use_notifications_revision, use_services, use_session};

/// Bell with an unread count, shown next to the notifications link.
///
/// The store is queried on every render. The session signal and the
/// notifications revision both trigger a re-render.
#[component]
pub fn NotificationBell() -> Element {
    let services = use_services();
    let session = use_session();
    let revision = use_notifications_revision();

    let _ = *revision.0.read();
    let count = unread_badge(&session.read(), services.notifications.as_ref());

    rsx! {
        span { class: "notification-bell",
            BellIcon { class: Some("bell-icon".to_string()) }
            if let Some(count) = count {
                UnreadBadge { count }
            }
        }
    }
}

/// Numeric badge. Renders nothing for a zero count.
#[component]
pub fn UnreadBadge(count: u32) -> Element {
    if count == 0 {
        return rsx! {};
    }

    rsx! {
        span { class: "nav-badge", "{count}" }
    }
}
