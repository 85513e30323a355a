//! Notifications page.

use dioxus::prelude::*;
use postboard_core::{Notification, NotificationStore};

use super::{LoginRequired, PageHeader};
use crate::state::{
    use_notifications_revision, use_services, use_session, ReactiveNotifications,
};

/// Lists the user's notifications, newest first.
#[component]
pub fn Notifications() -> Element {
    let services = use_services();
    let session = use_session();
    let revision = use_notifications_revision();

    let Some(email) = session.read().user_email().map(str::to_string) else {
        return rsx! {
            section { class: "page",
                PageHeader { title: "Notifications", subtitle: None }
                LoginRequired {}
            }
        };
    };

    // Subscribe so the list reloads after "mark all as read".
    let _ = *revision.0.read();
    let notifications = services.notifications.notifications_for(&email);
    let unread = notifications.iter().filter(|n| !n.is_read).count();

    let store = services.notifications.clone();
    let mark_all_read = move |_| {
        ReactiveNotifications::new(store.clone(), revision).mark_all_read(&email);
    };

    rsx! {
        section { class: "page",
            PageHeader {
                title: "Notifications",
                subtitle: Some(format!("{unread} unread")),
            }

            if unread > 0 {
                button {
                    class: "btn btn-secondary",
                    onclick: mark_all_read,
                    "Mark all as read"
                }
            }

            if notifications.is_empty() {
                div { class: "empty-state", p { "You have no notifications." } }
            } else {
                ul { class: "notification-list",
                    for notification in notifications {
                        NotificationRow { key: "{notification.id}", notification }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationRow(notification: Notification) -> Element {
    let class = if notification.is_read {
        "notification-row"
    } else {
        "notification-row unread"
    };
    let time = notification.created_at.format("%b %d, %H:%M").to_string();

    rsx! {
        li { class: "{class}",
            span { class: "notification-message", "{notification.message}" }
            span { class: "notification-time", "{time}" }
        }
    }
}
