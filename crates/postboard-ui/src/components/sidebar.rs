//! Collapsible navigation sidebar.
//!
//! The panel closes on any press outside it while open. The press handler
//! sits on the shell wrapping the page and the toasts, so it exists exactly
//! as long as the sidebar is mounted. The panel and the menu button stop
//! propagation so their own presses never count as outside.

use dioxus::prelude::*;
use postboard_core::nav::visible_links;
use postboard_core::{NavLink, PressTarget, SidebarState};
use tracing::debug;

use crate::components::icons::{MenuIcon, NavIcon};
use crate::components::notification_bell::NotificationBell;
use crate::components::toast_host::ToastHost;
use crate::routes::Route;
use crate::state::{
    use_services, use_session, use_toasts, ReactiveAuth, RouterNavigator, SignalToaster,
};

/// Sidebar shell. Renders the menu button, the panel, the page and toasts.
#[component]
pub fn Sidebar(children: Element) -> Element {
    let session = use_session();
    let mut sidebar = use_signal(SidebarState::new);

    use_drop(|| debug!("Sidebar unmounted"));

    let snapshot = session.read().clone();
    let panel = sidebar.read().panel();
    let is_open = sidebar.read().is_open();
    let shows_login_form = sidebar.read().shows_login_form(&snapshot);
    let links = visible_links(&snapshot);

    rsx! {
        div {
            class: "app-shell",
            onmousedown: move |_| {
                let open = sidebar.peek().is_open();
                if open {
                    sidebar.write().handle_press(PressTarget::Outside);
                }
            },

            button {
                class: "sidebar-toggle",
                aria_label: "Toggle menu",
                aria_expanded: "{is_open}",
                onmousedown: move |evt| evt.stop_propagation(),
                onclick: move |_| {
                    sidebar.write().handle_press(PressTarget::ToggleButton);
                },
                MenuIcon { class: Some("sidebar-toggle-icon".to_string()) }
            }

            aside {
                class: "sidebar {panel.css_class()}",
                onmousedown: move |evt| evt.stop_propagation(),

                div { class: "sidebar-header",
                    h2 { class: "sidebar-title", "Menu" }
                }

                div { class: "sidebar-account",
                    if let Some(email) = snapshot.user_email() {
                        SessionCard { email: email.to_string(), sidebar }
                    } else {
                        button {
                            class: "btn btn-primary btn-block",
                            onclick: move |_| sidebar.write().show_login_form(),
                            "Login"
                        }
                        if shows_login_form {
                            LoginForm { sidebar }
                        }
                    }
                }

                nav { class: "sidebar-nav",
                    for link in links {
                        NavEntry { key: "{link.path()}", link }
                    }
                }
            }

            main { class: "app-content", {children} }

            ToastHost {}
        }
    }
}

/// Logged-in user and the logout button.
#[component]
fn SessionCard(email: String, sidebar: Signal<SidebarState>) -> Element {
    let services = use_services();
    let session = use_session();
    let toasts = use_toasts();
    let router = navigator();

    let logout = move |_| {
        let auth = ReactiveAuth::new(services.auth.clone(), session);
        let navigator = RouterNavigator::new(router);
        let toaster = SignalToaster::new(toasts);
        sidebar
            .write()
            .logout(&auth, &navigator, &toaster, &services.settings);
    };

    rsx! {
        div { class: "session-card",
            p { class: "session-email", "Logged in as: {email}" }
            button { class: "btn btn-secondary btn-block", onclick: logout, "Logout" }
        }
    }
}

/// Inline login form.
#[component]
fn LoginForm(sidebar: Signal<SidebarState>) -> Element {
    let services = use_services();
    let session = use_session();
    let toasts = use_toasts();
    let email = sidebar.read().email_input().to_string();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = ReactiveAuth::new(services.auth.clone(), session);
        let toaster = SignalToaster::new(toasts);
        sidebar
            .write()
            .submit_login(&auth, &toaster, &services.settings);
    };

    rsx! {
        form { class: "login-form", onsubmit: submit,
            input {
                class: "input",
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                oninput: move |evt| sidebar.write().set_email_input(evt.value()),
            }
            div { class: "login-actions",
                button { class: "btn btn-primary", r#type: "submit", "Login" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| sidebar.write().cancel_login(),
                    "Cancel"
                }
            }
        }
    }
}

/// A single navigation link.
#[component]
fn NavEntry(link: NavLink) -> Element {
    rsx! {
        Link {
            to: Route::from(link),
            class: "nav-item",
            active_class: "active",
            NavIcon { name: link.icon() }
            span { class: "nav-item-label", "{link.label()}" }
            if link.has_badge() {
                NotificationBell {}
            }
        }
    }
}
