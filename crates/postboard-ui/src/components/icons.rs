//! SVG icon components.

use dioxus::prelude::*;

/// Hamburger icon for the menu button.
#[component]
pub fn MenuIcon(class: Option<String>) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "3", y1: "6", x2: "21", y2: "6" }
            line { x1: "3", y1: "12", x2: "21", y2: "12" }
            line { x1: "3", y1: "18", x2: "21", y2: "18" }
        }
    }
}

/// Bell icon next to the notifications link.
#[component]
pub fn BellIcon(class: Option<String>) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9" }
            path { d: "M13.73 21a2 2 0 0 1-3.46 0" }
        }
    }
}

/// Text icon for a navigation link.
#[component]
pub fn NavIcon(name: &'static str) -> Element {
    let icon = match name {
        "home" => "🏠",
        "heart" => "❤️",
        "plus-circle" => "➕",
        "user" => "👤",
        "bell" => "🔔",
        "shield" => "🛡️",
        _ => "•",
    };

    rsx! {
        span { class: "nav-item-icon", "{icon}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_icon_known_names() {
        let html = dioxus_ssr::render_element(rsx! { NavIcon { name: "bell" } });
        assert!(html.contains("🔔"));
    }

    #[test]
    fn test_nav_icon_fallback() {
        let html = dioxus_ssr::render_element(rsx! { NavIcon { name: "unknown" } });
        assert!(html.contains('•'));
    }

    #[test]
    fn test_menu_icon_class() {
        let html = dioxus_ssr::render_element(rsx! {
            MenuIcon { class: Some("toggle-icon".to_string()) }
        });
        assert!(html.contains("toggle-icon"));
        assert!(html.contains("<svg"));
    }
}
