//! Postboard UI Theme - Violet palette and global stylesheet.

/// Primary brand colors.
pub mod brand {
    /// Light violet - hover backgrounds.
    pub const LIGHT: &str = "#F3E8FF";

    /// Primary violet - buttons, active links, badges.
    pub const PRIMARY: &str = "#AD46FF";

    /// Dark violet - hover states.
    pub const DARK: &str = "#8E24E0";
}

/// Semantic status colors used by toasts.
pub mod status {
    pub const SUCCESS: &str = "#16A34A";
    pub const INFO: &str = "#2563EB";
}

/// Global stylesheet, injected once at the app root.
pub const STYLES: &str = r#"
* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: #1F2937;
    background: #FAFAFA;
}

.app-shell { min-height: 100vh; }
.app-content { padding: 72px 32px 32px; }

/* Menu button */
.sidebar-toggle {
    position: fixed;
    top: 16px;
    left: 16px;
    z-index: 30;
    width: 40px;
    height: 40px;
    padding: 8px;
    border: none;
    border-radius: 8px;
    background: #AD46FF;
    color: #FFFFFF;
    cursor: pointer;
}
.sidebar-toggle:hover { background: #8E24E0; }
.sidebar-toggle-icon { width: 24px; height: 24px; }

/* Panel */
.sidebar {
    position: fixed;
    top: 0;
    left: 0;
    z-index: 20;
    width: 260px;
    height: 100vh;
    padding: 72px 16px 16px;
    background: #FFFFFF;
    box-shadow: 2px 0 12px rgba(0, 0, 0, 0.08);
    transition: transform 0.2s ease-in-out;
}
.sidebar.closed { transform: translateX(-100%); }
.sidebar.open { transform: translateX(0); }

.sidebar-title { margin: 0 0 16px; font-size: 20px; color: #AD46FF; }
.sidebar-account { margin-bottom: 24px; }

.session-card { display: flex; flex-direction: column; gap: 8px; }
.session-email { margin: 0; font-size: 14px; word-break: break-all; }

.login-form { display: flex; flex-direction: column; gap: 8px; }
.login-actions { display: flex; gap: 8px; }

.input {
    width: 100%;
    padding: 8px 10px;
    border: 1px solid #D1D5DB;
    border-radius: 6px;
    font-size: 14px;
}
.input:focus { outline: none; border-color: #AD46FF; }

.btn {
    padding: 8px 14px;
    border: none;
    border-radius: 6px;
    font-size: 14px;
    cursor: pointer;
}
.btn-block { width: 100%; }
.btn-primary { background: #AD46FF; color: #FFFFFF; }
.btn-primary:hover { background: #8E24E0; }
.btn-secondary { background: #F3E8FF; color: #8E24E0; }

/* Navigation */
.sidebar-nav { display: flex; flex-direction: column; gap: 4px; }
.nav-item {
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 10px 12px;
    border-radius: 8px;
    color: inherit;
    text-decoration: none;
}
.nav-item:hover { background: #F3E8FF; }
.nav-item.active { background: #AD46FF; color: #FFFFFF; }
.nav-item-label { flex: 1; }

.notification-bell { position: relative; display: inline-flex; }
.bell-icon { width: 18px; height: 18px; }
.nav-badge {
    position: absolute;
    top: -6px;
    right: -8px;
    min-width: 18px;
    padding: 0 5px;
    border-radius: 9px;
    background: #DC2626;
    color: #FFFFFF;
    font-size: 11px;
    line-height: 18px;
    text-align: center;
}

/* Pages */
.page-title { margin: 0; font-size: 28px; }
.page-subtitle { margin: 4px 0 24px; color: #6B7280; }
.empty-state { padding: 32px; border-radius: 8px; background: #FFFFFF; color: #6B7280; }
.text-error { color: #DC2626; }

.notification-list { list-style: none; margin: 16px 0 0; padding: 0; }
.notification-row {
    display: flex;
    justify-content: space-between;
    padding: 12px 16px;
    border-bottom: 1px solid #E5E7EB;
}
.notification-row.unread { font-weight: 600; background: #F3E8FF; }
.notification-time { color: #9CA3AF; font-size: 12px; }

/* Toasts */
.toast-container {
    position: fixed;
    z-index: 50;
    display: flex;
    flex-direction: column;
    gap: 8px;
}
.toast-container.top-left { top: 16px; left: 16px; }
.toast-container.top-center { top: 16px; left: 50%; transform: translateX(-50%); }
.toast-container.top-right { top: 16px; right: 16px; }
.toast-container.bottom-left { bottom: 16px; left: 16px; }
.toast-container.bottom-center { bottom: 16px; left: 50%; transform: translateX(-50%); }
.toast-container.bottom-right { bottom: 16px; right: 16px; }

.toast {
    min-width: 220px;
    padding: 12px 16px;
    border-radius: 8px;
    color: #FFFFFF;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
    cursor: pointer;
}
.toast.success { background: #16A34A; }
.toast.info { background: #2563EB; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::{PanelState, ToastLevel, ToastPosition};

    #[test]
    fn test_styles_use_brand_palette() {
        assert!(STYLES.contains(brand::PRIMARY));
        assert!(STYLES.contains(brand::DARK));
        assert!(STYLES.contains(brand::LIGHT));
    }

    #[test]
    fn test_styles_cover_state_classes() {
        for panel in [PanelState::Open, PanelState::Closed] {
            assert!(STYLES.contains(&format!(".sidebar.{}", panel.css_class())));
        }
        for position in ToastPosition::ALL {
            assert!(STYLES.contains(&format!(".toast-container.{}", position.css_class())));
        }
        for (level, color) in [
            (ToastLevel::Success, status::SUCCESS),
            (ToastLevel::Info, status::INFO),
        ] {
            assert!(STYLES.contains(&format!(".toast.{} {{ background: {color}; }}", level.css_class())));
        }
    }
}
