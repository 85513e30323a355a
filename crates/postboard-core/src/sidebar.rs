//! Sidebar state machine.
//!
//! The panel has two states, [`PanelState::Closed`] and [`PanelState::Open`].
//! The toggle button flips it; a pointer press outside the panel closes it
//! while open. Nothing else moves the panel.
//!
//! The login form and email draft live next to the panel state. Commands
//! that need the outside world (login, logout) take the collaborators as
//! arguments so the state itself stays a plain value.

use tracing::debug;

use crate::ports::{AuthStore, Navigator, Toaster};
use crate::session::SessionSnapshot;
use crate::toast::ToastOptions;

/// Toast shown after a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully!";

/// Toast shown after logout.
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

/// Open/closed state of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    /// Returns the CSS class for this state.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

/// Where a pointer press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The fixed menu button.
    ToggleButton,
    /// Anywhere inside the panel.
    Panel,
    /// Anywhere else.
    Outside,
}

/// Result of submitting the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The store was asked to log in as this email.
    Submitted(String),
    /// The draft was empty; nothing happened.
    EmptyEmail,
}

/// Parameters for sidebar commands that reach outside the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSettings {
    /// Placement and lifetime of login/logout toasts.
    pub toast: ToastOptions,
    /// Route to navigate to after logout.
    pub root_route: String,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            toast: ToastOptions::default(),
            root_route: "/".to_string(),
        }
    }
}

/// Local UI state of the sidebar. Lives from mount to unmount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    panel: PanelState,
    login_form_visible: bool,
    email_input: String,
}

impl SidebarState {
    /// Creates the initial state: closed, form hidden, empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    pub fn is_login_form_visible(&self) -> bool {
        self.login_form_visible
    }

    pub fn email_input(&self) -> &str {
        &self.email_input
    }

    /// Whether the login form should be rendered for `session`.
    ///
    /// The form is never shown to a logged-in user, even if it was left
    /// open when the session changed.
    pub fn shows_login_form(&self, session: &SessionSnapshot) -> bool {
        self.login_form_visible && !session.is_logged_in()
    }

    /// Flips the panel.
    pub fn toggle(&mut self) {
        self.panel = match self.panel {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        };
        debug!(panel = ?self.panel, "Sidebar toggled");
    }

    /// Handles a pointer press. Returns true if the panel state changed.
    pub fn handle_press(&mut self, target: PressTarget) -> bool {
        match target {
            PressTarget::ToggleButton => {
                self.toggle();
                true
            }
            PressTarget::Panel => false,
            PressTarget::Outside => {
                if self.is_open() {
                    self.panel = PanelState::Closed;
                    debug!("Sidebar closed by outside press");
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Shows the inline login form.
    pub fn show_login_form(&mut self) {
        self.login_form_visible = true;
    }

    /// Updates the email draft.
    pub fn set_email_input(&mut self, value: impl Into<String>) {
        self.email_input = value.into();
    }

    /// Hides the login form and discards the draft.
    pub fn cancel_login(&mut self) {
        self.login_form_visible = false;
        self.email_input.clear();
    }

    /// Submits the login form.
    ///
    /// An empty or whitespace-only draft is ignored and the form stays
    /// visible. Otherwise the store is asked to log in, the draft is
    /// cleared, the form is hidden, and a success toast is shown.
    pub fn submit_login(
        &mut self,
        auth: &dyn AuthStore,
        toaster: &dyn Toaster,
        settings: &SidebarSettings,
    ) -> LoginOutcome {
        let email = self.email_input.trim();
        if email.is_empty() {
            debug!("Ignoring login submission with empty email");
            return LoginOutcome::EmptyEmail;
        }

        let email = email.to_string();
        auth.login(&email);
        self.email_input.clear();
        self.login_form_visible = false;
        toaster.notify_success(LOGIN_SUCCESS_MESSAGE, settings.toast);
        debug!(%email, "Login submitted");

        LoginOutcome::Submitted(email)
    }

    /// Logs out, navigates to the root route, and shows an info toast.
    pub fn logout(
        &mut self,
        auth: &dyn AuthStore,
        navigator: &dyn Navigator,
        toaster: &dyn Toaster,
        settings: &SidebarSettings,
    ) {
        auth.logout();
        navigator.navigate_to(&settings.root_route);
        toaster.notify_info(LOGOUT_MESSAGE, settings.toast);
        debug!("Logged out");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::memory::{MemoryAuthStore, MemoryNavigator, MemoryToaster};
    use crate::toast::ToastLevel;

    /// Auth store that records every command it receives.
    #[derive(Default)]
    struct RecordingAuth {
        logins: RefCell<Vec<String>>,
        logouts: RefCell<usize>,
    }

    impl AuthStore for RecordingAuth {
        fn snapshot(&self) -> SessionSnapshot {
            match self.logins.borrow().last() {
                Some(email) if *self.logouts.borrow() == 0 => SessionSnapshot::logged_in(email),
                _ => SessionSnapshot::logged_out(),
            }
        }

        fn login(&self, email: &str) {
            self.logins.borrow_mut().push(email.to_string());
        }

        fn logout(&self) {
            *self.logouts.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SidebarState::new();
        assert_eq!(state.panel(), PanelState::Closed);
        assert!(!state.is_login_form_visible());
        assert!(state.email_input().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut state = SidebarState::new();
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());

        state.toggle();
        let before = state.panel();
        state.toggle();
        state.toggle();
        assert_eq!(state.panel(), before);
    }

    #[test]
    fn test_outside_press_closes_open_panel() {
        let mut state = SidebarState::new();
        state.toggle();

        assert!(state.handle_press(PressTarget::Outside));
        assert_eq!(state.panel(), PanelState::Closed);
    }

    #[test]
    fn test_inside_press_keeps_panel_open() {
        let mut state = SidebarState::new();
        state.toggle();

        assert!(!state.handle_press(PressTarget::Panel));
        assert!(state.is_open());
    }

    #[test]
    fn test_outside_press_while_closed_is_noop() {
        let mut state = SidebarState::new();
        assert!(!state.handle_press(PressTarget::Outside));
        assert!(!state.handle_press(PressTarget::Panel));
        assert_eq!(state.panel(), PanelState::Closed);
    }

    #[test]
    fn test_toggle_button_press_toggles() {
        let mut state = SidebarState::new();
        assert!(state.handle_press(PressTarget::ToggleButton));
        assert!(state.is_open());
        assert!(state.handle_press(PressTarget::ToggleButton));
        assert!(!state.is_open());
    }

    #[test]
    fn test_submit_login_calls_store_once() {
        let auth = RecordingAuth::default();
        let toaster = MemoryToaster::new();
        let mut state = SidebarState::new();
        state.show_login_form();
        state.set_email_input("a@b.com");

        let outcome = state.submit_login(&auth, &toaster, &SidebarSettings::default());

        assert_eq!(outcome, LoginOutcome::Submitted("a@b.com".to_string()));
        assert_eq!(*auth.logins.borrow(), vec!["a@b.com".to_string()]);
        assert!(!state.is_login_form_visible());
        assert!(state.email_input().is_empty());
    }

    #[test]
    fn test_submit_login_shows_success_toast() {
        let auth = MemoryAuthStore::new();
        let toaster = MemoryToaster::new();
        let mut state = SidebarState::new();
        state.show_login_form();
        state.set_email_input("a@b.com");

        state.submit_login(&auth, &toaster, &SidebarSettings::default());

        let toasts = toaster.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, ToastLevel::Success);
        assert_eq!(toasts[0].message, LOGIN_SUCCESS_MESSAGE);
        assert_eq!(toasts[0].options, ToastOptions::default());
    }

    #[test]
    fn test_submit_empty_email_does_nothing() {
        let auth = RecordingAuth::default();
        let toaster = MemoryToaster::new();
        let mut state = SidebarState::new();
        state.show_login_form();

        let outcome = state.submit_login(&auth, &toaster, &SidebarSettings::default());

        assert_eq!(outcome, LoginOutcome::EmptyEmail);
        assert!(auth.logins.borrow().is_empty());
        assert!(state.is_login_form_visible());
        assert!(toaster.toasts().is_empty());
    }

    #[test]
    fn test_submit_whitespace_email_does_nothing() {
        let auth = RecordingAuth::default();
        let toaster = MemoryToaster::new();
        let mut state = SidebarState::new();
        state.show_login_form();
        state.set_email_input("   ");

        let outcome = state.submit_login(&auth, &toaster, &SidebarSettings::default());

        assert_eq!(outcome, LoginOutcome::EmptyEmail);
        assert!(auth.logins.borrow().is_empty());
        assert!(state.is_login_form_visible());
    }

    #[test]
    fn test_submit_trims_email() {
        let auth = RecordingAuth::default();
        let toaster = MemoryToaster::new();
        let mut state = SidebarState::new();
        state.set_email_input("  a@b.com ");

        state.submit_login(&auth, &toaster, &SidebarSettings::default());

        assert_eq!(*auth.logins.borrow(), vec!["a@b.com".to_string()]);
    }

    #[test]
    fn test_cancel_clears_draft() {
        let mut state = SidebarState::new();
        state.show_login_form();
        state.set_email_input("half-typed@");

        state.cancel_login();
        assert!(!state.is_login_form_visible());

        state.show_login_form();
        assert!(state.email_input().is_empty());
    }

    #[test]
    fn test_logout_calls_store_and_navigates_once() {
        let auth = RecordingAuth::default();
        let navigator = MemoryNavigator::new();
        let toaster = MemoryToaster::new();
        let mut state = SidebarState::new();

        state.logout(&auth, &navigator, &toaster, &SidebarSettings::default());

        assert_eq!(*auth.logouts.borrow(), 1);
        assert_eq!(navigator.history(), vec!["/".to_string()]);

        let toasts = toaster.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, ToastLevel::Info);
        assert_eq!(toasts[0].message, LOGOUT_MESSAGE);
    }

    #[test]
    fn test_logout_uses_configured_root_route() {
        let auth = MemoryAuthStore::new();
        let navigator = MemoryNavigator::new();
        let toaster = MemoryToaster::new();
        let settings = SidebarSettings {
            root_route: "/home".to_string(),
            ..SidebarSettings::default()
        };

        SidebarState::new().logout(&auth, &navigator, &toaster, &settings);

        assert_eq!(navigator.history(), vec!["/home".to_string()]);
    }

    #[test]
    fn test_login_form_hidden_once_logged_in() {
        let mut state = SidebarState::new();
        state.show_login_form();

        assert!(state.shows_login_form(&SessionSnapshot::logged_out()));
        assert!(!state.shows_login_form(&SessionSnapshot::logged_in("a@b.com")));
    }

    #[test]
    fn test_login_then_snapshot_is_logged_in() {
        let auth = MemoryAuthStore::new();
        let toaster = MemoryToaster::new();
        let mut state = SidebarState::new();
        state.show_login_form();
        state.set_email_input("a@b.com");

        state.submit_login(&auth, &toaster, &SidebarSettings::default());

        let session = auth.snapshot();
        assert_eq!(session.user_email(), Some("a@b.com"));
        assert!(!state.shows_login_form(&session));
    }
}
