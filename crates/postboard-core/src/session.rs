//! Session snapshot published by an authentication store.
//!
//! A snapshot is read-only to the sidebar. The constructors keep the
//! logged-out invariant: a logged-out snapshot never carries an email or
//! any role flag.

use serde::{Deserialize, Serialize};

/// The current authentication state visible to the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SessionFields")]
pub struct SessionSnapshot {
    user_email: Option<String>,
    is_admin: bool,
    is_blocked: bool,
}

/// Unchecked wire form, normalized through the constructors.
#[derive(Deserialize)]
struct SessionFields {
    user_email: Option<String>,
    #[serde(default)]
    is_admin: bool,
    #[serde(default)]
    is_blocked: bool,
}

impl From<SessionFields> for SessionSnapshot {
    fn from(fields: SessionFields) -> Self {
        match fields.user_email {
            Some(email) => Self::logged_in(email)
                .with_admin(fields.is_admin)
                .with_blocked(fields.is_blocked),
            None => Self::logged_out(),
        }
    }
}

impl SessionSnapshot {
    /// Creates a logged-out snapshot.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Creates a logged-in snapshot for `email` with no roles.
    pub fn logged_in(email: impl Into<String>) -> Self {
        Self {
            user_email: Some(email.into()),
            is_admin: false,
            is_blocked: false,
        }
    }

    /// Sets the admin flag. Ignored on a logged-out snapshot.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin && self.is_logged_in();
        self
    }

    /// Sets the blocked flag. Ignored on a logged-out snapshot.
    pub fn with_blocked(mut self, is_blocked: bool) -> Self {
        self.is_blocked = is_blocked && self.is_logged_in();
        self
    }

    /// Returns the logged-in user's email.
    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_email.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn is_blocked(&self) -> bool {
        self.is_blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_has_no_email_or_roles() {
        let session = SessionSnapshot::logged_out();
        assert!(!session.is_logged_in());
        assert!(session.user_email().is_none());
        assert!(!session.is_admin());
        assert!(!session.is_blocked());
    }

    #[test]
    fn test_roles_ignored_when_logged_out() {
        let session = SessionSnapshot::logged_out()
            .with_admin(true)
            .with_blocked(true);
        assert!(!session.is_admin());
        assert!(!session.is_blocked());
    }

    #[test]
    fn test_logged_in_with_roles() {
        let session = SessionSnapshot::logged_in("a@b.com")
            .with_admin(true)
            .with_blocked(true);
        assert!(session.is_logged_in());
        assert_eq!(session.user_email(), Some("a@b.com"));
        assert!(session.is_admin());
        assert!(session.is_blocked());
    }

    #[test]
    fn test_deserialize_drops_roles_without_email() {
        let session: SessionSnapshot =
            serde_json::from_str(r#"{"user_email":null,"is_admin":true,"is_blocked":true}"#)
                .unwrap();
        assert_eq!(session, SessionSnapshot::logged_out());
    }

    #[test]
    fn test_serde_keeps_logged_in_roles() {
        let session = SessionSnapshot::logged_in("root@b.com").with_admin(true);
        let json = serde_json::to_string(&session).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_default_is_logged_out() {
        assert_eq!(SessionSnapshot::default(), SessionSnapshot::logged_out());
    }
}
