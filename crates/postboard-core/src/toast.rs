//! Transient notifications (toasts).
//!
//! A toast is a short-lived message that dismisses itself after
//! `auto_close`. It is unrelated to the domain notifications counted by the
//! unread badge.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default auto-dismiss delay (3 seconds).
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(3000);

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Success,
    Info,
}

impl ToastLevel {
    /// Returns the CSS class for this level.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

/// Screen corner or edge a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// All positions, used to lay out toast containers.
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    /// Returns the CSS class for this position.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }
}

/// Placement and lifetime of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    pub position: ToastPosition,
    pub auto_close: Duration,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            auto_close: DEFAULT_AUTO_CLOSE,
        }
    }
}

/// A toast waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub options: ToastOptions,
}

impl Toast {
    /// Creates a new toast.
    pub fn new(level: ToastLevel, message: impl Into<String>, options: ToastOptions) -> Self {
        Self {
            level,
            message: message.into(),
            options,
        }
    }
}

/// A toast currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
}

/// Toasts currently on screen, in the order they were shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    active: Vec<ActiveToast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast and returns its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(ActiveToast { id, toast });
        id
    }

    /// Removes a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|t| t.id != id);
        self.active.len() != before
    }

    /// Toasts anchored at `position`, oldest first.
    pub fn at(&self, position: ToastPosition) -> impl Iterator<Item = &ActiveToast> {
        self.active
            .iter()
            .filter(move |t| t.toast.options.position == position)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
