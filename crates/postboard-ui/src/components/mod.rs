//! Reusable components.

pub mod icons;
pub mod notification_bell;
pub mod sidebar;
pub mod toast_host;
