//! Sidebar navigation links and their visibility rules.
//!
//! | Link          | Visible when                       |
//! |---------------|------------------------------------|
//! | Home          | always                             |
//! | Favorites     | logged in                          |
//! | Create Post   | logged in and not blocked          |
//! | Profile       | logged in                          |
//! | Notifications | logged in                          |
//! | Admin Panel   | logged in and admin                |

use crate::session::SessionSnapshot;

/// A navigation link in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLink {
    Home,
    Favorites,
    CreatePost,
    Profile,
    /// Carries the unread badge.
    Notifications,
    AdminPanel,
}

impl NavLink {
    /// All links in display order.
    pub const ALL: [NavLink; 6] = [
        NavLink::Home,
        NavLink::Favorites,
        NavLink::CreatePost,
        NavLink::Profile,
        NavLink::Notifications,
        NavLink::AdminPanel,
    ];

    /// Returns display text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Favorites => "Favorites",
            Self::CreatePost => "Create Post",
            Self::Profile => "Profile",
            Self::Notifications => "Notifications",
            Self::AdminPanel => "Admin Panel",
        }
    }

    /// Returns the route path this link targets.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Favorites => "/favorites",
            Self::CreatePost => "/create",
            Self::Profile => "/profile",
            Self::Notifications => "/notifications",
            Self::AdminPanel => "/admin",
        }
    }

    /// Returns the icon name used by the renderer.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Favorites => "heart",
            Self::CreatePost => "plus-circle",
            Self::Profile => "user",
            Self::Notifications => "bell",
            Self::AdminPanel => "shield",
        }
    }

    /// Whether this link is shown for `session`.
    pub fn is_visible(&self, session: &SessionSnapshot) -> bool {
        match self {
            Self::Home => true,
            Self::Favorites | Self::Profile | Self::Notifications => session.is_logged_in(),
            Self::CreatePost => session.is_logged_in() && !session.is_blocked(),
            Self::AdminPanel => session.is_logged_in() && session.is_admin(),
        }
    }

    /// Whether this link carries the unread notification badge.
    pub fn has_badge(&self) -> bool {
        matches!(self, Self::Notifications)
    }
}

/// Returns the links visible for `session`, in display order.
pub fn visible_links(session: &SessionSnapshot) -> Vec<NavLink> {
    NavLink::ALL
        .into_iter()
        .filter(|link| link.is_visible(session))
        .collect()
}
