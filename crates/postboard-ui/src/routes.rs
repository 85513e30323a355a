//! Application routes.

use dioxus::prelude::*;
use postboard_core::NavLink;

use crate::components::sidebar::Sidebar;
use crate::views::admin::AdminPanel;
use crate::views::create_post::CreatePost;
use crate::views::favorites::Favorites;
use crate::views::home::Home;
use crate::views::not_found::NotFound;
use crate::views::notifications::Notifications;
use crate::views::profile::Profile;

/// App routes. Every page is rendered inside the sidebar shell.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},

        #[route("/favorites")]
        Favorites {},

        #[route("/create")]
        CreatePost {},

        #[route("/profile")]
        Profile {},

        #[route("/notifications")]
        Notifications {},

        #[route("/admin")]
        AdminPanel {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<NavLink> for Route {
    fn from(link: NavLink) -> Self {
        match link {
            NavLink::Home => Route::Home {},
            NavLink::Favorites => Route::Favorites {},
            NavLink::CreatePost => Route::CreatePost {},
            NavLink::Profile => Route::Profile {},
            NavLink::Notifications => Route::Notifications {},
            NavLink::AdminPanel => Route::AdminPanel {},
        }
    }
}

/// Layout wrapping every page in the sidebar.
#[component]
fn Shell() -> Element {
    rsx! {
        Sidebar {
            Outlet::<Route> {}
        }
    }
}
