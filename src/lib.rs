use dioxus::prelude::*;

mod drawer;
mod md2rsx;
mod server_settings;
mod state;
mod ui;
mod updates;
mod utils;

use state::{Shell, Store, WindowProperties, use_window_bridge};
use ui::pages::{Inbox, Moderation, Profile, ServerView};
use ui::server_settings_pane::ServerSettings;
use ui::{DrawerLayout, FriendsPane, SidePane};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let shell = use_context_provider(Shell::new);
    use_context_provider(Store::demo);
    let window = use_context_provider(WindowProperties::new);
    use_window_bridge(window);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "{shell.window_title()}" }
        Router::<Route> {}
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Inbox {},
    #[route("/moderation")]
    Moderation {},
    #[route("/profile/:user_id")]
    Profile { user_id: String },
    #[route("/servers/:server_id")]
    ServerView { server_id: String },
    #[route("/servers/:server_id/settings/:..segments")]
    ServerSettings { server_id: String, segments: Vec<String> },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component: sidebar and friends list ride in the drawers,
/// routed content in the middle pane.
#[component]
fn Layout() -> Element {
    rsx! {
        DrawerLayout {
            left: rsx! {
                SidePane {}
            },
            content: rsx! {
                Outlet::<Route> {}
            },
            right: rsx! {
                FriendsPane {}
            },
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Inbox {}, "Go To Inbox" }
    }
}
