//! Routed content pages. These are thin: the real conversation surfaces live
//! in a collaborator crate, so each page only projects store state.

use dioxus::prelude::*;

use crate::Route;
use crate::state::{FriendStatus, badge_count, use_store};
use crate::ui::Avatar;

#[component]
pub fn Inbox() -> Element {
    let store = use_store();
    let notifications = (store.notification_count)();
    let pending = store.pending_friend_requests();
    let count = badge_count(notifications, pending);

    rsx! {
        div { class: "page",
            h2 { "Inbox" }
            if count == 0 {
                p { style: "color: #666;", "All caught up." }
            } else {
                p { "{notifications} notifications, {pending} pending friend requests." }
            }
        }
    }
}

#[component]
pub fn ServerView(server_id: String) -> Element {
    let store = use_store();

    let Some(server) = store.server(&server_id) else {
        return rsx! {
            div { class: "page", "Unknown server." }
        };
    };
    let default_channel = server
        .channels
        .iter()
        .find(|c| c.id == server.default_channel_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "page",
            div { style: "display: flex; align-items: center; gap: 0.5rem;",
                Avatar { hex_color: server.hex_color.clone(), name: server.name.clone() }
                h2 { style: "margin: 0;", "{server.name}" }
            }
            p { style: "color: #666;", "# {default_channel}" }
            Link {
                to: Route::ServerSettings {
                    server_id: server.id.clone(),
                    segments: vec!["general".to_string()],
                },
                "Server settings"
            }
        }
    }
}

#[component]
pub fn Profile(user_id: String) -> Element {
    let store = use_store();

    // the profile may belong to the account user or to a friend
    let account_user = store.account.read().user.clone();
    let user = account_user.filter(|u| u.id == user_id).or_else(|| {
        store
            .friends
            .read()
            .iter()
            .find(|f| f.user.id == user_id)
            .map(|f| f.user.clone())
    });

    let Some(user) = user else {
        return rsx! {
            div { class: "page", "Unknown user." }
        };
    };

    rsx! {
        div { class: "page",
            div { style: "display: flex; align-items: center; gap: 0.5rem;",
                Avatar { hex_color: user.hex_color.clone(), name: user.username.clone(), size: 50 }
                h2 { style: "margin: 0;", "{user.username}" }
                div {
                    style: "
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: {user.status.color()};
                    ",
                }
            }
        }
    }
}

#[component]
pub fn Moderation() -> Element {
    let store = use_store();
    let blocked = store
        .friends
        .read()
        .iter()
        .filter(|f| f.status == FriendStatus::Blocked)
        .count();

    rsx! {
        div { class: "page",
            h2 { "Moderation" }
            p { style: "color: #666;", "{blocked} blocked users." }
        }
    }
}
