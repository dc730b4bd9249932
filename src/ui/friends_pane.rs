use dioxus::prelude::*;

use crate::state::{FriendStatus, use_store};
use crate::ui::Avatar;

/// Right-drawer pane: friends with presence, pending requests flagged.
#[component]
pub fn FriendsPane() -> Element {
    let store = use_store();
    let friends = store.friends.read().clone();

    rsx! {
        div { class: "pane friends-pane",
            h4 { style: "margin: 0 0 0.5rem 0;", "Friends" }
            if friends.is_empty() {
                div { style: "color: #666; font-style: italic;", "No friends yet" }
            }
            for friend in friends {
                div {
                    key: "{friend.user.id}",
                    style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.25rem 0;",
                    Avatar {
                        hex_color: friend.user.hex_color.clone(),
                        name: friend.user.username.clone(),
                        size: 28,
                    }
                    span { "{friend.user.username}" }
                    div {
                        style: "
                            width: 8px;
                            height: 8px;
                            border-radius: 50%;
                            background: {friend.user.status.color()};
                        ",
                    }
                    if friend.status == FriendStatus::Pending {
                        span { style: "font-size: 0.7rem; color: #856404;", "Pending" }
                    }
                }
            }
        }
    }
}
