use dioxus::prelude::*;

use crate::Route;
use crate::state::use_store;

/// Right-click menu for a server list item, anchored at the pointer's screen
/// position. Rendered only while a position is set.
#[component]
pub fn ServerContextMenu(
    server_id: String,
    position: Option<(f64, f64)>,
    on_close: EventHandler<()>,
) -> Element {
    let mut store = use_store();

    let Some((x, y)) = position else {
        return rsx! {};
    };

    let mark_read_id = server_id.clone();
    let leave_id = server_id.clone();

    rsx! {
        // invisible overlay so any outside click dismisses the menu
        div {
            style: "position: fixed; inset: 0; z-index: 50;",
            onclick: move |_| {
                on_close.call(());
            },
            div {
                style: "
                    position: fixed;
                    left: {x}px;
                    top: {y}px;
                    background: #fff;
                    border: 1px solid #ddd;
                    border-radius: 4px;
                    box-shadow: 0 2px 8px rgba(0,0,0,.15);
                    min-width: 160px;
                    z-index: 51;
                ",
                div {
                    class: "context-menu-item",
                    onclick: move |_| {
                        store.servers.with_mut(|servers| {
                            if let Some(s) = servers.iter_mut().find(|s| s.id == mark_read_id) {
                                s.has_notifications = false;
                            }
                        });
                        on_close.call(());
                    },
                    "Mark as read"
                }
                Link {
                    to: Route::ServerSettings {
                        server_id: server_id.clone(),
                        segments: vec!["general".to_string()],
                    },
                    style: "text-decoration: none; color: inherit;",
                    onclick: move |_| {
                        on_close.call(());
                    },
                    div { class: "context-menu-item", "Settings" }
                }
                div {
                    class: "context-menu-item danger",
                    onclick: move |_| {
                        store.servers.with_mut(|servers| {
                            servers.retain(|s| s.id != leave_id);
                        });
                        on_close.call(());
                    },
                    "Leave server"
                }
            }
        }
    }
}
