//! The sidebar: server list, inbox badge, update/moderation/settings items
//! and the account item at the bottom.
//!
//! Everything rendered here is projected from the shared [`Store`]; the only
//! output is the title-alert signal emitted into the [`Shell`].

use dioxus::{logger::tracing::warn, prelude::*};

use crate::Route;
use crate::md2rsx::markdown_to_rsx;
use crate::state::{
    Server, badge_count, badges, has_title_alert, use_shell, use_store, use_window_properties,
};
use crate::ui::add_server::AddServer;
use crate::ui::context_menu::ServerContextMenu;
use crate::ui::{Avatar, Icon, Modal};
use crate::updates::{Release, UpdateChecker, fetch_latest_release, format_timestamp};
use crate::utils::now_ms;

#[component]
pub fn SidePane() -> Element {
    let mut show_add_server = use_signal(|| false);

    rsx! {
        div { class: "side-pane",
            InboxItem {}
            div { class: "side-pane-scrollable",
                ServerList {}
                SidebarItem {
                    onclick: move |_| {
                        show_add_server.set(true);
                    },
                    Icon { name: "add_box", size: 40 }
                }
            }
            UpdateItem {}
            ModerationItem {}
            SettingsItem {}
            UserItem {}
            if show_add_server() {
                Modal {
                    title: "Add Server",
                    on_close: move |_| {
                        show_add_server.set(false);
                    },
                    AddServer {
                        on_close: move |_| {
                            show_add_server.set(false);
                        },
                    }
                }
            }
        }
    }
}

/// 60px square sidebar cell with selection and alert states.
#[component]
fn SidebarItem(
    #[props(default = false)] selected: bool,
    #[props(default = false)] alert: bool,
    onclick: Option<EventHandler<Event<MouseData>>>,
    oncontextmenu: Option<EventHandler<Event<MouseData>>>,
    children: Element,
) -> Element {
    let selected_class = if selected { "selected" } else { "" };
    let alert_class = if alert { "alert" } else { "" };
    rsx! {
        div {
            class: "sidebar-item {selected_class} {alert_class}",
            onclick: move |e| {
                if let Some(handler) = &onclick {
                    handler.call(e);
                }
            },
            oncontextmenu: move |e| {
                if let Some(handler) = &oncontextmenu {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

#[component]
fn InboxItem() -> Element {
    let store = use_store();
    let mut shell = use_shell();
    let route = use_route::<Route>();

    let selected = matches!(route, Route::Inbox {});
    let count = badge_count((store.notification_count)(), store.pending_friend_requests());

    // one-way projection into the shell; the sidebar never owns the title
    use_effect(move || {
        let count = badge_count((store.notification_count)(), store.pending_friend_requests());
        shell.set_title_alert(has_title_alert(count, store.servers_have_notifications()));
    });

    rsx! {
        Link { to: Route::Inbox {}, style: "text-decoration: none;",
            SidebarItem { selected, alert: count > 0,
                if count > 0 {
                    div { class: "notification-count", "{count}" }
                }
                Icon { name: "all_inbox" }
            }
        }
    }
}

#[component]
fn ServerList() -> Element {
    let store = use_store();
    let mut context_position = use_signal(|| None::<(f64, f64)>);
    let mut context_server_id = use_signal(|| None::<String>);

    let servers = store.servers.read().clone();
    let items = servers.into_iter().map(|server| {
        let key = server.id.clone();
        let menu_id = server.id.clone();
        rsx! {
            ServerItem {
                key: "{key}",
                server,
                on_context_menu: move |e: Event<MouseData>| {
                    e.prevent_default();
                    context_server_id.set(Some(menu_id.clone()));
                    let p = e.client_coordinates();
                    context_position.set(Some((p.x, p.y)));
                },
            }
        }
    });

    rsx! {
        div { class: "server-list",
            if let Some(server_id) = context_server_id() {
                ServerContextMenu {
                    server_id,
                    position: context_position(),
                    on_close: move |_| {
                        context_position.set(None);
                    },
                }
            }
            {items}
        }
    }
}

#[component]
fn ServerItem(server: Server, on_context_menu: EventHandler<Event<MouseData>>) -> Element {
    let route = use_route::<Route>();
    let selected = match &route {
        Route::ServerView { server_id } => *server_id == server.id,
        Route::ServerSettings { server_id, .. } => *server_id == server.id,
        _ => false,
    };

    rsx! {
        Link {
            to: Route::ServerView { server_id: server.id.clone() },
            style: "text-decoration: none;",
            SidebarItem {
                selected,
                alert: server.has_notifications,
                oncontextmenu: move |e: Event<MouseData>| {
                    on_context_menu.call(e);
                },
                Avatar { hex_color: server.hex_color.clone(), name: server.name.clone() }
            }
        }
    }
}

#[component]
fn UpdateItem() -> Element {
    let window = use_window_properties();
    let mut checker = use_signal(UpdateChecker::default);
    let mut latest = use_signal(|| None::<Release>);
    let mut show_modal = use_signal(|| false);

    let update_available = latest
        .read()
        .as_ref()
        .map(Release::is_newer_than_current)
        .unwrap_or(false);

    // poll when focus comes back, at most once per cooldown window
    use_effect(move || {
        if !(window.has_focus)() {
            return;
        }
        let available = latest
            .peek()
            .as_ref()
            .map(Release::is_newer_than_current)
            .unwrap_or(false);
        let due = checker.write().should_check(now_ms(), available);
        if due {
            spawn(async move {
                match fetch_latest_release().await {
                    Ok(release) => latest.set(Some(release)),
                    Err(e) => warn!("update check failed: {e:?}"),
                }
            });
        }
    });

    if !update_available {
        return rsx! {};
    }

    rsx! {
        SidebarItem {
            onclick: move |_| {
                show_modal.set(true);
            },
            Icon {
                name: "get_app",
                title: "Update Available",
                color: "#28a745",
            }
        }
        if show_modal() {
            if let Some(release) = latest() {
                Modal {
                    title: "Update Available",
                    on_close: move |_| {
                        show_modal.set(false);
                    },
                    UpdateModal {
                        release,
                        on_close: move |_| {
                            show_modal.set(false);
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn UpdateModal(release: Release, on_close: EventHandler<()>) -> Element {
    let published = format_timestamp(&release.published_at);
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 5px;",
            div { style: "max-height: 300px; max-width: 500px; overflow: auto;",
                div { style: "font-size: 24px;", "{release.name}" }
                div { style: "opacity: 0.7;", "Released at {published}" }
                div { style: "opacity: 0.7;", "{release.tag_name}" }
                {markdown_to_rsx(&release.body)}
            }
            div { style: "display: flex; gap: 0.5rem;",
                button {
                    onclick: move |_| {
                        on_close.call(());
                    },
                    "Later"
                }
                button {
                    style: "background: #007bff; color: white;",
                    onclick: move |_| async move {
                        // the surrounding shell performs the actual reload
                        let _ = dioxus::document::eval("location.reload()").await;
                    },
                    "Update Now"
                }
            }
        }
    }
}

#[component]
fn ModerationItem() -> Element {
    let store = use_store();
    let route = use_route::<Route>();

    let user_badges = store
        .account
        .read()
        .user
        .as_ref()
        .map(|u| u.badges)
        .unwrap_or(0);
    let can_moderate = badges::has_bit(user_badges, badges::CREATOR)
        || badges::has_bit(user_badges, badges::ADMIN);

    if !can_moderate {
        return rsx! {};
    }

    rsx! {
        Link { to: Route::Moderation {}, style: "text-decoration: none;",
            SidebarItem { selected: matches!(route, Route::Moderation {}),
                Icon { name: "security", title: "Moderation" }
            }
        }
    }
}

#[component]
fn SettingsItem() -> Element {
    rsx! {
        SidebarItem {
            Icon { name: "settings", title: "Settings" }
        }
    }
}

#[component]
fn UserItem() -> Element {
    let store = use_store();
    let route = use_route::<Route>();
    let mut show_error_modal = use_signal(|| false);

    let account = store.account.read().clone();
    let is_authenticating = !account.is_authenticated && account.is_connected;
    let show_connecting =
        account.auth_error.is_none() && !account.is_authenticated && !is_authenticating;

    let selected = match (&route, &account.user) {
        (Route::Profile { user_id }, Some(user)) => *user_id == user.id,
        _ => false,
    };

    let item = rsx! {
        SidebarItem { selected,
            if let Some(user) = &account.user {
                Avatar { hex_color: user.hex_color.clone(), name: user.username.clone() }
                if !show_connecting {
                    div {
                        class: "presence-dot",
                        style: "background: {user.status.color()};",
                    }
                }
            }
            if show_connecting || is_authenticating {
                Icon { name: "autorenew", size: 24 }
            }
            if account.auth_error.is_some() {
                Icon { name: "error", size: 24, color: "#dc3545" }
            }
        }
    };

    rsx! {
        if let Some(user) = &account.user {
            Link {
                to: Route::Profile { user_id: user.id.clone() },
                style: "text-decoration: none;",
                onclick: move |_| {
                    let has_error = store.account.peek().auth_error.is_some();
                    if has_error {
                        show_error_modal.set(true);
                    }
                },
                {item}
            }
        } else {
            div {
                onclick: move |_| {
                    let has_error = store.account.peek().auth_error.is_some();
                    if has_error {
                        show_error_modal.set(true);
                    }
                },
                {item}
            }
        }
        if show_error_modal() {
            Modal {
                title: "Connection Error",
                on_close: move |_| {
                    show_error_modal.set(false);
                },
                div {
                    {store.account.read().auth_error.clone().unwrap_or_else(|| "Unknown error".to_string())}
                }
            }
        }
    }
}
