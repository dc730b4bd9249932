//! Server settings surface: the sub-navigation drawer plus the page resolved
//! by the route matcher.

use dioxus::prelude::*;

use crate::Route;
use crate::server_settings::{self, PageContext};
use crate::state::use_store;
use crate::ui::Icon;

/// Routed settings view for `/servers/:server_id/settings/:..segments`.
#[component]
pub fn ServerSettings(server_id: String, segments: Vec<String>) -> Element {
    let store = use_store();

    let page = segments.first().map(String::as_str).unwrap_or("");
    let entry = server_settings::find_entry(server_settings::entries(), page, &segments);
    let server = store.server(&server_id);

    let ctx = PageContext {
        server: server.as_ref(),
        segments: &segments,
    };
    let body = match entry {
        Some(entry) => (entry.page)(&ctx),
        None => rsx! {
            div { class: "settings-empty", "No settings page selected." }
        },
    };
    let show_nav = !entry.map(|e| e.hide_drawer).unwrap_or(false);

    rsx! {
        div { class: "server-settings", style: "display: flex; height: 100%;",
            if show_nav {
                SettingsNav {
                    server_id: server_id.clone(),
                    active: entry.map(|e| e.name.to_string()),
                }
            }
            div { class: "settings-body", style: "flex: 1; padding: 1rem; overflow-y: auto;",
                {body}
            }
        }
    }
}

/// Settings sub-navigation, one link per registry entry with an exact path.
#[component]
fn SettingsNav(server_id: String, active: Option<String>) -> Element {
    let links = server_settings::entries()
        .iter()
        .filter_map(|entry| entry.path.map(|path| (path, entry.name, entry.icon)))
        .map(|(path, name, icon)| {
            let active_class = if active.as_deref() == Some(name) { "active" } else { "" };
            rsx! {
                Link {
                    key: "{path}",
                    to: Route::ServerSettings {
                        server_id: server_id.clone(),
                        segments: vec![path.to_string()],
                    },
                    style: "text-decoration: none; color: inherit;",
                    div {
                        class: "settings-nav-item {active_class}",
                        style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem;",
                        Icon { name: icon, size: 18 }
                        "{name}"
                    }
                }
            }
        });

    rsx! {
        div { class: "settings-nav", style: "width: 160px; border-right: 1px solid #ddd;",
            {links}
        }
    }
}

pub fn general_page(ctx: &PageContext) -> Element {
    let name = ctx.server.map(|s| s.name.clone()).unwrap_or_default();
    rsx! {
        div {
            h3 { "General" }
            label { style: "display: block; margin-bottom: 0.25rem; font-weight: bold;",
                "Server name"
            }
            input { value: name, readonly: true }
        }
    }
}

pub fn channels_page(ctx: &PageContext) -> Element {
    let server_id = ctx.server.map(|s| s.id.clone()).unwrap_or_default();
    let channels = ctx.server.map(|s| s.channels.clone()).unwrap_or_default();
    let rows = channels.into_iter().map(|channel| {
        rsx! {
            Link {
                key: "{channel.id}",
                to: Route::ServerSettings {
                    server_id: server_id.clone(),
                    segments: vec!["channels".to_string(), channel.id.clone()],
                },
                style: "text-decoration: none; color: inherit;",
                div { class: "settings-row", "# {channel.name}" }
            }
        }
    });
    rsx! {
        div {
            h3 { "Channels" }
            {rows}
        }
    }
}

/// Single-channel editor reached through the `channels/*` wildcard; the
/// channel id is the matched segment.
pub fn channel_page(ctx: &PageContext) -> Element {
    let channel_id = ctx.segments.get(1).cloned().unwrap_or_default();
    let channel = ctx
        .server
        .and_then(|s| s.channels.iter().find(|c| c.id == channel_id))
        .cloned();

    match channel {
        Some(channel) => rsx! {
            div {
                h3 { "Edit Channel" }
                label { style: "display: block; margin-bottom: 0.25rem; font-weight: bold;",
                    "Channel name"
                }
                input { value: channel.name.clone(), readonly: true }
            }
        },
        None => rsx! {
            div { class: "settings-empty", "Unknown channel." }
        },
    }
}

pub fn invites_page(ctx: &PageContext) -> Element {
    let name = ctx.server.map(|s| s.name.clone()).unwrap_or_default();
    rsx! {
        div {
            h3 { "Invites" }
            p { style: "color: #666;", "Nobody has been invited to {name} yet." }
        }
    }
}
