//! Server settings registry and route matcher.
//!
//! Settings pages are declared once in [`entries`] and resolved from the
//! sub-path that follows the `/servers/:id/settings` prefix. A missing match
//! is a normal outcome ("nothing selected"), not an error.

use dioxus::prelude::*;

use crate::state::Server;
use crate::ui::server_settings_pane::{channel_page, channels_page, general_page, invites_page};

/// Everything a settings page render function may need.
pub struct PageContext<'a> {
    pub server: Option<&'a Server>,
    pub segments: &'a [String],
}

pub type PageFn = fn(&PageContext) -> Element;

/// One configured settings page: either an exact `path` or a `pattern` where
/// a `*` segment matches any single present path segment.
#[derive(Clone, Copy)]
pub struct SettingsEntry {
    pub path: Option<&'static str>,
    pub pattern: Option<&'static str>,
    pub name: &'static str,
    pub icon: &'static str,
    /// Hide the settings sub-navigation while this page is open.
    pub hide_drawer: bool,
    pub page: PageFn,
}

pub fn entries() -> &'static [SettingsEntry] {
    &ENTRIES
}

static ENTRIES: [SettingsEntry; 4] = [
    SettingsEntry {
        path: Some("general"),
        pattern: None,
        name: "General",
        icon: "info",
        hide_drawer: false,
        page: general_page,
    },
    SettingsEntry {
        path: None,
        pattern: Some("channels/*"),
        name: "Channels",
        icon: "storage",
        hide_drawer: true,
        page: channel_page,
    },
    SettingsEntry {
        path: Some("channels"),
        pattern: None,
        name: "Channels",
        icon: "storage",
        hide_drawer: false,
        page: channels_page,
    },
    SettingsEntry {
        path: Some("invites"),
        pattern: None,
        name: "Invites",
        icon: "mail",
        hide_drawer: false,
        page: invites_page,
    },
];

/// Finds the first entry whose `path` equals `page` exactly, or whose
/// `pattern` matches `segments` position-by-position. Declaration order wins.
pub fn find_entry<'a>(
    entries: &'a [SettingsEntry],
    page: &str,
    segments: &[String],
) -> Option<&'a SettingsEntry> {
    entries.iter().find(|entry| {
        if let Some(pattern) = entry.pattern {
            pattern_matches(pattern, segments)
        } else if let Some(path) = entry.path {
            path == page
        } else {
            false
        }
    })
}

/// A pattern segment beyond the available path length never matches, `*`
/// needs a present segment, anything else must be equal.
fn pattern_matches(pattern: &str, segments: &[String]) -> bool {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .enumerate()
        .all(|(i, slug)| match segments.get(i) {
            Some(current) => slug == "*" || slug == current,
            None => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_path_matches_identifier() {
        let e = find_entry(entries(), "general", &segs(&["general"])).unwrap();
        assert_eq!(e.name, "General");
        assert_eq!(e.path, Some("general"));
    }

    #[test]
    fn no_match_is_none() {
        assert!(find_entry(entries(), "emojis", &segs(&["emojis"])).is_none());
        assert!(find_entry(entries(), "", &[]).is_none());
    }

    #[test]
    fn wildcard_needs_a_present_segment() {
        // channels/123 -> the single-channel editor
        let e = find_entry(entries(), "channels", &segs(&["channels", "123"])).unwrap();
        assert_eq!(e.pattern, Some("channels/*"));
        assert!(e.hide_drawer);

        // bare channels -> the wildcard misses, the exact entry wins
        let e = find_entry(entries(), "channels", &segs(&["channels"])).unwrap();
        assert_eq!(e.path, Some("channels"));
        assert!(!e.hide_drawer);
    }

    #[test]
    fn earlier_entry_wins_when_both_match() {
        // the pattern entry is declared before the exact `channels` entry, so
        // it shadows it whenever a channel id is present
        let e = find_entry(entries(), "channels", &segs(&["channels", "abc", "extra"])).unwrap();
        assert_eq!(e.pattern, Some("channels/*"));
    }

    #[test]
    fn pattern_literal_segments_must_be_equal() {
        assert!(pattern_matches("channels/*", &segs(&["channels", "1"])));
        assert!(!pattern_matches("channels/*", &segs(&["invites", "1"])));
        assert!(!pattern_matches("channels/*", &segs(&["channels"])));
    }
}
