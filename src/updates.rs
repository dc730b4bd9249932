//! Update availability: a cooldown-gated check against the latest published
//! release, fetched by the platform HTTP client and only formatted here.

use serde::Deserialize;

/// Re-check at most once every 10 minutes.
pub const CHECK_INTERVAL_MS: u64 = 600_000;

pub const RELEASES_LATEST_URL: &str =
    "https://api.github.com/repos/perch-chat/perch/releases/latest";

/// Latest-release descriptor as published by the releases API. Display only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Release {
    pub name: String,
    pub tag_name: String,
    pub body: String,
    pub published_at: String,
}

impl Release {
    /// True when the published tag does not correspond to the running build.
    pub fn is_newer_than_current(&self) -> bool {
        self.tag_name.trim_start_matches('v') != env!("CARGO_PKG_VERSION")
    }
}

/// Rate limiter for the focus-driven update poll.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateChecker {
    last_checked_ms: u64,
}

impl UpdateChecker {
    /// Decides whether a check should run now. At most one check per
    /// [`CHECK_INTERVAL_MS`] window, and none at all once an update is
    /// already known.
    pub fn should_check(&mut self, now_ms: u64, update_available: bool) -> bool {
        if update_available {
            return false;
        }
        if now_ms.saturating_sub(self.last_checked_ms) >= CHECK_INTERVAL_MS {
            self.last_checked_ms = now_ms;
            return true;
        }
        false
    }
}

/// Formats an RFC 3339 publish timestamp for the update modal. Falls back to
/// the raw string when the API hands us something unparseable.
pub fn format_timestamp(ts: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.format("%-d %b %Y %H:%M").to_string(),
        Err(_) => ts.to_string(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_latest_release() -> anyhow::Result<Release> {
    let release = reqwest::Client::new()
        .get(RELEASES_LATEST_URL)
        .header("User-Agent", concat!("perch/", env!("CARGO_PKG_VERSION")))
        .send()
        .await?
        .error_for_status()?
        .json::<Release>()
        .await?;
    Ok(release)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_latest_release() -> anyhow::Result<Release> {
    use anyhow::anyhow;
    use gloo_net::http::Request;

    let release = Request::get(RELEASES_LATEST_URL)
        .send()
        .await
        .map_err(|e| anyhow!("{e:?}"))?
        .json::<Release>()
        .await
        .map_err(|e| anyhow!("{e:?}"))?;
    Ok(release)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_deserializes_from_api_payload() {
        let json = r###"{
            "name": "Perch 0.2.0",
            "tag_name": "v0.2.0",
            "body": "## Changes\n- swipeable drawers",
            "published_at": "2026-08-01T12:30:00Z",
            "html_url": "https://example.invalid/releases/v0.2.0"
        }"###;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v0.2.0");
        assert!(release.body.contains("swipeable"));
    }

    #[test]
    fn tag_comparison_strips_the_v_prefix() {
        let mut release = Release {
            name: "Perch".into(),
            tag_name: concat!("v", env!("CARGO_PKG_VERSION")).into(),
            body: String::new(),
            published_at: String::new(),
        };
        assert!(!release.is_newer_than_current());
        release.tag_name = "v99.0.0".into();
        assert!(release.is_newer_than_current());
    }

    #[test]
    fn checker_runs_once_per_window() {
        let mut checker = UpdateChecker::default();
        assert!(checker.should_check(CHECK_INTERVAL_MS, false));
        assert!(!checker.should_check(CHECK_INTERVAL_MS + 1, false));
        assert!(!checker.should_check(CHECK_INTERVAL_MS * 2 - 1, false));
        assert!(checker.should_check(CHECK_INTERVAL_MS * 2, false));
    }

    #[test]
    fn checker_stops_once_an_update_is_known() {
        let mut checker = UpdateChecker::default();
        assert!(!checker.should_check(CHECK_INTERVAL_MS * 5, true));
        // the suppressed call must not consume the window
        assert!(checker.should_check(CHECK_INTERVAL_MS * 5, false));
    }

    #[test]
    fn timestamp_formatting() {
        assert_eq!(format_timestamp("2026-08-01T12:30:00Z"), "1 Aug 2026 12:30");
        assert_eq!(format_timestamp("not a date"), "not a date");
    }
}
