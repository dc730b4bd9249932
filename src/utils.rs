//! Small cross-platform helpers.

/// Milliseconds since the Unix epoch (native).
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Milliseconds since the Unix epoch (wasm); `SystemTime` is unavailable in
/// the browser.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// First letters of up to two words, for avatar placeholders.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|w| w.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_at_most_two_words() {
        assert_eq!(initials("Rust Hideout"), "RH");
        assert_eq!(initials("lobby"), "L");
        assert_eq!(initials("a b c"), "AB");
        assert_eq!(initials(""), "");
    }
}
