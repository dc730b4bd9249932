//! Viewport width and window focus, bridged from the host page.
//!
//! A single eval registers `resize`/`focus`/`blur` listeners and streams
//! updates back; the listeners live exactly as long as the spawning scope.

use dioxus::{document, logger::tracing::warn, prelude::*};
use serde::Deserialize;

const DEFAULT_WIDTH: f64 = 375.0;

const WINDOW_BRIDGE_JS: &str = r#"
    const report = () => dioxus.send({
        width: window.innerWidth,
        has_focus: document.hasFocus(),
    });
    window.addEventListener("resize", report);
    window.addEventListener("focus", report);
    window.addEventListener("blur", report);
    report();
"#;

#[derive(Debug, Clone, Copy, Deserialize)]
struct WindowUpdate {
    width: f64,
    has_focus: bool,
}

#[derive(Clone, Copy)]
pub struct WindowProperties {
    pub width: Signal<f64>,
    pub has_focus: Signal<bool>,
}

impl WindowProperties {
    pub fn new() -> Self {
        Self {
            width: Signal::new(DEFAULT_WIDTH),
            has_focus: Signal::new(true),
        }
    }
}

pub fn use_window_properties() -> WindowProperties {
    use_context()
}

/// Spawns the bridge once for the lifetime of the app root.
pub fn use_window_bridge(mut props: WindowProperties) {
    use_future(move || async move {
        let mut eval = document::eval(WINDOW_BRIDGE_JS);
        loop {
            match eval.recv::<WindowUpdate>().await {
                Ok(update) => {
                    props.width.set(update.width);
                    props.has_focus.set(update.has_focus);
                }
                Err(e) => {
                    warn!("window bridge closed: {e:?}");
                    break;
                }
            }
        }
    });
}
