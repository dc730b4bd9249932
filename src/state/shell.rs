//! The shell collaborator: owns outward-facing window chrome.
//!
//! Views never mutate the window title themselves; the sidebar emits its
//! alert state into the shell and the shell alone decides what the title
//! says.

use dioxus::prelude::*;

const APP_NAME: &str = "Perch";

#[derive(Clone, Copy)]
pub struct Shell {
    title_alert: Signal<bool>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            title_alert: Signal::new(false),
        }
    }

    pub fn set_title_alert(&mut self, alert: bool) {
        // avoid re-notifying subscribers on every recompute
        let current = *self.title_alert.peek();
        if current != alert {
            self.title_alert.set(alert);
        }
    }

    pub fn window_title(&self) -> String {
        if (self.title_alert)() {
            format!("• {APP_NAME}")
        } else {
            APP_NAME.to_string()
        }
    }
}

pub fn use_shell() -> Shell {
    use_context()
}
