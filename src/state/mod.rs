//! Externally-owned reactive state and the collaborators the views emit into.
//!
//! Everything here is provided through context by [`crate::App`]; views only
//! read (and, for the shell, signal into) it.

mod shell;
mod store;
mod window;

pub use shell::{Shell, use_shell};
pub use store::{
    Account, Channel, Friend, FriendStatus, Server, Store, User, UserStatus, badge_count,
    badges, has_title_alert, pending_friend_requests, use_store,
};
pub use window::{WindowProperties, use_window_bridge, use_window_properties};
