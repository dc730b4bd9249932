//! User interface components for Perch.
//!
//! The drawer layout and sidebar are the interesting surfaces; everything
//! else is leaf primitives (icon, avatar, modal) and routed pages.

mod add_server;
mod avatar;
mod context_menu;
mod drawer_layout;
mod friends_pane;
mod icon;
mod modal;
pub mod pages;
pub mod server_settings_pane;
mod sidebar;

pub use avatar::Avatar;
pub use drawer_layout::DrawerLayout;
pub use friends_pane::FriendsPane;
pub use icon::Icon;
pub use modal::Modal;
pub use sidebar::SidePane;
