//! The application store: servers, friends, inbox and account state.
//!
//! The store is owned by the surrounding application (chat backend, auth and
//! presence live elsewhere); this crate only projects it into views. The
//! badge helpers are free functions so they stay testable without a running
//! scope.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub default_channel_id: String,
    pub hex_color: String,
    pub has_notifications: bool,
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendStatus {
    Sent,
    Pending,
    Friends,
    Blocked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub user: User,
    pub status: FriendStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Offline,
    Online,
    Away,
    Busy,
}

impl UserStatus {
    pub fn color(&self) -> &'static str {
        match self {
            UserStatus::Offline => "#adb5bd",
            UserStatus::Online => "#28a745",
            UserStatus::Away => "#ffc107",
            UserStatus::Busy => "#dc3545",
        }
    }
}

/// User badge bitfield.
pub mod badges {
    pub const CREATOR: u32 = 1;
    pub const ADMIN: u32 = 2;

    pub fn has_bit(badges: u32, bit: u32) -> bool {
        badges & bit == bit
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub hex_color: String,
    pub badges: u32,
    pub status: UserStatus,
}

/// Connection and authentication state, rendered but never recovered here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Account {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_connected: bool,
    pub auth_error: Option<String>,
}

/// Reactive handle onto the shared application state.
#[derive(Clone, Copy)]
pub struct Store {
    pub servers: Signal<Vec<Server>>,
    pub friends: Signal<Vec<Friend>>,
    pub notification_count: Signal<u32>,
    pub account: Signal<Account>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            servers: Signal::new(vec![]),
            friends: Signal::new(vec![]),
            notification_count: Signal::new(0),
            account: Signal::new(Account::default()),
        }
    }

    /// Placeholder population until the backend store is wired in.
    pub fn demo() -> Self {
        let user = |id: &str, name: &str, color: &str, status| User {
            id: id.into(),
            username: name.into(),
            hex_color: color.into(),
            badges: 0,
            status,
        };
        let mut store = Self::new();
        store.servers.set(vec![
            Server {
                id: "1".into(),
                name: "Rust Hideout".into(),
                default_channel_id: "10".into(),
                hex_color: "#e8684e".into(),
                has_notifications: false,
                channels: vec![
                    Channel { id: "10".into(), name: "general".into() },
                    Channel { id: "11".into(), name: "showcase".into() },
                ],
            },
            Server {
                id: "2".into(),
                name: "Pixel Cave".into(),
                default_channel_id: "20".into(),
                hex_color: "#4e9fe8".into(),
                has_notifications: true,
                channels: vec![Channel { id: "20".into(), name: "lobby".into() }],
            },
        ]);
        store.friends.set(vec![
            Friend {
                user: user("u2", "marbled", "#7ac74f", UserStatus::Online),
                status: FriendStatus::Friends,
            },
            Friend {
                user: user("u3", "quince", "#c74f9e", UserStatus::Away),
                status: FriendStatus::Pending,
            },
        ]);
        store.account.set(Account {
            user: Some(User {
                badges: badges::ADMIN,
                ..user("u1", "wren", "#e8b84e", UserStatus::Online)
            }),
            is_authenticated: true,
            is_connected: true,
            auth_error: None,
        });
        store
    }

    pub fn pending_friend_requests(&self) -> u32 {
        pending_friend_requests(&self.friends.read())
    }

    pub fn servers_have_notifications(&self) -> bool {
        self.servers.read().iter().any(|s| s.has_notifications)
    }

    pub fn server(&self, id: &str) -> Option<Server> {
        self.servers.read().iter().find(|s| s.id == id).cloned()
    }

    pub fn add_server(&mut self, name: String) {
        let mut servers = self.servers.write();
        let id = next_server_id(&servers);
        let default_channel_id = format!("{id}0");
        servers.push(Server {
            id,
            name,
            default_channel_id: default_channel_id.clone(),
            hex_color: "#6c757d".into(),
            has_notifications: false,
            channels: vec![Channel { id: default_channel_id, name: "general".into() }],
        });
    }
}

pub fn use_store() -> Store {
    use_context()
}

/// One past the highest numeric id in use. Ids freed by a removal are never
/// handed out again, so lookups and list keys stay unambiguous.
pub fn next_server_id(servers: &[Server]) -> String {
    let max = servers
        .iter()
        .filter_map(|s| s.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}", max + 1)
}

pub fn pending_friend_requests(friends: &[Friend]) -> u32 {
    friends.iter().filter(|f| f.status == FriendStatus::Pending).count() as u32
}

/// Inbox notifications and pending friend requests roll up into one badge.
pub fn badge_count(notification_count: u32, pending_requests: u32) -> u32 {
    notification_count + pending_requests
}

/// The tab-title alert lights up for any badge or any server notification.
pub fn has_title_alert(badge_count: u32, servers_have_notifications: bool) -> bool {
    badge_count > 0 || servers_have_notifications
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(id: &str) -> Server {
        Server {
            id: id.into(),
            name: "s".into(),
            default_channel_id: "0".into(),
            hex_color: "#000".into(),
            has_notifications: false,
            channels: vec![],
        }
    }

    fn friend(status: FriendStatus) -> Friend {
        Friend {
            user: User {
                id: "u".into(),
                username: "u".into(),
                hex_color: "#000".into(),
                badges: 0,
                status: UserStatus::Online,
            },
            status,
        }
    }

    #[test]
    fn badge_is_the_sum_of_both_counters() {
        assert_eq!(badge_count(0, 0), 0);
        assert_eq!(badge_count(3, 2), 5);
    }

    #[test]
    fn only_pending_requests_count() {
        let friends = vec![
            friend(FriendStatus::Friends),
            friend(FriendStatus::Pending),
            friend(FriendStatus::Sent),
            friend(FriendStatus::Pending),
            friend(FriendStatus::Blocked),
        ];
        assert_eq!(pending_friend_requests(&friends), 2);
    }

    #[test]
    fn title_alert_truth_table() {
        assert!(!has_title_alert(0, false));
        assert!(has_title_alert(1, false));
        assert!(has_title_alert(0, true));
        assert!(has_title_alert(4, true));
    }

    #[test]
    fn server_ids_are_not_reused_after_a_removal() {
        let mut servers = vec![server("1"), server("2")];
        // leaving server 1 must not make its id available again
        servers.retain(|s| s.id != "1");
        assert_eq!(next_server_id(&servers), "3");
    }

    #[test]
    fn next_server_id_starts_at_one() {
        assert_eq!(next_server_id(&[]), "1");
    }

    #[test]
    fn badge_bits() {
        assert!(badges::has_bit(badges::ADMIN, badges::ADMIN));
        assert!(badges::has_bit(badges::ADMIN | badges::CREATOR, badges::CREATOR));
        assert!(!badges::has_bit(badges::CREATOR, badges::ADMIN));
        assert!(!badges::has_bit(0, badges::ADMIN));
    }
}
