use serde::{Deserialize, Serialize};

use crate::FeatureFlags;

/// Route the dashboard redirects to when no session exists.
pub const DEFAULT_AUTH_ROUTE: &str = "/auth";

/// Session lifetime used when `config.toml` does not set one.
pub const DEFAULT_SESSION_MINUTES: i64 = 480;

/// Longest session lifetime accepted from `config.toml` (30 days).
pub const MAX_SESSION_MINUTES: i64 = 30 * 24 * 60;

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub auth: AuthSettings,
    /// Seeded accounts served by the in-memory directory.
    #[serde(default)]
    pub accounts: Vec<AccountSeed>,
}

/// `[auth]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSettings {
    /// Authentication entry point for unauthenticated visitors.
    #[serde(default = "default_entry_route")]
    pub entry_route: String,
    /// Lifetime of an issued session token, in minutes.
    #[serde(default = "default_session_minutes")]
    pub session_minutes: i64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            entry_route: default_entry_route(),
            session_minutes: default_session_minutes(),
        }
    }
}

fn default_entry_route() -> String {
    DEFAULT_AUTH_ROUTE.to_string()
}

fn default_session_minutes() -> i64 {
    DEFAULT_SESSION_MINUTES
}

/// One `[[accounts]]` entry.
///
/// `roles` is kept as raw strings: the directory serves whatever the file
/// says and the dashboard decides which codes it can label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSeed {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Argon2 PHC string. Accounts without one cannot sign in.
    #[serde(default)]
    pub password_hash: String,
    #[serde(default)]
    pub roles: Vec<String>,
}
