//! User directory used for access control.
//!
//! Users are configured in config.toml with a token and a staff flag. The token
//! is sent as a bearer token or as the HTTP Basic password.
//! Only staff members may use the moderation pages.

use serde::Deserialize;
use std::collections::HashMap;

/// A user who can authenticate with a bearer token
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    /// Display name, used in logs
    pub name: String,
    /// Secret bearer token
    pub token: String,
    /// Whether the user may moderate listings
    #[serde(default)]
    pub is_staff: bool,
}

/// Lookup of configured users by token.
#[derive(Debug, Default)]
pub struct UserDirectory {
    by_token: HashMap<String, UserConfig>,
}

impl UserDirectory {
    /// Builds the directory. Users with an empty token are skipped; with duplicate
    /// tokens the later entry wins.
    #[must_use]
    pub fn new(users: &[UserConfig]) -> Self {
        let by_token = users
            .iter()
            .filter(|user| !user.token.is_empty())
            .map(|user| (user.token.clone(), user.clone()))
            .collect();
        Self { by_token }
    }

    /// Returns the user owning `token`, if any.
    #[must_use]
    pub fn authenticate(&self, token: &str) -> Option<&UserConfig> {
        self.by_token.get(token)
    }

    /// Number of configured staff members
    #[must_use]
    pub fn staff_count(&self) -> usize {
        self.by_token.values().filter(|user| user.is_staff).count()
    }
}
