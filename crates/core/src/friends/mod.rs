//! Friends and the streak leaderboard.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::users::User;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub username: String,
    #[serde(default)]
    pub streak_days: u32,
}

impl Friend {
    pub fn new(username: &str, streak_days: u32) -> Result<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingField("username".to_string()).into());
        }
        Ok(Self {
            username: username.to_string(),
            streak_days,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub streak_days: u32,
}

/// Ranks the user and their friends by streak, longest first.
///
/// Ties keep insertion order, with the user ahead of friends.
pub fn leaderboard(user: Option<&User>, friends: &[Friend]) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<(String, u32)> = user
        .map(|u| (u.display_name(), u.streak_days))
        .into_iter()
        .chain(friends.iter().map(|f| (f.username.clone(), f.streak_days)))
        .collect();

    rows.sort_by(|a, b| b.1.cmp(&a.1));

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, streak_days))| LeaderboardEntry {
            rank: i + 1,
            name,
            streak_days,
        })
        .collect()
}
