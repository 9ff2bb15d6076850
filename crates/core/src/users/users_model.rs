//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{DEFAULT_STREAK_FREEZE_TOKENS, INVITE_CODE_PREFIX, LOCAL_USER_ID};
use crate::errors::{Result, ValidationError};

/// The local account holder. Created at signup and never edited afterwards,
/// apart from the streak counters maintained by donations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string, never the plaintext password
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub invite_code: String,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub streak_last_at: Option<NaiveDateTime>,
    #[serde(default = "default_freeze_tokens")]
    pub streak_freeze_tokens: u32,
}

fn default_freeze_tokens() -> u32 {
    DEFAULT_STREAK_FREEZE_TOKENS
}

impl User {
    /// Name shown on the leaderboard; falls back to the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

/// Input model for the signup form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl NewUser {
    pub fn new(first_name: &str, last_name: &str, email: &str, password: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            username: None,
        }
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    /// Validates the signup data. All four fields are required after trimming.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("password", &self.password),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field.to_string()).into());
            }
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidInput(format!(
                "'{}' is not a valid email address",
                self.email.trim()
            ))
            .into());
        }
        Ok(())
    }

    /// Username to store: the given one, or the local part of the email.
    pub fn resolved_username(&self) -> String {
        match self.username.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .trim()
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Builds the stored user. `password_hash` must already be hashed.
    pub fn into_user(self, password_hash: String, created_at: NaiveDateTime) -> User {
        let username = self.resolved_username();
        let email = self.email.trim().to_string();
        let invite_code = invite_code(&email, created_at);
        User {
            user_id: LOCAL_USER_ID,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            username,
            email,
            password_hash,
            created_at,
            invite_code,
            streak_days: 0,
            streak_last_at: None,
            streak_freeze_tokens: DEFAULT_STREAK_FREEZE_TOKENS,
        }
    }
}

/// Shareable invite code: prefix plus the first six hex digits of
/// SHA-256(`"{email}-{created_at}"`), uppercased.
pub fn invite_code(email: &str, created_at: NaiveDateTime) -> String {
    let seed = format!("{}-{}", email, created_at.format("%Y-%m-%d %H:%M:%S"));
    let digest = Sha256::digest(seed.as_bytes());
    let hex = hex::encode(digest);
    format!("{}{}", INVITE_CODE_PREFIX, hex[..6].to_uppercase())
}
