//! # User model for authenticated members
//!
//! Defines the two representations of a LinkAndLearnLabs member:
//!
//! ## [`User`] (server only)
//!
//! The complete database row from the `users` table. It derives [`sqlx::FromRow`] so it
//! can be loaded directly from queries and contains every column:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email`, `name`, `avatar_url` — profile fields populated from the auth broker's
//!   session-data response.
//! - `community_rank` — member standing label, `"Bronze"` for new accounts.
//! - `builds_shared` / `courses_completed` — aggregate counters shown on the dashboard.
//! - `created_at` / `updated_at` — audit timestamps; `created_at` doubles as the
//!   "joined" date.
//!
//! The [`User::to_info`] method projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! A client-safe subset that is `Serialize + Deserialize + PartialEq` and can cross the
//! server/client boundary via Dioxus server functions. It converts the `Uuid` to a
//! `String` so it works in WASM and formats the join date for display.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub community_rank: String,
    pub builds_shared: i32,
    pub courses_completed: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
            community_rank: self.community_rank.clone(),
            builds_shared: self.builds_shared,
            courses_completed: self.courses_completed,
            joined: self.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Member profile safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub community_rank: String,
    pub builds_shared: i32,
    pub courses_completed: i32,
    pub joined: String,
}

impl UserInfo {
    /// Get display name, falling back to email if the name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "builder@example.com".into(),
            name: name.into(),
            avatar_url: None,
            community_rank: "Bronze".into(),
            builds_shared: 0,
            courses_completed: 0,
            joined: "2025-01-01".into(),
        }
    }

    #[test]
    fn test_display_name_prefers_name() {
        assert_eq!(member("Sam Rivera").display_name(), "Sam Rivera");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(member("").display_name(), "builder@example.com");
        assert_eq!(member("   ").display_name(), "builder@example.com");
    }
}
