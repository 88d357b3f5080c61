//! # User model for registered users
//!
//! Two representations of a user:
//!
//! ## [`User`] (server only)
//!
//! The full row of the `users` table, loaded with [`sqlx::FromRow`]:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email` (stored lowercased), `username`, `location` — from the registration form.
//! - `password_hash` — Argon2id PHC string.
//! - `member_since` — the timestamp the client stamped on the registration request.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! ## [`UserInfo`]
//!
//! The client-safe projection returned by the server functions. It drops the
//! password hash and audit timestamps and converts `Uuid` and `DateTime` to
//! strings so it works in WASM.

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
    pub username: String,
    pub location: String,
    pub password_hash: String,
    pub member_since: DateTime<Utc>,
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
            username: self.username.clone(),
            location: self.location.clone(),
            member_since: self.member_since.to_rfc3339(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub username: String,
    pub location: String,
    /// RFC 3339 timestamp.
    pub member_since: String,
}

impl UserInfo {
    /// Date part of `member_since` (`YYYY-MM-DD`), or the whole string if it is shorter.
    pub fn member_since_date(&self) -> &str {
        self.member_since.get(..10).unwrap_or(&self.member_since)
    }
}
