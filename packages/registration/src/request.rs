//! The record sent to the registration endpoint.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User data assembled at submit time.
///
/// Built once per accepted submit and sent to the registration service.
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub location: String,
    /// When the user registered.
    pub member_since: DateTime<Utc>,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("location", &self.location)
            .field("member_since", &self.member_since)
            .finish()
    }
}
