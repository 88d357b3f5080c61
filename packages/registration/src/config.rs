//! # Registration form configuration — `registration.toml`
//!
//! Controls what happens around a submission: where the user lands after
//! registering and how the resulting notifications behave.
//!
//! ```toml
//! [navigation]
//! after_register = "/list"
//!
//! [notifications]
//! registered = "You've been registered!"
//! dismiss_after_secs = 5   # 0 keeps toasts until dismissed
//! ```
//!
//! Every key has a default, so a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Route the user is sent to after a successful registration.
    #[serde(default = "default_after_register")]
    pub after_register: String,
}

fn default_after_register() -> String {
    "/list".to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            after_register: default_after_register(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Success message raised after registering.
    #[serde(default = "default_registered")]
    pub registered: String,
    /// Seconds before a toast disappears on its own. 0 disables auto-dismiss.
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_secs: u32,
}

fn default_registered() -> String {
    "You've been registered!".to_string()
}

fn default_dismiss_after() -> u32 {
    5
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            registered: default_registered(),
            dismiss_after_secs: default_dismiss_after(),
        }
    }
}

impl RegistrationConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "registration.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
