//! Collaborators the submission handler talks to.
//!
//! The form never reaches for globals: the registration endpoint, the
//! session holder, the notification sink and the router are all handed in
//! through a [`RegistrationContext`].

use thiserror::Error;

use crate::request::RegistrationRequest;

/// Failure reported by the registration endpoint.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RegistrationError {
    pub message: String,
}

impl RegistrationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
}

/// The registration endpoint.
#[allow(async_fn_in_trait)]
pub trait RegistrationService {
    /// Session/user object returned on success.
    type Session;

    async fn register(&self, request: RegistrationRequest) -> Result<Self::Session, RegistrationError>;
}

/// Application-wide holder of the authenticated session.
pub trait SessionStore<S> {
    fn login(&mut self, session: S);
}

/// Notification/toast sink.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Client-side router.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}
