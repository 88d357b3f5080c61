//! Local (email + password) account registration and session keys.

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod account;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use password::hash_password;
#[cfg(feature = "server")]
pub use account::{create_local_user, normalize, AuthError};
#[cfg(feature = "server")]
pub use session::SESSION_USER_ID_KEY;
