//! Framework-free core of the registration form: field rules, reducer state,
//! aggregate validity and submission orchestration.

pub mod config;
pub mod context;
pub mod field;
pub mod form;
pub mod request;
pub mod submit;
pub mod validation;

pub use config::RegistrationConfig;
pub use context::{Navigator, Notifier, RegistrationError, RegistrationService, SessionStore, Severity};
pub use field::{Field, FieldState, Validity};
pub use form::{FormAction, FormState};
pub use request::RegistrationRequest;
pub use submit::{RegistrationContext, SubmitOutcome};
pub use validation::{form_is_valid, validate_request, FormValues, ValidationError};
