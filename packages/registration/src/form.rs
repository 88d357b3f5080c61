//! Reducer-style form state for the registration form.
//!
//! Every UI event is turned into a [`FormAction`] and fed through
//! [`FormState::dispatch`]. The aggregate `can_submit` flag is only
//! recomputed when one of the per-field validity flags changes, so it
//! follows blur validation rather than individual keystrokes.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::field::{Field, FieldState, Validity};
use crate::request::RegistrationRequest;
use crate::validation::{form_is_valid, FormValues};

/// An event on a single field.
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    /// The user edited the field.
    Input { field: Field, value: String },
    /// The field lost focus; re-run its rule against the stored value.
    Validate(Field),
}

/// State of the whole form. Owned by one form instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    email: FieldState,
    username: FieldState,
    password: FieldState,
    confirm_password: FieldState,
    location: FieldState,
    can_submit: bool,
    submitting: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Empty form with every flag `Unknown`.
    pub fn new() -> Self {
        let mut state = Self {
            email: FieldState::default(),
            username: FieldState::default(),
            password: FieldState::default(),
            confirm_password: FieldState::default(),
            location: FieldState::default(),
            can_submit: false,
            submitting: false,
        };
        state.can_submit = form_is_valid(&state.values());
        state
    }

    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Location => &self.location,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Email => &mut self.email,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Location => &mut self.location,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    pub fn validity(&self, field: Field) -> Validity {
        self.field(field).validity
    }

    /// Whether the inline error for `field` should be rendered.
    pub fn shows_error(&self, field: Field) -> bool {
        self.validity(field).is_invalid()
    }

    /// Aggregate validity as of the last validity-flag transition.
    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    /// A registration call started by this form has not settled yet.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn values(&self) -> FormValues<'_> {
        FormValues {
            email: &self.email.value,
            username: &self.username.value,
            password: &self.password.value,
            confirm_password: &self.confirm_password.value,
            location: &self.location.value,
        }
    }

    fn flags(&self) -> [Validity; 5] {
        Field::ALL.map(|field| self.validity(field))
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: FormAction) {
        let before = self.flags();

        match action {
            FormAction::Input { field, value } => {
                let state = self.field_mut(field);
                state.value = value;
                state.validity = Validity::Unknown;
            }
            FormAction::Validate(field) => {
                let validity = Validity::from(self.values().field_is_valid(field));
                debug!(field = field.name(), ?validity, "validated field");
                self.field_mut(field).validity = validity;
            }
        }

        if self.flags() != before {
            self.can_submit = form_is_valid(&self.values());
            debug!(can_submit = self.can_submit, "recomputed form validity");
        }
    }

    /// Gate a submit attempt and snapshot the request.
    ///
    /// Returns `None` when the form is not submittable or a previous
    /// submission is still in flight. Otherwise marks the form as
    /// submitting until [`FormState::finish_submission`] is called.
    pub fn begin_submission(&mut self, now: DateTime<Utc>) -> Option<RegistrationRequest> {
        if !self.can_submit || self.submitting {
            return None;
        }
        self.submitting = true;
        Some(RegistrationRequest {
            username: self.username.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
            location: self.location.value.clone(),
            member_since: now,
        })
    }

    /// The registration call settled, successfully or not.
    pub fn finish_submission(&mut self) {
        self.submitting = false;
    }
}
