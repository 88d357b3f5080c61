//! Registration form wired to the `registration` core.
//!
//! The component keeps a [`FormState`] in a signal and turns every input and
//! blur event into a [`FormAction`]. Submission goes through a
//! [`RegistrationContext`] built from the app's signals, the router and the
//! `register` server function.

use api::{RegistrationRequest, UserInfo};
use chrono::Utc;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use registration::{
    Field, FormAction, FormState, RegistrationConfig, RegistrationContext, RegistrationError,
    RegistrationService,
};

use crate::auth::{use_auth, AuthSession};
use crate::notifications::{use_notifications, ToastNotifier};

/// Calls the `register` server function.
pub struct ServerRegistration;

impl RegistrationService for ServerRegistration {
    type Session = UserInfo;

    async fn register(&self, request: RegistrationRequest) -> Result<UserInfo, RegistrationError> {
        api::register(request)
            .await
            .map_err(|e| RegistrationError::new(e.to_string()))
    }
}

/// Router-backed navigation.
#[derive(Clone, Copy)]
pub struct RouterNavigation(pub Navigator);

impl registration::Navigator for RouterNavigation {
    fn navigate(&mut self, path: &str) {
        self.0.push(path);
    }
}

/// Registration config provided by the app, or the defaults.
pub fn use_registration_config() -> RegistrationConfig {
    try_use_context::<RegistrationConfig>().unwrap_or_default()
}

#[component]
pub fn RegisterForm() -> Element {
    let mut form_state = use_signal(FormState::new);
    let auth = use_auth();
    let notifications = use_notifications();
    let nav = use_navigator();
    let config = use_registration_config();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(request) = form_state.write().begin_submission(Utc::now()) else {
            tracing::debug!("Submit ignored: form not submittable");
            return;
        };

        let config = config.clone();
        spawn(async move {
            let notifier = ToastNotifier::new(notifications, config.notifications.dismiss_after_secs);
            let mut ctx = RegistrationContext::new(
                ServerRegistration,
                AuthSession(auth),
                notifier,
                RouterNavigation(nav),
                config,
            );
            ctx.submit(request).await;
            form_state.write().finish_submission();
        });
    };

    rsx! {
        form {
            class: "form",
            method: "POST",
            onsubmit: handle_submit,
            FormFields { form_state }
        }
    }
}

/// The five inputs and the submit button, driven by `form_state`.
#[component]
fn FormFields(form_state: Signal<FormState>) -> Element {
    let mut form_state = form_state;
    let state = form_state();
    let submitting = state.is_submitting();
    let disabled = !state.can_submit() || submitting;

    rsx! {
        for field in Field::ALL {
            FieldInput {
                key: "{field}",
                field,
                value: state.value(field).to_string(),
                invalid: state.shows_error(field),
                on_input: move |value: String| form_state.write().dispatch(FormAction::Input { field, value }),
                on_blur: move |_| form_state.write().dispatch(FormAction::Validate(field)),
            }
        }

        button {
            r#type: "submit",
            class: "button",
            disabled,
            if submitting { "REGISTERING..." } else { "REGISTER" }
        }
    }
}

/// One labelled input with its inline error message.
#[component]
fn FieldInput(
    field: Field,
    value: String,
    invalid: bool,
    on_input: EventHandler<String>,
    on_blur: EventHandler<()>,
) -> Element {
    let name = field.name();
    let label = field.label();
    let message = field.error_message();

    rsx! {
        div {
            label { r#for: name, "{label}" }
            if invalid {
                p { class: "error-message", "{message}" }
            }
            input {
                id: name,
                name,
                r#type: field.input_type(),
                placeholder: field.placeholder(),
                class: if invalid { "input-error" } else { "" },
                value,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
                onblur: move |_| on_blur.call(()),
            }
        }
    }
}
