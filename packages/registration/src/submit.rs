//! Submission orchestration.
//!
//! A submit is split in two so the form state is never held across the
//! await point:
//!
//! 1. [`FormState::begin_submission`](crate::FormState::begin_submission)
//!    gates on the aggregate validity and snapshots the request.
//! 2. [`RegistrationContext::submit`] calls the service and routes the
//!    result to the session store, notifier and navigator.

use tracing::{info, warn};

use crate::config::RegistrationConfig;
use crate::context::{Navigator, Notifier, RegistrationError, RegistrationService, SessionStore, Severity};
use crate::request::RegistrationRequest;

/// How a submission settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered,
    Failed(RegistrationError),
}

/// Everything a submission needs besides the request itself.
pub struct RegistrationContext<R, S, N, V> {
    pub service: R,
    pub session: S,
    pub notifier: N,
    pub navigator: V,
    pub config: RegistrationConfig,
}

impl<R, S, N, V> RegistrationContext<R, S, N, V>
where
    R: RegistrationService,
    S: SessionStore<R::Session>,
    N: Notifier,
    V: Navigator,
{
    pub fn new(service: R, session: S, notifier: N, navigator: V, config: RegistrationConfig) -> Self {
        Self {
            service,
            session,
            notifier,
            navigator,
            config,
        }
    }

    /// Send `request` once and handle the result.
    ///
    /// Success logs the session in, raises a success notification and
    /// navigates to the post-registration route. Failure raises an error
    /// notification with the service's message and touches nothing else.
    pub async fn submit(&mut self, request: RegistrationRequest) -> SubmitOutcome {
        info!(username = %request.username, "submitting registration");

        match self.service.register(request).await {
            Ok(session) => {
                self.session.login(session);
                self.notifier
                    .notify(&self.config.notifications.registered, Severity::Success);
                self.navigator.navigate(&self.config.navigation.after_register);
                info!(to = %self.config.navigation.after_register, "registration complete");
                SubmitOutcome::Registered
            }
            Err(error) => {
                warn!(%error, "registration failed");
                self.notifier.notify(&error.to_string(), Severity::Error);
                SubmitOutcome::Failed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::Utc;

    use super::*;
    use crate::field::Field;
    use crate::form::{FormAction, FormState};

    #[derive(Debug, Clone, PartialEq)]
    struct FakeUser(String);

    /// Records every request and answers with a fixed result.
    struct FakeService {
        result: Result<FakeUser, RegistrationError>,
        calls: RefCell<Vec<RegistrationRequest>>,
    }

    impl FakeService {
        fn succeeding() -> Self {
            Self {
                result: Ok(FakeUser("user-1".to_string())),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(RegistrationError::new(message)),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl RegistrationService for FakeService {
        type Session = FakeUser;

        async fn register(&self, request: RegistrationRequest) -> Result<FakeUser, RegistrationError> {
            self.calls.borrow_mut().push(request);
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct FakeSession(Vec<FakeUser>);

    impl SessionStore<FakeUser> for FakeSession {
        fn login(&mut self, session: FakeUser) {
            self.0.push(session);
        }
    }

    #[derive(Default)]
    struct FakeNotifier(Vec<(String, Severity)>);

    impl Notifier for FakeNotifier {
        fn notify(&mut self, message: &str, severity: Severity) {
            self.0.push((message.to_string(), severity));
        }
    }

    #[derive(Default)]
    struct FakeRouter(Vec<String>);

    impl Navigator for FakeRouter {
        fn navigate(&mut self, path: &str) {
            self.0.push(path.to_string());
        }
    }

    type TestContext = RegistrationContext<FakeService, FakeSession, FakeNotifier, FakeRouter>;

    fn context(service: FakeService) -> TestContext {
        RegistrationContext::new(
            service,
            FakeSession::default(),
            FakeNotifier::default(),
            FakeRouter::default(),
            RegistrationConfig::default(),
        )
    }

    fn valid_form() -> FormState {
        let mut form = FormState::new();
        for (field, value) in [
            (Field::Email, "ada@example.com"),
            (Field::Username, "ada_l"),
            (Field::Password, "engine"),
            (Field::ConfirmPassword, "engine"),
            (Field::Location, "London"),
        ] {
            form.dispatch(FormAction::Input {
                field,
                value: value.to_string(),
            });
            form.dispatch(FormAction::Validate(field));
        }
        form
    }

    #[tokio::test]
    async fn test_success_logs_in_notifies_and_navigates_once() {
        let mut form = valid_form();
        let mut ctx = context(FakeService::succeeding());

        let request = form.begin_submission(Utc::now()).unwrap();
        let outcome = ctx.submit(request).await;
        form.finish_submission();

        assert_eq!(outcome, SubmitOutcome::Registered);
        let calls = ctx.service.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].email, "ada@example.com");
        assert_eq!(calls[0].username, "ada_l");
        assert_eq!(calls[0].location, "London");
        assert_eq!(ctx.session.0, vec![FakeUser("user-1".to_string())]);
        assert_eq!(
            ctx.notifier.0,
            vec![("You've been registered!".to_string(), Severity::Success)]
        );
        assert_eq!(ctx.navigator.0, vec!["/list".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_shows_message_and_keeps_session_empty() {
        let mut form = valid_form();
        let mut ctx = context(FakeService::failing("An account with this email already exists"));

        let request = form.begin_submission(Utc::now()).unwrap();
        let outcome = ctx.submit(request).await;
        form.finish_submission();

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(RegistrationError::new("An account with this email already exists"))
        );
        assert_eq!(ctx.service.calls.borrow().len(), 1);
        assert!(ctx.session.0.is_empty());
        assert!(ctx.navigator.0.is_empty());
        assert_eq!(
            ctx.notifier.0,
            vec![(
                "An account with this email already exists".to_string(),
                Severity::Error
            )]
        );
        // Still populated and submittable for a retry.
        assert_eq!(form.value(Field::Email), "ada@example.com");
        assert!(form.begin_submission(Utc::now()).is_some());
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_service() {
        let mut form = FormState::new();
        form.dispatch(FormAction::Input {
            field: Field::Email,
            value: "missing-at-sign".to_string(),
        });
        form.dispatch(FormAction::Validate(Field::Email));
        let ctx = context(FakeService::succeeding());

        assert!(form.begin_submission(Utc::now()).is_none());
        assert!(ctx.service.calls.borrow().is_empty());
        assert!(ctx.notifier.0.is_empty());
    }

    #[tokio::test]
    async fn test_configured_route_and_message_are_used() {
        let mut config = RegistrationConfig::default();
        config.navigation.after_register = "/welcome".to_string();
        config.notifications.registered = "Welcome aboard".to_string();
        let mut ctx = RegistrationContext::new(
            FakeService::succeeding(),
            FakeSession::default(),
            FakeNotifier::default(),
            FakeRouter::default(),
            config,
        );

        let request = valid_form().begin_submission(Utc::now()).unwrap();
        ctx.submit(request).await;

        assert_eq!(ctx.navigator.0, vec!["/welcome".to_string()]);
        assert_eq!(ctx.notifier.0[0].0, "Welcome aboard");
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_calls_again() {
        let mut form = valid_form();
        let mut ctx = context(FakeService::failing("Network error"));

        let request = form.begin_submission(Utc::now()).unwrap();
        ctx.submit(request).await;
        form.finish_submission();
        let request = form.begin_submission(Utc::now()).unwrap();
        ctx.submit(request).await;
        form.finish_submission();

        assert_eq!(ctx.service.calls.borrow().len(), 2);
        assert_eq!(ctx.notifier.0.len(), 2);
        assert!(ctx.notifier.0.iter().all(|(_, severity)| *severity == Severity::Error));
    }
}
