//! Newsletter signup controller implementation
//!
//! Validates the submitted address, drives the trigger's loading state while
//! the subscription is pending, and reports the outcome through the
//! notification presenter and analytics.

use super::email::EmailAddress;
use super::form::NewsletterForm;
use super::pending::{OperationState, PendingOperation, SubscriptionService};
use crate::analytics::{Analytics, AnalyticsEvent};
use crate::config::MessageConfig;
use crate::notifications::{Presenter, Severity};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The address was malformed; an error notification is showing
    Rejected,
    /// A subscription request with this id is in flight
    Started(Uuid),
    /// A request is already in flight and the trigger is disabled
    Ignored,
}

/// Newsletter signup controller
///
/// Cloning is cheap; clones share the form and the pending operation.
#[derive(Clone)]
pub struct SignupController {
    form: Arc<Mutex<NewsletterForm>>,
    operation: Arc<Mutex<PendingOperation>>,
    presenter: Presenter,
    service: Arc<dyn SubscriptionService>,
    analytics: Analytics,
    messages: MessageConfig,
}

impl SignupController {
    /// Create a controller with an empty form
    pub fn new(
        presenter: Presenter,
        service: Arc<dyn SubscriptionService>,
        analytics: Analytics,
        messages: MessageConfig,
    ) -> Self {
        Self {
            form: Arc::new(Mutex::new(NewsletterForm::new(
                messages.subscribe_label.clone(),
            ))),
            operation: Arc::new(Mutex::new(PendingOperation::new())),
            presenter,
            service,
            analytics,
            messages,
        }
    }

    /// Snapshot of the form
    pub fn form(&self) -> NewsletterForm {
        self.form.lock().clone()
    }

    /// State of the subscription request slot
    pub fn operation_state(&self) -> OperationState {
        self.operation.lock().state()
    }

    /// Put `text` in the email field, as the user typing would
    pub fn type_email(&self, text: &str) {
        self.form.lock().input.set_value(text);
    }

    /// Submit whatever is currently in the email field
    pub fn submit(&self) -> SubmitOutcome {
        let value = self.form.lock().input.value().to_string();
        self.on_submit(&value)
    }

    /// Handle a submission of `email_value`
    ///
    /// A malformed address shows an error notification and leaves the form
    /// untouched. A valid one disables the trigger and starts a subscription;
    /// when it settles the form is reset and a success notification shows.
    pub fn on_submit(&self, email_value: &str) -> SubmitOutcome {
        if !self.form.lock().trigger.is_enabled() {
            debug!("Signup already pending, submission ignored");
            return SubmitOutcome::Ignored;
        }

        let email = match EmailAddress::parse(email_value) {
            Ok(email) => email,
            Err(e) => {
                info!("Signup rejected: {}", e);
                self.presenter
                    .present(self.messages.invalid_email.clone(), Severity::Error);
                return SubmitOutcome::Rejected;
            }
        };

        self.form
            .lock()
            .trigger
            .begin_loading(&self.messages.subscribing_label);
        let request_id = self.operation.lock().start(email.clone());
        info!("Signup {} started for {}", request_id, email);

        let controller = self.clone();
        self.service.subscribe(
            &email,
            Box::new(move || controller.settle(request_id)),
        );

        SubmitOutcome::Started(request_id)
    }

    fn settle(&self, request_id: Uuid) {
        let Some(email) = self.operation.lock().settle(request_id) else {
            warn!("Signup {} settled but is not pending", request_id);
            return;
        };

        {
            let mut form = self.form.lock();
            form.input.clear();
            form.trigger.restore();
        }
        info!("Signup {} settled", request_id);

        self.presenter
            .present(self.messages.subscribed.clone(), Severity::Success);
        self.analytics.report(
            &AnalyticsEvent::new("newsletter_signup").with("email", email.as_str()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Phase;
    use crate::signup::SimulatedSubscription;
    use crate::test_utils::Harness;
    use std::time::Duration;

    fn controller(harness: &Harness) -> SignupController {
        let service = SimulatedSubscription::new(
            harness.scheduler.clone(),
            harness.config.timings.subscribe_latency(),
        );
        SignupController::new(
            harness.presenter.clone(),
            Arc::new(service),
            harness.analytics.clone(),
            harness.config.messages.clone(),
        )
    }

    #[test]
    fn invalid_email_shows_error_and_keeps_input() {
        let harness = Harness::new();
        let signup = controller(&harness);

        signup.type_email("not-an-email");
        assert_eq!(signup.submit(), SubmitOutcome::Rejected);

        let rendered = harness.current_notification().unwrap();
        assert_eq!(
            rendered.notification().message(),
            "Please enter a valid email address."
        );
        assert_eq!(rendered.notification().severity(), Severity::Error);

        let form = signup.form();
        assert_eq!(form.input.value(), "not-an-email");
        assert!(form.trigger.is_enabled());
        assert_eq!(signup.operation_state(), OperationState::Idle);
        assert_eq!(harness.scheduler.pending_timers(), 1, "only auto-dismiss");
    }

    #[test]
    fn valid_email_disables_trigger_until_settled() {
        let harness = Harness::new();
        let signup = controller(&harness);

        signup.type_email("user@example.com");
        assert!(matches!(signup.submit(), SubmitOutcome::Started(_)));

        let form = signup.form();
        assert!(!form.trigger.is_enabled());
        assert!(form.trigger.is_loading());
        assert_eq!(form.trigger.label(), "Subscribing...");
        assert_eq!(signup.operation_state(), OperationState::Pending);
        assert!(harness.current_notification().is_none());

        harness.scheduler.advance(Duration::from_millis(2_000));

        let form = signup.form();
        assert!(form.trigger.is_enabled());
        assert!(!form.trigger.is_loading());
        assert_eq!(form.trigger.label(), "Subscribe");
        assert_eq!(form.input.value(), "");
        assert_eq!(signup.operation_state(), OperationState::Settled);
        assert_eq!(
            harness.current_message(),
            "Thank you for subscribing! Check your email for confirmation."
        );
    }

    #[test]
    fn settlement_reports_analytics() {
        let harness = Harness::new();
        let signup = controller(&harness);

        signup.on_submit("  user@example.com ");
        harness.scheduler.advance(Duration::from_secs(2));

        let events = harness.events.named("newsletter_signup");
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].property("email").and_then(|v| v.as_str()),
            Some("user@example.com")
        );
    }

    #[test]
    fn submissions_while_pending_are_ignored() {
        let harness = Harness::new();
        let signup = controller(&harness);

        let first = signup.on_submit("user@example.com");
        assert!(matches!(first, SubmitOutcome::Started(_)));
        assert_eq!(signup.on_submit("other@example.com"), SubmitOutcome::Ignored);

        harness.scheduler.run_until_idle();
        assert_eq!(harness.events.named("newsletter_signup").len(), 1);
    }

    #[test]
    fn success_notification_follows_normal_lifecycle() {
        let harness = Harness::new();
        let signup = controller(&harness);

        signup.on_submit("user@example.com");
        harness.scheduler.advance(Duration::from_secs(2));
        let id = harness
            .current_notification()
            .unwrap()
            .notification()
            .id();

        harness.scheduler.advance(Duration::from_millis(5_300));
        assert_eq!(
            harness.presenter.surface().lock().phase_of(id),
            Phase::Removed
        );
    }

    #[test]
    fn error_then_success_replaces_notification() {
        let harness = Harness::new();
        let signup = controller(&harness);

        signup.on_submit("bad");
        signup.on_submit("good@example.com");
        harness.scheduler.advance(Duration::from_secs(2));

        let surface = harness.presenter.surface().lock();
        assert_eq!(surface.len(), 1);
        assert_eq!(
            surface.current().unwrap().notification().severity(),
            Severity::Success
        );
    }
}
