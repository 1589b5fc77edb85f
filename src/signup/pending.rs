//! In-flight subscription requests
//!
//! The subscription service is a stand-in for the real newsletter backend;
//! [`SimulatedSubscription`] settles successfully after a fixed latency.

use super::email::EmailAddress;
use crate::timing::{SharedScheduler, Task};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// State of a [`PendingOperation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    /// Nothing started yet
    Idle,
    /// Waiting for the service
    Pending,
    /// Service reported completion
    Settled,
}

/// The controller's single subscription request slot
#[derive(Debug, Clone)]
pub struct PendingOperation {
    state: OperationState,
    request: Option<(Uuid, EmailAddress)>,
}

impl PendingOperation {
    /// An idle slot
    pub fn new() -> Self {
        Self {
            state: OperationState::Idle,
            request: None,
        }
    }

    /// Current state
    pub fn state(&self) -> OperationState {
        self.state
    }

    /// Begin a request for `email`, returning its id
    pub fn start(&mut self, email: EmailAddress) -> Uuid {
        let id = Uuid::new_v4();
        self.request = Some((id, email));
        self.state = OperationState::Pending;
        id
    }

    /// Settle request `id`, returning its email
    ///
    /// Returns `None` if `id` is not the pending request.
    pub fn settle(&mut self, id: Uuid) -> Option<EmailAddress> {
        match &self.request {
            Some((pending, email)) if *pending == id && self.state == OperationState::Pending => {
                self.state = OperationState::Settled;
                Some(email.clone())
            }
            _ => None,
        }
    }
}

impl Default for PendingOperation {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend accepting newsletter subscriptions
pub trait SubscriptionService: Send + Sync {
    /// Subscribe `email`, running `on_settled` once the service answers
    fn subscribe(&self, email: &EmailAddress, on_settled: Task);
}

/// Subscription service that always succeeds after a fixed latency
pub struct SimulatedSubscription {
    scheduler: SharedScheduler,
    latency: Duration,
}

impl SimulatedSubscription {
    /// Settle every request `latency` after it is made
    pub fn new(scheduler: SharedScheduler, latency: Duration) -> Self {
        Self { scheduler, latency }
    }
}

impl SubscriptionService for SimulatedSubscription {
    fn subscribe(&self, email: &EmailAddress, on_settled: Task) {
        info!(
            "Simulating subscription for {} ({:?} latency)",
            email, self.latency
        );
        self.scheduler.schedule(self.latency, on_settled);
    }
}
