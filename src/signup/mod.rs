//! Newsletter signup module
//!
//! # Overview
//!
//! - **Validation**: `EmailAddress::parse` trims and checks the address shape
//! - **Form state**: `NewsletterForm` holds the email input and submit trigger
//! - **Pending operation**: one subscription request at a time, success-only
//! - **Controller**: `SignupController::on_submit` ties them together
//!
//! # Event Flow
//!
//! ```text
//! on_submit ──invalid──→ Presenter (error)
//!     │
//!   valid → trigger disabled → SubscriptionService ──settled──→ form reset
//!                                                          → Presenter (success)
//!                                                          → Analytics
//! ```

pub mod controller;
pub mod email;
pub mod form;
pub mod pending;

pub use controller::{SignupController, SubmitOutcome};
pub use email::{EmailAddress, is_valid_email};
pub use form::{EmailInput, NewsletterForm, TriggerControl};
pub use pending::{OperationState, PendingOperation, SimulatedSubscription, SubscriptionService};
