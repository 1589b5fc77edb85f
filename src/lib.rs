//! `SiteFeedback` - interaction core for a static review site
//!
//! Transient notifications, debounce/throttle wrappers, a newsletter signup
//! controller and the small page widgets built on them. All timing goes
//! through an injected [`timing::Scheduler`], so every behavior can be driven
//! deterministically with [`timing::SimulatedScheduler`].
//!
//! # Components
//!
//! - [`timing`]: scheduler capability, `Debouncer`, `Throttler`
//! - [`notifications`]: single-slot notification surface and its presenter
//! - [`signup`]: email validation and the signup controller
//! - [`site`]: navigation, header, affiliate links, search and rating widgets
//! - [`analytics`]: optional event sink, called defensively
//! - [`config`]: JSON configuration with defaults

// Module declarations
pub mod analytics;
pub mod config;
pub mod error;
pub mod notifications;
pub mod signup;
pub mod site;
pub mod timing;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{Result, SiteError};
