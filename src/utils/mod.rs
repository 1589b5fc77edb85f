//! Utility modules
//!
//! Provides logging setup.

pub mod logging;

pub use logging::{LogTarget, init_logging};
