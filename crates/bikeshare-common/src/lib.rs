//! # Bikeshare Common
//!
//! Shared record types, error handling and logging for the bike sharing
//! dashboard.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace: the hourly and daily rental records, the day
//! classification, the workspace-wide error type, and tracing setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{BikeshareError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use types::*;
