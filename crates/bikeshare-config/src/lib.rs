//! # Bikeshare Config
//!
//! Type-safe configuration management for the bike sharing dashboard.
//!
//! Configuration is read from YAML, overridden from the environment and
//! validated before any dataset is fetched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::*;
