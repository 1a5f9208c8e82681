//! Application-wide error types using thiserror.

use bikeshare_common::BikeshareError;
use bikeshare_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Loading, filtering or rendering failed.
    #[error(transparent)]
    Pipeline(#[from] BikeshareError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<validator::ValidationErrors> for DashboardError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Config(ConfigError::ValidationError(errors))
    }
}

/// Result type for the dashboard application.
pub type DashboardResult<T> = Result<T, DashboardError>;
