//! Application configuration structures

use bikeshare_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Default location of the cleaned hourly dataset
pub const DEFAULT_HOURLY_SOURCE: &str =
    "https://drive.google.com/uc?export=download&id=1Gqq1hOdO7CyQ2t266StNGOo6o5KBATRd";

/// Default location of the cleaned daily dataset
pub const DEFAULT_DAILY_SOURCE: &str =
    "https://drive.google.com/uc?export=download&id=1_xLobGvShWAotqwUHarx6aTi6OnR0oZV";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Dataset sources
    #[validate]
    pub data: DataSettings,

    /// Output location and chart dimensions
    #[validate]
    pub output: OutputSettings,

    /// Chart colors and fonts
    #[validate]
    pub style: StyleSettings,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// Dataset source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataSettings {
    /// Hourly dataset: http(s) URL or local path
    #[validate(custom(
        function = "crate::validation::validate_source",
        message = "Hourly source must be an http(s) URL or a file path"
    ))]
    pub hourly_source: String,

    /// Daily dataset: http(s) URL or local path
    #[validate(custom(
        function = "crate::validation::validate_source",
        message = "Daily source must be an http(s) URL or a file path"
    ))]
    pub daily_source: String,

    /// Request timeout in seconds for remote sources
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub request_timeout_seconds: u64,
}

impl DataSettings {
    /// Request timeout as a [`Duration`]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory receiving the charts, the page and the summary
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Output directory must be a valid path"
    ))]
    pub directory: String,

    /// Page header
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    /// Chart width in pixels
    #[validate(range(min = 100, max = 4000, message = "Width must be between 100 and 4000 pixels"))]
    pub width: u32,

    /// Chart height in pixels
    #[validate(range(min = 100, max = 4000, message = "Height must be between 100 and 4000 pixels"))]
    pub height: u32,

    /// Whether to write `summary.json` next to the page
    pub write_summary_json: bool,
}

/// Chart styling configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StyleSettings {
    /// Background color (hex format)
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Background color must be valid hex color"
    ))]
    pub background_color: String,

    /// Daily rentals line color
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Line color must be valid hex color"
    ))]
    pub line_color: String,

    /// Color of the leading bar in each hourly panel
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Highlight color must be valid hex color"
    ))]
    pub highlight_color: String,

    /// Color of the remaining bars
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Muted color must be valid hex color"
    ))]
    pub muted_color: String,

    /// Combined pie: work casual, work registered, off casual, off registered
    #[validate(
        length(equal = 4, message = "Ratio palette needs exactly 4 colors"),
        custom(function = "crate::validation::validate_palette", message = "Ratio palette must contain hex colors")
    )]
    pub ratio_colors: Vec<String>,

    /// Working day pie: casual, registered
    #[validate(
        length(equal = 2, message = "Work palette needs exactly 2 colors"),
        custom(function = "crate::validation::validate_palette", message = "Work palette must contain hex colors")
    )]
    pub work_colors: Vec<String>,

    /// Off day pie: casual, registered
    #[validate(
        length(equal = 2, message = "Off palette needs exactly 2 colors"),
        custom(function = "crate::validation::validate_palette", message = "Off palette must contain hex colors")
    )]
    pub off_colors: Vec<String>,

    /// Font family for text rendering
    #[validate(length(min = 1, message = "Font family cannot be empty"))]
    pub font_family: String,

    /// Font size for chart titles
    #[validate(range(min = 8, max = 72, message = "Title font size must be between 8 and 72"))]
    pub title_font_size: u32,

    /// Font size for axis and slice labels
    #[validate(range(min = 8, max = 72, message = "Label font size must be between 8 and 72"))]
    pub label_font_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error"
    ))]
    pub level: String,

    /// Optional log file path
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Log file must be a valid path"
    ))]
    pub file: Option<String>,

    /// Output format
    pub format: LogFormat,

    /// Whether to log span open/close events
    pub include_spans: bool,
}

impl LoggingSettings {
    /// Converts the settings into the subscriber configuration
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            include_spans: self.include_spans,
            ..LoggingConfig::default()
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            hourly_source: DEFAULT_HOURLY_SOURCE.to_string(),
            daily_source: DEFAULT_DAILY_SOURCE.to_string(),
            request_timeout_seconds: 30,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: "dashboard".to_string(),
            title: "Bike Sharing Dashboard".to_string(),
            width: 1200,
            height: 640,
            write_summary_json: true,
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            line_color: "#90CAF9".to_string(),
            highlight_color: "#90CAF9".to_string(),
            muted_color: "#D3D3D3".to_string(),
            ratio_colors: palette(&["#80CFE8", "#69A9BE", "#CDCDCD", "#B8B7B7"]),
            work_colors: palette(&["#80CFE8", "#69A9BE"]),
            off_colors: palette(&["#CDCDCD", "#B8B7B7"]),
            font_family: "sans-serif".to_string(),
            title_font_size: 24,
            label_font_size: 14,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            format: LogFormat::Pretty,
            include_spans: false,
        }
    }
}

fn palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| (*c).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.data.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.style.ratio_colors.len(), 4);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let mut config = Config::default();
        config.style.line_color = "blue".to_string();
        let errors = config.validate().unwrap_err();
        assert!(errors.to_string().contains("line_color"));
    }

    #[test]
    fn test_palette_length_is_enforced() {
        let mut config = Config::default();
        config.style.work_colors.push("#000000".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_palette_entries_are_checked() {
        let mut config = Config::default();
        config.style.off_colors[1] = "grey".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dimension_and_timeout_ranges() {
        let mut config = Config::default();
        config.output.width = 50;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.data.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let mut config = Config::default();
        config.data.daily_source = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_settings_conversion() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            file: Some("dashboard.log".to_string()),
            format: LogFormat::Compact,
            include_spans: true,
        };
        let config = settings.to_logging_config();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.file_path.as_deref(), Some("dashboard.log"));
        assert!(config.include_spans);
    }
}
