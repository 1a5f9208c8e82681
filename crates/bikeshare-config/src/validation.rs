//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #90CAF9)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Validate a dataset source: an http(s) URL or a local file path
pub fn validate_source(source: &str) -> Result<(), ValidationError> {
    let source = source.trim();
    if source.is_empty() {
        return Err(ValidationError::new("empty_source"));
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        return match url::Url::parse(source) {
            Ok(parsed) if parsed.host_str().is_some() => Ok(()),
            _ => Err(ValidationError::new("invalid_source_url")),
        };
    }

    validate_file_path(source)
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon is allowed for Windows drive letters (C:\)
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}

/// Validate that every entry of a palette is a hex color
pub fn validate_palette(colors: &[String]) -> Result<(), ValidationError> {
    if colors.iter().all(|color| HEX_COLOR_REGEX.is_match(color)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_palette_color"))
    }
}

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}
