//! Graph types and data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Caption drawn above the chart; empty for none
    pub title: String,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// X axis description
    pub x_label: Option<String>,
    /// Y axis description
    pub y_label: Option<String>,
    /// Fonts, background and margins
    pub style: StyleConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 1200,
            height: 640,
            x_label: None,
            y_label: None,
            style: StyleConfig::default(),
        }
    }
}

impl GraphConfig {
    /// Replaces the caption
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the axis descriptions
    #[must_use]
    pub fn with_axis_labels(mut self, x_label: Option<&str>, y_label: Option<&str>) -> Self {
        self.x_label = x_label.map(str::to_string);
        self.y_label = y_label.map(str::to_string);
        self
    }
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Size in pixels
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14,
        }
    }
}

/// Margin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    /// Outer margin around the plot
    pub outer: u32,
    /// Space reserved for x axis labels
    pub x_label_area: u32,
    /// Space reserved for y axis labels
    pub y_label_area: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            outer: 20,
            x_label_area: 50,
            y_label_area: 70,
        }
    }
}

/// Styling shared by every chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Background fill (hex)
    pub background_color: String,
    /// Text color (hex)
    pub text_color: String,
    /// Caption font
    pub title_font: FontConfig,
    /// Axis, tick and slice label font
    pub label_font: FontConfig,
    /// Plot margins
    pub margins: MarginConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            text_color: "#000000".to_string(),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 24,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
        }
    }
}

/// One point of the daily series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Rentals on that day
    pub value: u64,
}

/// One labelled bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarDatum {
    /// Category label, e.g. the hour
    pub label: String,
    /// Bar height
    pub value: u64,
}

impl BarDatum {
    /// Creates a bar
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
