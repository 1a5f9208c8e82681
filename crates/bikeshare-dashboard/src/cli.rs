//! Command line arguments

use bikeshare_common::Result;
use bikeshare_config::Config;
use bikeshare_data::DateRange;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Generate a static bike sharing dashboard for a date range
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bikeshare-dashboard", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// First day of the range (YYYY-MM-DD); defaults to the first observed day
    #[arg(long, value_name = "DATE", value_parser = parse_cli_date)]
    pub start: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD); defaults to the last observed day
    #[arg(long, value_name = "DATE", value_parser = parse_cli_date)]
    pub end: Option<NaiveDate>,

    /// Directory receiving the dashboard files
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Hourly dataset URL or path
    #[arg(long, value_name = "SOURCE")]
    pub hourly: Option<String>,

    /// Daily dataset URL or path
    #[arg(long, value_name = "SOURCE")]
    pub daily: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Applies the flags on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.output_dir {
            config.output.directory.clone_from(dir);
        }
        if let Some(source) = &self.hourly {
            config.data.hourly_source.clone_from(source);
        }
        if let Some(source) = &self.daily {
            config.data.daily_source.clone_from(source);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }

    /// The requested date range, before defaults are filled in
    pub const fn selection(&self) -> RangeSelection {
        RangeSelection {
            start: self.start,
            end: self.end,
        }
    }
}

/// A possibly open-ended date selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    /// Requested first day
    pub start: Option<NaiveDate>,
    /// Requested last day
    pub end: Option<NaiveDate>,
}

impl RangeSelection {
    /// Fills missing ends from `bounds` and rejects ranges outside them
    pub fn resolve(&self, bounds: &DateRange) -> Result<DateRange> {
        let start = self.start.unwrap_or_else(|| bounds.start());
        let end = self.end.unwrap_or_else(|| bounds.end());

        DateRange::new(start, end)?.within_bounds(bounds)
    }
}

fn parse_cli_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected a date as YYYY-MM-DD: {e}"))
}
