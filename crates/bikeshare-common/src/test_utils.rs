//! Test utilities and shared fixtures for the dashboard workspace.
//!
//! This module provides record builders, sample CSV payloads and proptest
//! strategies that the other crates use in their unit and integration tests.

use crate::{DailyRecord, DayType, HourlyRecord};
use chrono::NaiveDate;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Shorthand for a calendar date in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(any(test, feature = "testing"))]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Sample dataset fixtures.
pub mod dataset_fixtures {
    use super::*;

    /// Hourly CSV covering three days, with passthrough columns.
    pub const HOURLY_CSV: &str = "\
instant,date,season,hour,weathersit,casual,registered,total
1,2011-01-01,1,0,1,3,13,16
2,2011-01-01,1,8,1,1,7,8
3,2011-01-01,1,17,1,10,30,40
4,2011-01-02,1,0,2,2,6,8
5,2011-01-02,1,8,2,4,20,24
6,2011-01-02,1,17,2,12,40,52
7,2011-01-03,1,0,1,0,5,5
8,2011-01-03,1,8,1,5,60,65
9,2011-01-03,1,17,1,8,70,78
";

    /// Daily CSV covering the same three days.
    pub const DAILY_CSV: &str = "\
instant,date,season,classify_day,weathersit,casual,registered,total
1,2011-01-01,1,off,1,14,50,64
2,2011-01-02,1,off,2,18,66,84
3,2011-01-03,1,work,1,13,135,148
";

    /// Parsed form of [`HOURLY_CSV`].
    pub fn hourly_records() -> Vec<HourlyRecord> {
        vec![
            HourlyRecord::new(date(2011, 1, 1), 0, 3, 13),
            HourlyRecord::new(date(2011, 1, 1), 8, 1, 7),
            HourlyRecord::new(date(2011, 1, 1), 17, 10, 30),
            HourlyRecord::new(date(2011, 1, 2), 0, 2, 6),
            HourlyRecord::new(date(2011, 1, 2), 8, 4, 20),
            HourlyRecord::new(date(2011, 1, 2), 17, 12, 40),
            HourlyRecord::new(date(2011, 1, 3), 0, 0, 5),
            HourlyRecord::new(date(2011, 1, 3), 8, 5, 60),
            HourlyRecord::new(date(2011, 1, 3), 17, 8, 70),
        ]
    }

    /// Parsed form of [`DAILY_CSV`].
    pub fn daily_records() -> Vec<DailyRecord> {
        vec![
            DailyRecord::new(date(2011, 1, 1), DayType::Off, 14, 50),
            DailyRecord::new(date(2011, 1, 2), DayType::Off, 18, 66),
            DailyRecord::new(date(2011, 1, 3), DayType::Work, 13, 135),
        ]
    }

    /// Writes a CSV payload into `dir` and returns its path.
    #[cfg(any(test, feature = "testing"))]
    pub fn write_csv(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).expect("Failed to write fixture CSV");
        path
    }
}

/// Property-based testing utilities using proptest.
#[cfg(any(test, feature = "testing"))]
pub mod property_testing {
    use super::*;
    use crate::MAX_HOUR;
    use proptest::prelude::*;

    /// Strategy for dates within a small window, so generated ranges overlap.
    pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (0i64..60).prop_map(|offset| date(2011, 1, 1) + chrono::Duration::days(offset))
    }

    /// Strategy for a valid hourly row.
    pub fn hourly_record_strategy() -> impl Strategy<Value = HourlyRecord> {
        (date_strategy(), 0..=MAX_HOUR, 0u64..500, 0u64..2000).prop_map(
            |(day, hour, casual, registered)| HourlyRecord::new(day, hour, casual, registered),
        )
    }

    /// Strategy for a valid daily row.
    pub fn daily_record_strategy() -> impl Strategy<Value = DailyRecord> {
        (
            date_strategy(),
            prop_oneof![Just(DayType::Off), Just(DayType::Work)],
            0u64..5000,
            0u64..20000,
        )
            .prop_map(|(day, kind, casual, registered)| {
                DailyRecord::new(day, kind, casual, registered)
            })
    }

    /// Strategy for an hourly table of up to `max_rows` rows.
    pub fn hourly_table_strategy(max_rows: usize) -> impl Strategy<Value = Vec<HourlyRecord>> {
        proptest::collection::vec(hourly_record_strategy(), 0..max_rows)
    }

    /// Strategy for a daily table of up to `max_rows` rows.
    pub fn daily_table_strategy(max_rows: usize) -> impl Strategy<Value = Vec<DailyRecord>> {
        proptest::collection::vec(daily_record_strategy(), 0..max_rows)
    }

    /// Strategy for an ordered `(start, end)` pair.
    pub fn ordered_dates_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
        (date_strategy(), date_strategy()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
    }
}
