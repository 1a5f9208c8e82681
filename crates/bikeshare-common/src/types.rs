//! Rental record types shared by the loader, the aggregators and the
//! presentation layer.

use crate::{BikeshareError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest valid hour-of-day bucket.
pub const MAX_HOUR: u8 = 23;

/// Day classification used by the daily dataset.
///
/// Variant order matches the alphabetical order of the labels, so grouping
/// through an ordered map yields `off` before `work`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Weekend or holiday.
    Off,
    /// Working day.
    Work,
}

impl DayType {
    /// All classifications in key order.
    pub const ALL: [Self; 2] = [Self::Off, Self::Work];

    /// Label used in the datasets.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Work => "work",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayType {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "off" => Ok(Self::Off),
            "work" => Ok(Self::Work),
            other => Err(BikeshareError::validation_field(
                format!("unknown day classification '{other}'"),
                "classify_day",
            )),
        }
    }
}

/// Common view over hourly and daily rental rows.
pub trait RentalRecord {
    /// Calendar date of the row.
    fn date(&self) -> NaiveDate;
    /// Casual rider count.
    fn casual(&self) -> u64;
    /// Registered rider count.
    fn registered(&self) -> u64;
    /// Total rider count.
    fn total(&self) -> u64;

    /// Checks the row-level invariants.
    fn validate(&self) -> Result<()> {
        if self.casual().checked_add(self.registered()) == Some(self.total()) {
            Ok(())
        } else {
            Err(BikeshareError::validation_field(
                format!(
                    "total {} does not equal casual {} + registered {} on {}",
                    self.total(),
                    self.casual(),
                    self.registered(),
                    self.date()
                ),
                "total",
            ))
        }
    }
}

/// One row of the hourly dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Calendar date.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Hour-of-day bucket, 0 to 23.
    pub hour: u8,
    /// Casual rentals.
    pub casual: u64,
    /// Registered rentals.
    pub registered: u64,
    /// Total rentals.
    pub total: u64,
}

impl HourlyRecord {
    /// Builds a row whose total is the sum of both rider categories.
    pub const fn new(date: NaiveDate, hour: u8, casual: u64, registered: u64) -> Self {
        Self {
            date,
            hour,
            casual,
            registered,
            total: casual + registered,
        }
    }
}

impl RentalRecord for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn casual(&self) -> u64 {
        self.casual
    }

    fn registered(&self) -> u64 {
        self.registered
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn validate(&self) -> Result<()> {
        if self.hour > MAX_HOUR {
            return Err(BikeshareError::validation_field(
                format!("hour {} is outside 0-{MAX_HOUR} on {}", self.hour, self.date),
                "hour",
            ));
        }
        if self.casual.checked_add(self.registered) != Some(self.total) {
            return Err(BikeshareError::validation_field(
                format!(
                    "total {} does not equal casual {} + registered {} on {} hour {}",
                    self.total, self.casual, self.registered, self.date, self.hour
                ),
                "total",
            ));
        }
        Ok(())
    }
}

/// One row of the daily dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Working day or off day.
    pub classify_day: DayType,
    /// Casual rentals.
    pub casual: u64,
    /// Registered rentals.
    pub registered: u64,
    /// Total rentals.
    pub total: u64,
}

impl DailyRecord {
    /// Builds a row whose total is the sum of both rider categories.
    pub const fn new(date: NaiveDate, classify_day: DayType, casual: u64, registered: u64) -> Self {
        Self {
            date,
            classify_day,
            casual,
            registered,
            total: casual + registered,
        }
    }
}

impl RentalRecord for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn casual(&self) -> u64 {
        self.casual
    }

    fn registered(&self) -> u64 {
        self.registered
    }

    fn total(&self) -> u64 {
        self.total
    }
}

/// Parses a dataset date, accepting a plain date or a date with a time part.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
        })
        .map_err(|e| BikeshareError::data_with_source(format!("invalid date '{trimmed}'"), e))
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Sums `(casual, registered, total)` over a table, saturating at `u64::MAX`.
pub fn sum_counts<T: RentalRecord>(rows: &[T]) -> (u64, u64, u64) {
    rows.iter().fold((0, 0, 0), |(casual, registered, total), row| {
        (
            casual.saturating_add(row.casual()),
            registered.saturating_add(row.registered()),
            total.saturating_add(row.total()),
        )
    })
}
