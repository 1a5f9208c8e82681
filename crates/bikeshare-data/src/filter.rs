//! Inclusive date ranges and row filtering

use bikeshare_common::{BikeshareError, RentalRecord, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Inclusive `[start, end]` calendar interval with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(BikeshareError::validation_field(
                format!("start date {start} is after end date {end}"),
                "start",
            ));
        }
        Ok(Self { start, end })
    }

    /// Range covering exactly one day.
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day of the range.
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` lies within the range, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Checks that the range lies inside `bounds`.
    ///
    /// This is the selector's constraint; [`filter_by_date`] itself accepts any
    /// range.
    pub fn within_bounds(self, bounds: &Self) -> Result<Self> {
        if self.start < bounds.start {
            return Err(BikeshareError::validation_field(
                format!("start date {} is before the first available date {}", self.start, bounds.start),
                "start",
            ));
        }
        if self.end > bounds.end {
            return Err(BikeshareError::validation_field(
                format!("end date {} is after the last available date {}", self.end, bounds.end),
                "end",
            ));
        }
        Ok(self)
    }

    /// Smallest range covering every date yielded, or `None` when empty.
    pub fn spanning<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates.into_iter().fold(None, |acc: Option<Self>, date| {
            Some(match acc {
                None => Self::single_day(date),
                Some(range) => Self {
                    start: range.start.min(date),
                    end: range.end.max(date),
                },
            })
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Returns the rows dated within `range`, preserving their order.
pub fn filter_by_date<T>(rows: &[T], range: &DateRange) -> Vec<T>
where
    T: RentalRecord + Clone,
{
    let filtered: Vec<T> = rows
        .iter()
        .filter(|row| range.contains(row.date()))
        .cloned()
        .collect();

    debug!(
        "Filtered {} of {} rows to {}",
        filtered.len(),
        rows.len(),
        range
    );
    filtered
}
