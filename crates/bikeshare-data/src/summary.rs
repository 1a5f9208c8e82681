//! Aggregated tables derived from the filtered datasets

use bikeshare_common::DayType;
use serde::Serialize;

/// Summed rentals for one hour-of-day bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlySummary {
    /// Hour rendered as text, e.g. `"17"`.
    pub hour: String,
    /// Sum of `total` for that hour across the filtered range.
    pub total: u64,
}

impl HourlySummary {
    /// Builds a summary row for `hour`.
    pub fn new(hour: u8, total: u64) -> Self {
        Self {
            hour: hour.to_string(),
            total,
        }
    }
}

/// Summed rentals for one day classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTypeSummary {
    /// Working day or off day.
    pub classify_day: DayType,
    /// Summed casual rentals.
    pub casual: u64,
    /// Summed registered rentals.
    pub registered: u64,
    /// Summed total rentals.
    pub total: u64,
}

impl DayTypeSummary {
    /// Zero-valued summary, used when a classification is absent.
    pub const fn zero(classify_day: DayType) -> Self {
        Self {
            classify_day,
            casual: 0,
            registered: 0,
            total: 0,
        }
    }
}

/// Lookup over the day-type summary by classification.
///
/// The aggregated table omits classifications absent from the range, so
/// consumers read through here instead of indexing positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTypeBreakdown {
    /// Off day totals.
    pub off: DayTypeSummary,
    /// Working day totals.
    pub work: DayTypeSummary,
}

impl DayTypeBreakdown {
    /// Builds the lookup, defaulting missing classifications to zero.
    pub fn from_summaries(summaries: &[DayTypeSummary]) -> Self {
        let find = |kind: DayType| {
            summaries
                .iter()
                .find(|s| s.classify_day == kind)
                .copied()
                .unwrap_or_else(|| DayTypeSummary::zero(kind))
        };

        Self {
            off: find(DayType::Off),
            work: find(DayType::Work),
        }
    }

    /// Summary for `kind`.
    pub const fn get(&self, kind: DayType) -> DayTypeSummary {
        match kind {
            DayType::Off => self.off,
            DayType::Work => self.work,
        }
    }
}
