//! Hourly and day-type aggregation
//!
//! Both aggregators are map-reduce passes: fold every row into a keyed
//! accumulator, then materialize the map in key order.

use crate::summary::{DayTypeSummary, HourlySummary};
use bikeshare_common::{DailyRecord, DayType, HourlyRecord};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Sums `total` per hour and orders the hours by descending volume.
///
/// Sums saturate at `u64::MAX`.
/// The sort is stable over ascending hour, so equal totals keep the lower
/// hour first. An empty table yields an empty summary.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn aggregate_by_hour(rows: &[HourlyRecord]) -> Vec<HourlySummary> {
    let mut totals: BTreeMap<u8, u64> = BTreeMap::new();
    for row in rows {
        let total = totals.entry(row.hour).or_insert(0);
        *total = total.saturating_add(row.total);
    }

    let mut grouped: Vec<(u8, u64)> = totals.into_iter().collect();
    grouped.sort_by(|a, b| b.1.cmp(&a.1));

    debug!("Aggregated {} hourly rows into {} hour buckets", rows.len(), grouped.len());

    grouped
        .into_iter()
        .map(|(hour, total)| HourlySummary::new(hour, total))
        .collect()
}

/// Sums casual, registered and total per day classification.
///
/// Only classifications present in `rows` appear in the output, `off`
/// before `work`.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn aggregate_by_day_type(rows: &[DailyRecord]) -> Vec<DayTypeSummary> {
    let mut groups: BTreeMap<DayType, DayTypeSummary> = BTreeMap::new();
    for row in rows {
        let acc = groups
            .entry(row.classify_day)
            .or_insert_with(|| DayTypeSummary::zero(row.classify_day));
        acc.casual = acc.casual.saturating_add(row.casual);
        acc.registered = acc.registered.saturating_add(row.registered);
        acc.total = acc.total.saturating_add(row.total);
    }

    debug!("Aggregated {} daily rows into {} day types", rows.len(), groups.len());

    groups.into_values().collect()
}
