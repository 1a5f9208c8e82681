//! Integration tests for bikeshare-data crate.

use bikeshare_common::test_utils::{dataset_fixtures, date, property_testing};
use bikeshare_common::{sum_counts, RentalRecord};
use bikeshare_data::{
    aggregate_by_day_type, aggregate_by_hour, filter_by_date, DatasetFetcher, DatasetSource,
    DateRange, DayTypeBreakdown,
};
use proptest::prelude::*;
use std::time::Duration;

proptest! {
    #[test]
    fn test_filtered_tables_conserve_totals(
        daily in property_testing::daily_table_strategy(80),
        hourly in property_testing::hourly_table_strategy(80),
        (start, end) in property_testing::ordered_dates_strategy(),
    ) {
        let range = DateRange::new(start, end).unwrap();

        let (casual, registered, total) = sum_counts(&filter_by_date(&daily, &range));
        prop_assert_eq!(total, casual + registered);

        let (casual, registered, total) = sum_counts(&filter_by_date(&hourly, &range));
        prop_assert_eq!(total, casual + registered);
    }

    #[test]
    fn test_filter_keeps_exactly_the_rows_in_range(
        daily in property_testing::daily_table_strategy(80),
        (start, end) in property_testing::ordered_dates_strategy(),
    ) {
        let range = DateRange::new(start, end).unwrap();
        let filtered = filter_by_date(&daily, &range);

        prop_assert!(filtered.iter().all(|row| start <= row.date() && row.date() <= end));

        let expected: Vec<_> = daily
            .iter()
            .filter(|row| start <= row.date && row.date <= end)
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn test_hourly_summary_conserves_and_orders(
        hourly in property_testing::hourly_table_strategy(120),
        (start, end) in property_testing::ordered_dates_strategy(),
    ) {
        let filtered = filter_by_date(&hourly, &DateRange::new(start, end).unwrap());
        let summary = aggregate_by_hour(&filtered);

        let summed: u64 = summary.iter().map(|s| s.total).sum();
        prop_assert_eq!(summed, sum_counts(&filtered).2);

        for pair in summary.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_day_type_summary_conserves_totals(
        daily in property_testing::daily_table_strategy(80),
        (start, end) in property_testing::ordered_dates_strategy(),
    ) {
        let filtered = filter_by_date(&daily, &DateRange::new(start, end).unwrap());
        let summary = aggregate_by_day_type(&filtered);

        let summed: u64 = summary.iter().map(|s| s.total).sum();
        prop_assert_eq!(summed, sum_counts(&filtered).2);

        let breakdown = DayTypeBreakdown::from_summaries(&summary);
        prop_assert_eq!(breakdown.off.total + breakdown.work.total, summed);
    }

    #[test]
    fn test_refiltering_is_idempotent(
        hourly in property_testing::hourly_table_strategy(80),
        (start, end) in property_testing::ordered_dates_strategy(),
    ) {
        let range = DateRange::new(start, end).unwrap();
        let once = filter_by_date(&hourly, &range);
        let twice = filter_by_date(&once, &range);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_inverted_range_is_rejected((start, end) in property_testing::ordered_dates_strategy()) {
        prop_assume!(start < end);
        prop_assert!(DateRange::new(end, start).is_err());
    }
}

#[test]
fn test_empty_range_yields_empty_summaries() {
    let hourly = dataset_fixtures::hourly_records();
    let daily = dataset_fixtures::daily_records();
    let range = DateRange::single_day(date(2011, 3, 1));

    let filtered_hourly = filter_by_date(&hourly, &range);
    let filtered_daily = filter_by_date(&daily, &range);

    assert!(aggregate_by_hour(&filtered_hourly).is_empty());
    assert!(aggregate_by_day_type(&filtered_daily).is_empty());
    assert_eq!(sum_counts(&filtered_daily), (0, 0, 0));
}

#[tokio::test]
async fn test_load_filter_aggregate_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let hourly_path = dataset_fixtures::write_csv(dir.path(), "hour.csv", dataset_fixtures::HOURLY_CSV);
    let daily_path = dataset_fixtures::write_csv(dir.path(), "day.csv", dataset_fixtures::DAILY_CSV);

    let fetcher = DatasetFetcher::new(Duration::from_secs(5)).unwrap();
    let dataset = fetcher
        .load(
            &hourly_path.to_string_lossy().parse::<DatasetSource>().unwrap(),
            &DatasetSource::Path(daily_path),
        )
        .await
        .unwrap();

    let bounds = dataset.date_bounds().unwrap();
    let range = DateRange::new(date(2011, 1, 2), date(2011, 1, 3))
        .unwrap()
        .within_bounds(&bounds)
        .unwrap();

    let hours = aggregate_by_hour(&filter_by_date(&dataset.hourly, &range));
    let leading: Vec<(&str, u64)> = hours.iter().map(|s| (s.hour.as_str(), s.total)).collect();
    assert_eq!(leading, vec![("17", 130), ("8", 89), ("0", 13)]);

    let breakdown = DayTypeBreakdown::from_summaries(&aggregate_by_day_type(&filter_by_date(
        &dataset.daily,
        &range,
    )));
    assert_eq!(breakdown.off.total, 84);
    assert_eq!(breakdown.work.total, 148);
}

#[tokio::test]
async fn test_invalid_row_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dataset_fixtures::write_csv(
        dir.path(),
        "day.csv",
        "date,classify_day,casual,registered,total\n2011-01-01,off,1,2,30\n",
    );

    let fetcher = DatasetFetcher::new(Duration::from_secs(5)).unwrap();
    let err = fetcher.load_daily(&DatasetSource::Path(path)).await.unwrap_err();

    assert_eq!(err.field(), Some("total"));
}

#[test]
fn test_summaries_serialize_for_machine_consumers() {
    let summary = aggregate_by_day_type(&dataset_fixtures::daily_records());
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json[0]["classify_day"], "off");
    assert_eq!(json[1]["registered"], 135);
}
