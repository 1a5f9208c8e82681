//! Integration tests for bikeshare-common crate.

use bikeshare_common::{
    parse_date, sum_counts, BikeshareError, DailyRecord, DayType, HourlyRecord, RentalRecord,
};

#[test]
fn test_tables_conserve_totals() {
    let day = parse_date("2011-01-01").unwrap();
    let hourly = vec![
        HourlyRecord::new(day, 0, 3, 13),
        HourlyRecord::new(day, 8, 1, 7),
        HourlyRecord::new(day, 17, 10, 30),
    ];
    let (casual, registered, total) = sum_counts(&hourly);
    assert_eq!(casual + registered, total);
    assert_eq!(total, 64);

    let daily = vec![DailyRecord::new(day, DayType::Off, 14, 50)];
    let (casual, registered, total) = sum_counts(&daily);
    assert_eq!((casual, registered, total), (14, 50, 64));
}

#[test]
fn test_day_type_round_trips_through_display() {
    for kind in DayType::ALL {
        assert_eq!(kind.to_string().parse::<DayType>().unwrap(), kind);
    }
}

#[test]
fn test_validation_error_reports_field() {
    let err = "weekend".parse::<DayType>().unwrap_err();
    assert!(matches!(err, BikeshareError::Validation { .. }));
    assert_eq!(err.field(), Some("classify_day"));
}

#[test]
fn test_first_invalid_row_is_found() {
    fn first_invalid<T: RentalRecord>(rows: &[T]) -> Option<usize> {
        rows.iter().position(|row| row.validate().is_err())
    }

    let day = parse_date("2012-06-01 00:00:00").unwrap();
    let mut rows = vec![
        DailyRecord::new(day, DayType::Work, 100, 900),
        DailyRecord::new(day, DayType::Work, 10, 20),
    ];
    assert_eq!(first_invalid(&rows), None);

    rows[1].total = 31;
    assert_eq!(first_invalid(&rows), Some(1));
}
