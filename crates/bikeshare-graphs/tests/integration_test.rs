//! Integration tests for bikeshare-graphs crate.

use bikeshare_common::test_utils::{dataset_fixtures, date};
use bikeshare_common::RentalRecord;
use bikeshare_graphs::{
    BarDatum, DailyRentalsGraph, GraphConfig, GraphRenderer, HourlyExtremesGraph, PieChart,
    PiePanelsGraph, PieSlice, TimeSeriesPoint,
};

#[test]
fn test_render_fixture_series_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let points: Vec<TimeSeriesPoint> = dataset_fixtures::daily_records()
        .iter()
        .map(|row| TimeSeriesPoint {
            date: row.date(),
            value: row.total(),
        })
        .collect();

    let path = dir.path().join("daily_rentals.svg");
    DailyRentalsGraph::new(points, "#90CAF9")
        .render_to_file(&GraphConfig::default(), &path)
        .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("2011-01-01"));
}

#[test]
fn test_custom_dimensions_are_used() {
    let config = GraphConfig {
        width: 640,
        height: 320,
        ..GraphConfig::default()
    };
    let graph = HourlyExtremesGraph::new(
        vec![BarDatum::new("17", 170), BarDatum::new("8", 97)],
        vec![BarDatum::new("0", 29), BarDatum::new("8", 97)],
    );

    let svg = graph.render_svg(&config).unwrap();

    assert!(svg.contains("width=\"640\""));
    assert!(svg.contains("height=\"320\""));
}

#[test]
fn test_hourly_panels_accept_custom_titles() {
    let graph = HourlyExtremesGraph::new(vec![BarDatum::new("17", 170)], vec![BarDatum::new("0", 29)])
        .with_titles("Busiest", "Quietest")
        .with_colors("#123456", "#ABCDEF");

    let config = GraphConfig::default().with_axis_labels(Some("Hour of day"), None);
    let svg = graph.render_svg(&config).unwrap();

    assert!(svg.contains("Busiest"));
    assert!(svg.contains("Quietest"));
    assert!(svg.contains("Hour of day"));
}

#[test]
fn test_pies_render_every_panel_title() {
    let graph = PiePanelsGraph::new(vec![
        PieChart::new(
            "Working Day Casual and Registered",
            vec![
                PieSlice::new("casual", 13, "#80CFE8"),
                PieSlice::new("registered", 135, "#69A9BE"),
            ],
        ),
        PieChart::new(
            "Off Day Casual and Registered",
            vec![
                PieSlice::new("casual", 32, "#CDCDCD"),
                PieSlice::new("registered", 116, "#B8B7B7"),
            ],
        ),
    ]);

    let svg = graph
        .render_svg(&GraphConfig::default().with_title(""))
        .unwrap();

    assert!(svg.contains("Working Day Casual and Registered"));
    assert!(svg.contains("Off Day Casual and Registered"));
    assert!(svg.contains("8.8%"));
    assert!(svg.contains("21.6%"));
}

#[test]
fn test_single_point_series() {
    let graph = DailyRentalsGraph::new(
        vec![TimeSeriesPoint {
            date: date(2012, 12, 31),
            value: 2_729,
        }],
        "#90CAF9",
    );
    let svg = graph.render_svg(&GraphConfig::default()).unwrap();
    assert!(svg.contains("<circle"));
}
