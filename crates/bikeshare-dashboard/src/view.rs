//! Presentation model of one dashboard run
//!
//! [`DashboardView::build`] is a pure function of the filtered daily table
//! and the two summaries. It extracts the scalars and series the charts and
//! the page need, without aggregating anything itself.

use bikeshare_common::{sum_counts, DailyRecord, DayType};
use bikeshare_config::StyleSettings;
use bikeshare_data::{DateRange, DayTypeBreakdown, DayTypeSummary, HourlySummary};
use bikeshare_graphs::{BarDatum, PieChart, PieSlice, TimeSeriesPoint};
use serde::Serialize;

/// Number of hours shown in each extremes panel
pub const EXTREME_HOURS: usize = 5;

/// Scalar totals over the selected range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// All rentals
    pub total: u64,
    /// Casual rentals
    pub casual: u64,
    /// Registered rentals
    pub registered: u64,
}

/// Everything rendered for one date range
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Page header
    pub title: String,
    /// Selected range
    pub range: DateRange,
    /// Scalar totals from the filtered daily table
    pub metrics: Metrics,
    /// Daily totals in table order
    pub daily_series: Vec<TimeSeriesPoint>,
    /// Busiest hours, busiest first
    pub highest_hours: Vec<BarDatum>,
    /// Quietest hours, quietest first
    pub lowest_hours: Vec<BarDatum>,
    /// Work/off by casual/registered split
    pub ratio_pie: PieChart,
    /// Casual vs registered on working days
    pub work_pie: PieChart,
    /// Casual vs registered on off days
    pub off_pie: PieChart,
    /// Hourly summary, descending by total
    pub hourly_summary: Vec<HourlySummary>,
    /// Day-type summary, one row per present classification
    pub day_type_summary: Vec<DayTypeSummary>,
}

impl DashboardView {
    /// Builds the view from the filtered daily table and both summaries
    pub fn build(
        title: &str,
        range: DateRange,
        daily: &[DailyRecord],
        hourly_summary: Vec<HourlySummary>,
        day_type_summary: Vec<DayTypeSummary>,
        style: &StyleSettings,
    ) -> Self {
        let (casual, registered, total) = sum_counts(daily);
        let breakdown = DayTypeBreakdown::from_summaries(&day_type_summary);

        Self {
            title: title.to_string(),
            range,
            metrics: Metrics {
                total,
                casual,
                registered,
            },
            daily_series: daily
                .iter()
                .map(|row| TimeSeriesPoint {
                    date: row.date,
                    value: row.total,
                })
                .collect(),
            highest_hours: highest_hours(&hourly_summary),
            lowest_hours: lowest_hours(&hourly_summary),
            ratio_pie: ratio_pie(&breakdown, &style.ratio_colors),
            work_pie: rider_pie(
                "Working Day Casual and Registered",
                &breakdown,
                DayType::Work,
                &style.work_colors,
            ),
            off_pie: rider_pie(
                "Off Day Casual and Registered",
                &breakdown,
                DayType::Off,
                &style.off_colors,
            ),
            hourly_summary,
            day_type_summary,
        }
    }

    /// Whether the range matched no hourly and no daily rows
    pub fn is_empty(&self) -> bool {
        self.daily_series.is_empty() && self.hourly_summary.is_empty()
    }
}

/// First hours of the descending summary
pub fn highest_hours(summary: &[HourlySummary]) -> Vec<BarDatum> {
    summary
        .iter()
        .take(EXTREME_HOURS)
        .map(|row| BarDatum::new(row.hour.clone(), row.total))
        .collect()
}

/// Last hours of the descending summary, re-sorted ascending
pub fn lowest_hours(summary: &[HourlySummary]) -> Vec<BarDatum> {
    let tail = &summary[summary.len().saturating_sub(EXTREME_HOURS)..];
    let mut bars: Vec<BarDatum> = tail
        .iter()
        .map(|row| BarDatum::new(row.hour.clone(), row.total))
        .collect();
    bars.sort_by_key(|bar| bar.value);
    bars
}

fn color_at(palette: &[String], index: usize) -> String {
    palette.get(index).cloned().unwrap_or_default()
}

fn ratio_pie(breakdown: &DayTypeBreakdown, palette: &[String]) -> PieChart {
    let work = breakdown.get(DayType::Work);
    let off = breakdown.get(DayType::Off);

    PieChart::new(
        "",
        vec![
            PieSlice::new("work casual", work.casual, color_at(palette, 0)),
            PieSlice::new("work registered", work.registered, color_at(palette, 1)),
            PieSlice::new("off casual", off.casual, color_at(palette, 2)),
            PieSlice::new("off registered", off.registered, color_at(palette, 3)),
        ],
    )
}

fn rider_pie(title: &str, breakdown: &DayTypeBreakdown, kind: DayType, palette: &[String]) -> PieChart {
    let summary = breakdown.get(kind);

    PieChart::new(
        title,
        vec![
            PieSlice::new("casual", summary.casual, color_at(palette, 0)),
            PieSlice::new("registered", summary.registered, color_at(palette, 1)),
        ],
    )
}
