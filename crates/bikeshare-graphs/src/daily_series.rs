//! Daily rentals line chart

use crate::renderer::{draw_notice, text_style, titled_area};
use crate::{parse_color, GraphConfig, GraphRenderer, TimeSeriesPoint};
use bikeshare_common::Result;
use chrono::{Duration, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;

const MARKER_RADIUS: i32 = 4;
const LINE_WIDTH: u32 = 2;

/// Line chart of total rentals per day, with a marker on every day
#[derive(Debug, Clone)]
pub struct DailyRentalsGraph {
    points: Vec<TimeSeriesPoint>,
    line_color: String,
}

impl DailyRentalsGraph {
    /// Creates the chart from points in display order
    pub fn new(points: Vec<TimeSeriesPoint>, line_color: impl Into<String>) -> Self {
        Self {
            points,
            line_color: line_color.into(),
        }
    }

    fn first_date(&self) -> Option<NaiveDate> {
        self.points.iter().map(|p| p.date).min()
    }

    /// Points as `(day offset from the first date, value)`
    fn plot_data(&self, origin: NaiveDate) -> Vec<(i32, u64)> {
        self.points
            .iter()
            .map(|p| {
                let offset = (p.date - origin).num_days();
                (i32::try_from(offset).unwrap_or(i32::MAX), p.value)
            })
            .collect()
    }

    fn y_upper_bound(&self) -> u64 {
        let max = self.points.iter().map(|p| p.value).max().unwrap_or(0);
        (max + max / 10).max(1)
    }
}

impl GraphRenderer for DailyRentalsGraph {
    fn name(&self) -> &'static str {
        "daily rentals"
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, config: &GraphConfig) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let area = titled_area(root, &config.title, config)?;

        let Some(origin) = self.first_date() else {
            return draw_notice(&area, config, "No rentals in the selected range");
        };

        let data = self.plot_data(origin);
        let x_max = data.iter().map(|(x, _)| *x).max().unwrap_or(0).max(1);
        let color = parse_color(&self.line_color);
        let label_style = text_style(&config.style.label_font, &config.style.text_color);
        let margins = &config.style.margins;

        let mut chart = ChartBuilder::on(&area)
            .margin(margins.outer)
            .x_label_area_size(margins.x_label_area)
            .y_label_area_size(margins.y_label_area)
            .build_cartesian_2d(0i32..x_max, 0u64..self.y_upper_bound())?;

        chart
            .configure_mesh()
            .x_labels(8)
            .y_labels(8)
            .label_style(label_style.clone())
            .axis_desc_style(label_style)
            .x_desc(config.x_label.as_deref().unwrap_or(""))
            .y_desc(config.y_label.as_deref().unwrap_or(""))
            .x_label_formatter(&|offset| {
                (origin + Duration::days(i64::from(*offset)))
                    .format("%Y-%m-%d")
                    .to_string()
            })
            .draw()?;

        chart.draw_series(LineSeries::new(
            data.iter().copied(),
            color.stroke_width(LINE_WIDTH),
        ))?;
        chart.draw_series(
            data.iter()
                .map(|&(x, y)| Circle::new((x, y), MARKER_RADIUS, color.filled())),
        )?;

        Ok(())
    }
}
