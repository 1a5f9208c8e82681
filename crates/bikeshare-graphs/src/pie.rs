//! Pie charts drawn as polygon wedges
//!
//! Slices start at three o'clock and run counter-clockwise. Each wedge
//! carries its label outside the rim and its share inside, formatted to one
//! decimal place.

use crate::renderer::{draw_notice, text_style, titled_area};
use crate::{parse_color, GraphConfig, GraphRenderer};
use bikeshare_common::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;
use std::f64::consts::TAU;

const RADIUS_RATIO: f64 = 0.32;
const LABEL_RADIUS: f64 = 1.18;
const PERCENT_RADIUS: f64 = 0.6;

/// One segment of a pie
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    /// Segment label
    pub label: String,
    /// Segment size
    pub value: u64,
    /// Fill color (hex)
    pub color: String,
}

impl PieSlice {
    /// Creates a slice
    pub fn new(label: impl Into<String>, value: u64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// A titled pie
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChart {
    /// Caption above the pie
    pub title: String,
    /// Segments in drawing order
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Creates a pie
    pub fn new(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self {
            title: title.into(),
            slices,
        }
    }

    /// Sum of all segments
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Whether there is nothing to split
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Each segment's share of the pie, or `None` when the pie is empty
    pub fn shares(&self) -> Option<Vec<f64>> {
        let values: Vec<u64> = self.slices.iter().map(|s| s.value).collect();
        slice_shares(&values)
    }

    /// Formatted share of each segment, or `None` when the pie is empty
    pub fn percentages(&self) -> Option<Vec<String>> {
        self.shares()
            .map(|shares| shares.into_iter().map(format_percentage).collect())
    }
}

/// Shares of `values` in their sum; `None` when the sum is zero
pub fn slice_shares(values: &[u64]) -> Option<Vec<f64>> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return None;
    }
    Some(values.iter().map(|v| *v as f64 / total as f64).collect())
}

/// Formats a share as a percentage with one decimal, e.g. `0.1234` as `"12.3%"`
pub fn format_percentage(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// One or more pies laid out side by side
#[derive(Debug, Clone)]
pub struct PiePanelsGraph {
    pies: Vec<PieChart>,
}

impl PiePanelsGraph {
    /// Creates the layout, one panel per pie
    pub const fn new(pies: Vec<PieChart>) -> Self {
        Self { pies }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    (
        (center.0 + radius * angle.cos()).round() as i32,
        (center.1 - radius * angle.sin()).round() as i32,
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wedge_points(center: (f64, f64), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = (sweep.to_degrees().ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(polar(center, 0.0, 0.0));
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        points.push(polar(center, radius, angle));
    }
    points
}

fn draw_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &GraphConfig,
    pie: &PieChart,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let area = titled_area(area, &pie.title, config)?;
    let Some(shares) = pie.shares() else {
        return draw_notice(&area, config, "No rentals to split");
    };

    let (width, height) = area.dim_in_pixel();
    let center = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let radius = f64::from(width.min(height)) * RADIUS_RATIO;
    let label_style = text_style(&config.style.label_font, &config.style.text_color)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let mut start = 0.0_f64;
    for (slice, share) in pie.slices.iter().zip(shares) {
        let sweep = share * TAU;
        if sweep > 0.0 {
            area.draw(&Polygon::new(
                wedge_points(center, radius, start, sweep),
                parse_color(&slice.color).filled(),
            ))?;
        }

        let middle = start + sweep / 2.0;
        area.draw(&Text::new(
            slice.label.clone(),
            polar(center, radius * LABEL_RADIUS, middle),
            label_style.clone(),
        ))?;
        area.draw(&Text::new(
            format_percentage(share),
            polar(center, radius * PERCENT_RADIUS, middle),
            label_style.clone(),
        ))?;

        start += sweep;
    }

    Ok(())
}

impl GraphRenderer for PiePanelsGraph {
    fn name(&self) -> &'static str {
        "pie"
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, config: &GraphConfig) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let area = titled_area(root, &config.title, config)?;
        if self.pies.is_empty() {
            return draw_notice(&area, config, "No rentals to split");
        }

        let panels = area.split_evenly((1, self.pies.len()));
        for (panel, pie) in panels.iter().zip(&self.pies) {
            draw_pie(panel, config, pie)?;
        }
        Ok(())
    }
}
