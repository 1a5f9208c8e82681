//! Paired bar panels for the busiest and quietest hours

use crate::renderer::{draw_notice, text_style, titled_area};
use crate::{parse_color, BarDatum, GraphConfig, GraphRenderer};
use bikeshare_common::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Gap on each side of a bar, in pixels
const BAR_GAP: u32 = 8;

/// Two side-by-side bar panels; the first bar of each is highlighted
#[derive(Debug, Clone)]
pub struct HourlyExtremesGraph {
    highest: Vec<BarDatum>,
    lowest: Vec<BarDatum>,
    highest_title: String,
    lowest_title: String,
    highlight_color: String,
    muted_color: String,
}

impl HourlyExtremesGraph {
    /// Creates the panels from bars already in display order
    pub fn new(highest: Vec<BarDatum>, lowest: Vec<BarDatum>) -> Self {
        Self {
            highest,
            lowest,
            highest_title: "Highest Bike Rent Time".to_string(),
            lowest_title: "Lowest Bike Rent Time".to_string(),
            highlight_color: "#90CAF9".to_string(),
            muted_color: "#D3D3D3".to_string(),
        }
    }

    /// Overrides the bar colors
    #[must_use]
    pub fn with_colors(mut self, highlight: impl Into<String>, muted: impl Into<String>) -> Self {
        self.highlight_color = highlight.into();
        self.muted_color = muted.into();
        self
    }

    /// Overrides the panel captions
    #[must_use]
    pub fn with_titles(mut self, highest: impl Into<String>, lowest: impl Into<String>) -> Self {
        self.highest_title = highest.into();
        self.lowest_title = lowest.into();
        self
    }

    fn bar_color(&self, index: usize) -> RGBColor {
        if index == 0 {
            parse_color(&self.highlight_color)
        } else {
            parse_color(&self.muted_color)
        }
    }

    fn draw_panel<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
        title: &str,
        bars: &[BarDatum],
    ) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        if bars.is_empty() {
            let area = titled_area(area, title, config)?;
            return draw_notice(&area, config, "No hourly data");
        }

        let count = i32::try_from(bars.len()).unwrap_or(i32::MAX);
        let max = bars.iter().map(|b| b.value).max().unwrap_or(0);
        let y_max = (max + max / 10).max(1);
        let label_style = text_style(&config.style.label_font, &config.style.text_color);
        let margins = &config.style.margins;

        let mut chart = ChartBuilder::on(area)
            .caption(title, text_style(&config.style.title_font, &config.style.text_color))
            .margin(margins.outer)
            .x_label_area_size(margins.x_label_area)
            .y_label_area_size(margins.y_label_area)
            .build_cartesian_2d((0..count).into_segmented(), 0u64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .label_style(label_style.clone())
            .axis_desc_style(label_style)
            .x_desc(config.x_label.as_deref().unwrap_or("Hour"))
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(index) => usize::try_from(*index)
                    .ok()
                    .and_then(|i| bars.get(i))
                    .map(|bar| bar.label.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(bars.iter().zip(0i32..).enumerate().map(|(index, (bar, x))| {
            let mut rect = Rectangle::new(
                [(SegmentValue::Exact(x), 0), (SegmentValue::Exact(x + 1), bar.value)],
                self.bar_color(index).filled(),
            );
            rect.set_margin(0, 0, BAR_GAP, BAR_GAP);
            rect
        }))?;

        Ok(())
    }
}

impl GraphRenderer for HourlyExtremesGraph {
    fn name(&self) -> &'static str {
        "hourly extremes"
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, config: &GraphConfig) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let area = titled_area(root, &config.title, config)?;
        let panels = area.split_evenly((1, 2));

        self.draw_panel(&panels[0], config, &self.highest_title, &self.highest)?;
        self.draw_panel(&panels[1], config, &self.lowest_title, &self.lowest)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars(pairs: &[(&str, u64)]) -> Vec<BarDatum> {
        pairs.iter().map(|(label, value)| BarDatum::new(*label, *value)).collect()
    }

    #[test]
    fn test_first_bar_is_highlighted() {
        let graph = HourlyExtremesGraph::new(Vec::new(), Vec::new()).with_colors("#FF0000", "#00FF00");
        assert_eq!(graph.bar_color(0), RGBColor(255, 0, 0));
        assert_eq!(graph.bar_color(1), RGBColor(0, 255, 0));
        assert_eq!(graph.bar_color(4), RGBColor(0, 255, 0));
    }

    #[test]
    fn test_render_both_panels() {
        let graph = HourlyExtremesGraph::new(
            bars(&[("17", 336_860), ("18", 309_772), ("8", 261_001)]),
            bars(&[("4", 4_428), ("3", 8_174), ("5", 14_261)]),
        );
        let svg = graph.render_svg(&GraphConfig::default()).unwrap();

        assert!(svg.contains("Highest Bike Rent Time"));
        assert!(svg.contains("Lowest Bike Rent Time"));
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn test_empty_panels_render_notice() {
        let graph = HourlyExtremesGraph::new(Vec::new(), Vec::new());
        let svg = graph.render_svg(&GraphConfig::default()).unwrap();
        assert!(svg.contains("No hourly data"));
    }
}
