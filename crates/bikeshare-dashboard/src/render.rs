//! Writes the dashboard files for a [`DashboardView`]

use crate::page::render_page;
use crate::view::DashboardView;
use bikeshare_common::Result;
use bikeshare_config::{OutputSettings, StyleSettings};
use bikeshare_graphs::{
    DailyRentalsGraph, FontConfig, GraphConfig, GraphRenderer, HourlyExtremesGraph, MarginConfig,
    PieChart, PiePanelsGraph, StyleConfig,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Daily rentals line chart
pub const DAILY_CHART: &str = "daily_rentals.svg";
/// Highest and lowest hours bar panels
pub const HOURLY_CHART: &str = "hourly_extremes.svg";
/// Combined work/off by casual/registered pie
pub const RATIO_CHART: &str = "day_type_ratio.svg";
/// Per-day-type casual/registered pies
pub const BREAKDOWN_CHART: &str = "day_type_breakdown.svg";
/// Dashboard page
pub const INDEX_PAGE: &str = "index.html";
/// Machine-readable summary
pub const SUMMARY_FILE: &str = "summary.json";

/// Chart files written for one run; `None` marks a skipped chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartSet {
    /// Daily rentals chart
    pub daily: Option<&'static str>,
    /// Hourly extremes chart
    pub hourly: Option<&'static str>,
    /// Combined ratio pie
    pub ratio: Option<&'static str>,
    /// Per-day-type pies
    pub breakdown: Option<&'static str>,
}

impl ChartSet {
    /// Number of charts written
    pub fn len(&self) -> usize {
        [self.daily, self.hourly, self.ratio, self.breakdown]
            .iter()
            .flatten()
            .count()
    }

    /// Whether no chart was written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Files produced by [`DashboardRenderer::render`]
#[derive(Debug, Clone)]
pub struct RenderReport {
    /// Charts written
    pub charts: ChartSet,
    /// Path of `index.html`
    pub page: PathBuf,
    /// Path of `summary.json`, when enabled
    pub summary: Option<PathBuf>,
}

#[derive(Serialize)]
struct Summary<'a> {
    title: &'a str,
    start: String,
    end: String,
    metrics: &'a crate::view::Metrics,
    hourly: &'a [bikeshare_data::HourlySummary],
    day_types: &'a [bikeshare_data::DayTypeSummary],
    percentages: PiePercentages<'a>,
}

#[derive(Serialize)]
struct PiePercentages<'a> {
    ratio: Vec<(&'a str, String)>,
    work: Vec<(&'a str, String)>,
    off: Vec<(&'a str, String)>,
}

fn labelled_percentages(pie: &PieChart) -> Vec<(&str, String)> {
    pie.percentages()
        .map(|values| {
            pie.slices
                .iter()
                .map(|slice| slice.label.as_str())
                .zip(values)
                .collect()
        })
        .unwrap_or_default()
}

/// Renders charts, page and summary into the output directory
#[derive(Debug, Clone, Copy)]
pub struct DashboardRenderer<'a> {
    output: &'a OutputSettings,
    style: &'a StyleSettings,
}

impl<'a> DashboardRenderer<'a> {
    /// Creates a renderer over the configured output and style
    pub const fn new(output: &'a OutputSettings, style: &'a StyleSettings) -> Self {
        Self { output, style }
    }

    /// Base chart configuration derived from the settings
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig {
            title: String::new(),
            width: self.output.width,
            height: self.output.height,
            x_label: None,
            y_label: None,
            style: StyleConfig {
                background_color: self.style.background_color.clone(),
                title_font: FontConfig {
                    family: self.style.font_family.clone(),
                    size: self.style.title_font_size,
                },
                label_font: FontConfig {
                    family: self.style.font_family.clone(),
                    size: self.style.label_font_size,
                },
                margins: MarginConfig::default(),
                ..StyleConfig::default()
            },
        }
    }

    /// Writes every file for `view` into `dir`
    #[instrument(skip(self, view), fields(range = %view.range))]
    pub fn render(&self, view: &DashboardView, dir: &Path) -> Result<RenderReport> {
        fs::create_dir_all(dir)?;

        let charts = if view.is_empty() {
            warn!("No rentals between {}, skipping charts", view.range);
            ChartSet::default()
        } else {
            self.render_charts(view, dir)?
        };

        let page = dir.join(INDEX_PAGE);
        fs::write(&page, render_page(view, &charts))?;
        debug!("Wrote {}", page.display());

        let summary = if self.output.write_summary_json {
            let path = dir.join(SUMMARY_FILE);
            fs::write(&path, summary_json(view)?)?;
            debug!("Wrote {}", path.display());
            Some(path)
        } else {
            None
        };

        info!(
            "Dashboard written to {} ({} charts)",
            dir.display(),
            charts.len()
        );
        Ok(RenderReport {
            charts,
            page,
            summary,
        })
    }

    fn render_charts(&self, view: &DashboardView, dir: &Path) -> Result<ChartSet> {
        let base = self.graph_config();
        let mut charts = ChartSet::default();

        DailyRentalsGraph::new(view.daily_series.clone(), self.style.line_color.clone())
            .render_to_file(&base, &dir.join(DAILY_CHART))?;
        charts.daily = Some(DAILY_CHART);

        HourlyExtremesGraph::new(view.highest_hours.clone(), view.lowest_hours.clone())
            .with_colors(self.style.highlight_color.clone(), self.style.muted_color.clone())
            .render_to_file(&base, &dir.join(HOURLY_CHART))?;
        charts.hourly = Some(HOURLY_CHART);

        if view.ratio_pie.is_empty() {
            warn!("Day type ratio has no rentals, skipping {}", RATIO_CHART);
        } else {
            PiePanelsGraph::new(vec![view.ratio_pie.clone()])
                .render_to_file(&base, &dir.join(RATIO_CHART))?;
            charts.ratio = Some(RATIO_CHART);
        }

        let pies: Vec<PieChart> = [&view.work_pie, &view.off_pie]
            .into_iter()
            .filter(|pie| {
                let empty = pie.is_empty();
                if empty {
                    warn!("'{}' has no rentals, leaving it out", pie.title);
                }
                !empty
            })
            .cloned()
            .collect();
        if !pies.is_empty() {
            PiePanelsGraph::new(pies).render_to_file(&base, &dir.join(BREAKDOWN_CHART))?;
            charts.breakdown = Some(BREAKDOWN_CHART);
        }

        Ok(charts)
    }
}

/// Serializes the metrics, the range and both summaries
pub fn summary_json(view: &DashboardView) -> Result<String> {
    let summary = Summary {
        title: &view.title,
        start: view.range.start().to_string(),
        end: view.range.end().to_string(),
        metrics: &view.metrics,
        hourly: &view.hourly_summary,
        day_types: &view.day_type_summary,
        percentages: PiePercentages {
            ratio: labelled_percentages(&view.ratio_pie),
            work: labelled_percentages(&view.work_pie),
            off: labelled_percentages(&view.off_pie),
        },
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}
