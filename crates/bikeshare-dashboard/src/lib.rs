//! # Bikeshare Dashboard
//!
//! Generates a static bike sharing dashboard: loads the hourly and daily
//! rental datasets, restricts them to the selected date range, aggregates
//! them, and writes SVG charts, an HTML page and a JSON summary.
//!
//! Each invocation runs the whole pipeline once. Nothing is shared between
//! runs; a new range means a new run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod error;
pub mod page;
pub mod render;
pub mod view;

pub use cli::{Args, RangeSelection};
pub use error::{DashboardError, DashboardResult};
pub use render::{DashboardRenderer, RenderReport};
pub use view::{DashboardView, Metrics};

use bikeshare_config::{Config, ConfigLoader};
use bikeshare_data::{
    aggregate_by_day_type, aggregate_by_hour, filter_by_date, DatasetFetcher, DatasetSource,
};
use std::path::Path;
use tracing::{debug, info};
use validator::Validate;

/// Loads the configuration and applies the command line overrides
pub fn load_config(args: &Args) -> DashboardResult<Config> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_config(path)?,
        None => ConfigLoader::load()?,
    };

    args.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Runs one load, filter, aggregate and render pass
pub async fn run(args: &Args, config: &Config) -> DashboardResult<RenderReport> {
    let hourly_source: DatasetSource = config.data.hourly_source.parse()?;
    let daily_source: DatasetSource = config.data.daily_source.parse()?;

    let fetcher = DatasetFetcher::new(config.data.request_timeout())?;
    let dataset = fetcher.load(&hourly_source, &daily_source).await?;

    let bounds = dataset.date_bounds()?;
    let range = args.selection().resolve(&bounds)?;
    info!(
        "Building dashboard for {} ({} days, data covers {})",
        range,
        range.num_days(),
        bounds
    );

    let daily = filter_by_date(&dataset.daily, &range);
    let hourly = filter_by_date(&dataset.hourly, &range);
    debug!(
        "{} daily and {} hourly rows in range",
        daily.len(),
        hourly.len()
    );

    let view = DashboardView::build(
        &config.output.title,
        range,
        &daily,
        aggregate_by_hour(&hourly),
        aggregate_by_day_type(&daily),
        &config.style,
    );

    let report = DashboardRenderer::new(&config.output, &config.style)
        .render(&view, Path::new(&config.output.directory))?;
    Ok(report)
}
