//! # Bikeshare Graphs
//!
//! SVG chart rendering for the bike sharing dashboard, built on `plotters`.
//!
//! Each chart type implements [`GraphRenderer`]: it draws onto any
//! `plotters` drawing area, and the trait's provided methods render it to an
//! SVG string or file.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod daily_series;
pub mod hourly_extremes;
pub mod pie;
pub mod renderer;
pub mod types;

pub use daily_series::DailyRentalsGraph;
pub use hourly_extremes::HourlyExtremesGraph;
pub use pie::{format_percentage, slice_shares, PieChart, PiePanelsGraph, PieSlice};
pub use renderer::{parse_color, GraphRenderer};
pub use types::*;
