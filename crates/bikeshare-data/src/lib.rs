//! # Bikeshare Data
//!
//! Dataset loading and aggregation for the bike sharing dashboard.
//!
//! The pipeline is: fetch both CSV tables, restrict them to a [`DateRange`],
//! then reduce them with [`aggregate_by_hour`] and [`aggregate_by_day_type`].
//! Every step after loading is a pure function of its input table.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod fetcher;
pub mod filter;
pub mod summary;

pub use aggregator::*;
pub use fetcher::*;
pub use filter::*;
pub use summary::*;
