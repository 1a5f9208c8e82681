//! Dataset fetching and CSV decoding
//!
//! A [`DatasetFetcher`] reads the hourly and daily tables from either an
//! http(s) URL or a local file, decodes them with `csv` + `serde`, and
//! checks every row before handing back an immutable [`Dataset`].

use crate::filter::DateRange;
use bikeshare_common::{BikeshareError, DailyRecord, HourlyRecord, RentalRecord, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Remote CSV fetched over HTTP.
    Url(String),
    /// Local CSV file.
    Path(PathBuf),
}

impl FromStr for DatasetSource {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(BikeshareError::validation_field(
                "dataset source cannot be empty",
                "source",
            ));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(trimmed.to_string()))
        } else {
            Ok(Self::Path(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The two immutable base tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Hourly rental rows.
    pub hourly: Vec<HourlyRecord>,
    /// Daily rental rows.
    pub daily: Vec<DailyRecord>,
}

impl Dataset {
    /// Observed `[min, max]` date of the daily table.
    ///
    /// These are the bounds of the date selector.
    pub fn date_bounds(&self) -> Result<DateRange> {
        DateRange::spanning(self.daily.iter().map(|row| row.date))
            .ok_or_else(|| BikeshareError::data("daily dataset is empty, no date range available"))
    }
}

/// Loads datasets from URLs or files.
#[derive(Debug, Clone)]
pub struct DatasetFetcher {
    client: Client,
}

impl DatasetFetcher {
    /// Builds a fetcher whose HTTP requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BikeshareError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self { client })
    }

    /// Loads both tables. Either failure aborts the load.
    pub async fn load(&self, hourly: &DatasetSource, daily: &DatasetSource) -> Result<Dataset> {
        let (hourly, daily) = tokio::try_join!(self.load_hourly(hourly), self.load_daily(daily))?;

        info!(
            "Loaded {} hourly rows and {} daily rows",
            hourly.len(),
            daily.len()
        );
        Ok(Dataset { hourly, daily })
    }

    /// Loads and checks the hourly table.
    pub async fn load_hourly(&self, source: &DatasetSource) -> Result<Vec<HourlyRecord>> {
        let text = self.fetch_text(source).await?;
        parse_csv("hourly", text.as_bytes())
    }

    /// Loads and checks the daily table.
    pub async fn load_daily(&self, source: &DatasetSource) -> Result<Vec<DailyRecord>> {
        let text = self.fetch_text(source).await?;
        parse_csv("daily", text.as_bytes())
    }

    #[instrument(skip(self), fields(source = %source))]
    async fn fetch_text(&self, source: &DatasetSource) -> Result<String> {
        match source {
            DatasetSource::Url(url) => {
                debug!("Downloading dataset from {}", url);
                let response = self.client.get(url).send().await?.error_for_status()?;
                let body = response
                    .text()
                    .await
                    .map_err(|e| BikeshareError::network_with_source("Failed to read response body", e))?;
                debug!("Downloaded {} bytes", body.len());
                Ok(body)
            }
            DatasetSource::Path(path) => {
                debug!("Reading dataset from {}", path.display());
                tokio::fs::read_to_string(path).await.map_err(|e| {
                    BikeshareError::data_with_source(
                        format!("Failed to read dataset file {}", path.display()),
                        e,
                    )
                })
            }
        }
    }
}

/// Decodes a CSV table and checks every row.
///
/// Unknown columns are ignored. The first failing row aborts the decode;
/// rows are numbered from 1, not counting the header.
pub fn parse_csv<T, R>(dataset: &str, reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned + RentalRecord,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();

    for (index, result) in reader.deserialize::<T>().enumerate() {
        let row_number = index + 1;
        let row = result.map_err(|e| {
            BikeshareError::data_with_source(format!("{dataset} dataset row {row_number} could not be parsed"), e)
        })?;

        row.validate().map_err(|err| match err {
            BikeshareError::Validation { message, field } => BikeshareError::Validation {
                message: format!("{dataset} dataset row {row_number}: {message}"),
                field,
            },
            other => other,
        })?;

        rows.push(row);
    }

    debug!("Parsed {} rows from the {} dataset", rows.len(), dataset);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_common::test_utils::{dataset_fixtures, date};
    use bikeshare_common::DayType;

    #[test]
    fn test_source_from_str() {
        assert_eq!(
            "https://example.org/day.csv".parse::<DatasetSource>().unwrap(),
            DatasetSource::Url("https://example.org/day.csv".to_string())
        );
        assert_eq!(
            " data/day.csv ".parse::<DatasetSource>().unwrap(),
            DatasetSource::Path(PathBuf::from("data/day.csv"))
        );
        assert!(matches!(
            "HTTP://EXAMPLE.ORG/x.csv".parse::<DatasetSource>().unwrap(),
            DatasetSource::Url(_)
        ));
        assert!("   ".parse::<DatasetSource>().is_err());
    }

    #[test]
    fn test_parse_fixture_tables() {
        let hourly: Vec<HourlyRecord> = parse_csv("hourly", dataset_fixtures::HOURLY_CSV.as_bytes()).unwrap();
        let daily: Vec<DailyRecord> = parse_csv("daily", dataset_fixtures::DAILY_CSV.as_bytes()).unwrap();

        assert_eq!(hourly, dataset_fixtures::hourly_records());
        assert_eq!(daily, dataset_fixtures::daily_records());
    }

    #[test]
    fn test_parse_accepts_datetime_dates() {
        let csv = "date,classify_day,casual,registered,total\n2011-01-01 00:00:00,off,1,2,3\n";
        let daily: Vec<DailyRecord> = parse_csv("daily", csv.as_bytes()).unwrap();
        assert_eq!(daily, vec![DailyRecord::new(date(2011, 1, 1), DayType::Off, 1, 2)]);
    }

    #[test]
    fn test_bad_date_names_row() {
        let csv = "date,classify_day,casual,registered,total\n\
                   2011-01-01,off,1,2,3\n\
                   not-a-date,off,1,2,3\n";
        let err = parse_csv::<DailyRecord, _>("daily", csv.as_bytes()).unwrap_err();

        assert!(matches!(err, BikeshareError::Data { .. }));
        assert!(err.to_string().contains("daily dataset row 2"));
    }

    #[test]
    fn test_broken_conservation_is_rejected() {
        let csv = "date,hour,casual,registered,total\n2011-01-01,3,1,2,4\n";
        let err = parse_csv::<HourlyRecord, _>("hourly", csv.as_bytes()).unwrap_err();

        assert_eq!(err.field(), Some("total"));
        assert!(err.to_string().contains("hourly dataset row 1"));
    }

    #[test]
    fn test_overflowing_counts_are_rejected() {
        let csv = "date,classify_day,casual,registered,total\n2011-01-01,off,18446744073709551615,1,0\n";
        let err = parse_csv::<DailyRecord, _>("daily", csv.as_bytes()).unwrap_err();

        assert_eq!(err.field(), Some("total"));
        assert!(err.to_string().contains("daily dataset row 1"));
    }

    #[test]
    fn test_out_of_range_hour_is_rejected() {
        let csv = "date,hour,casual,registered,total\n2011-01-01,24,1,2,3\n";
        let err = parse_csv::<HourlyRecord, _>("hourly", csv.as_bytes()).unwrap_err();
        assert_eq!(err.field(), Some("hour"));
    }

    #[test]
    fn test_unknown_classification_is_data_error() {
        let csv = "date,classify_day,casual,registered,total\n2011-01-01,holiday,1,2,3\n";
        let err = parse_csv::<DailyRecord, _>("daily", csv.as_bytes()).unwrap_err();
        assert!(matches!(err, BikeshareError::Data { .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        let daily: Vec<DailyRecord> =
            parse_csv("daily", "date,classify_day,casual,registered,total\n".as_bytes()).unwrap();
        assert!(daily.is_empty());
    }

    #[test]
    fn test_date_bounds() {
        let dataset = Dataset {
            hourly: dataset_fixtures::hourly_records(),
            daily: dataset_fixtures::daily_records(),
        };
        let bounds = dataset.date_bounds().unwrap();
        assert_eq!(bounds.start(), date(2011, 1, 1));
        assert_eq!(bounds.end(), date(2011, 1, 3));

        let err = Dataset::default().date_bounds().unwrap_err();
        assert!(matches!(err, BikeshareError::Data { .. }));
    }

    #[tokio::test]
    async fn test_load_from_files() {
        let dir = bikeshare_common::test_utils::create_temp_dir();
        let hourly = dataset_fixtures::write_csv(dir.path(), "hour.csv", dataset_fixtures::HOURLY_CSV);
        let daily = dataset_fixtures::write_csv(dir.path(), "day.csv", dataset_fixtures::DAILY_CSV);

        let fetcher = DatasetFetcher::new(Duration::from_secs(5)).unwrap();
        let dataset = fetcher
            .load(&DatasetSource::Path(hourly), &DatasetSource::Path(daily))
            .await
            .unwrap();

        assert_eq!(dataset.hourly.len(), 9);
        assert_eq!(dataset.daily.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_file_aborts_load() {
        let dir = bikeshare_common::test_utils::create_temp_dir();
        let fetcher = DatasetFetcher::new(Duration::from_secs(5)).unwrap();

        let err = fetcher
            .load_daily(&DatasetSource::Path(dir.path().join("absent.csv")))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("absent.csv"));
    }
}
