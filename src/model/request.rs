//! Typed request parameters
//!
//! Parameter acquisition is decoupled from fetch and render logic: the
//! interactive binary (or any other caller) builds a [`RequestParameters`]
//! value once, validation happens here, and everything downstream takes the
//! immutable value.

use crate::error::AppError;
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Date format accepted for start and end dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// Which of the three CurrencyFreaks rate endpoints to call
pub enum EndpointKind {
    /// One request per calendar day against the historical-rate resource
    Historical,
    /// One request for the whole range against the time-series resource
    TimeSeries,
    /// One request for the whole range against the fluctuation resource
    Fluctuation,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// Which output artifact to produce
pub enum OutputKind {
    /// Comma-separated values file
    Csv,
    /// Chart image file
    Chart,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// Which chart style to render
pub enum ChartKind {
    /// Connected line with point markers
    Line,
    /// Vertical bars
    Bar,
    /// Candlestick chart with synthetic OHLC values
    Candlestick,
}

impl FromStr for EndpointKind {
    type Err = AppError;

    /// Accepts the menu number or the endpoint name, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "historical" => Ok(EndpointKind::Historical),
            "2" | "timeseries" | "time-series" => Ok(EndpointKind::TimeSeries),
            "3" | "fluctuation" => Ok(EndpointKind::Fluctuation),
            other => Err(AppError::InvalidInput(format!(
                "unknown endpoint choice '{other}', expected 1/2/3"
            ))),
        }
    }
}

impl FromStr for OutputKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "csv" => Ok(OutputKind::Csv),
            "2" | "chart" => Ok(OutputKind::Chart),
            other => Err(AppError::InvalidInput(format!(
                "unknown output choice '{other}', expected 1/2"
            ))),
        }
    }
}

impl FromStr for ChartKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "line" => Ok(ChartKind::Line),
            "2" | "bar" => Ok(ChartKind::Bar),
            "3" | "candlestick" => Ok(ChartKind::Candlestick),
            other => Err(AppError::InvalidInput(format!(
                "unknown chart choice '{other}', expected 1/2/3"
            ))),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Immutable parameters describing one fetch-and-render run
pub struct RequestParameters {
    /// Currency whose value is being measured, upper-cased
    pub base_currency: String,
    /// Currency the base is measured against, upper-cased
    pub quote_currency: String,
    /// First day of the requested range
    pub start_date: NaiveDate,
    /// Last day of the requested range, inclusive
    pub end_date: NaiveDate,
    /// Which rate endpoint to call
    pub endpoint: EndpointKind,
    /// Which artifact to produce
    pub output: OutputKind,
    /// Chart style, present exactly when `output` is `Chart`
    pub chart: Option<ChartKind>,
}

impl RequestParameters {
    /// Builds and validates the parameters for one run
    ///
    /// Currency codes are upper-cased, dates must be `YYYY-MM-DD` with
    /// `start <= end`, and a chart kind is required exactly when the output
    /// is a chart.
    ///
    /// # Errors
    /// `AppError::InvalidInput` when any value fails validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base_currency: &str,
        quote_currency: &str,
        start_date: &str,
        end_date: &str,
        endpoint: EndpointKind,
        output: OutputKind,
        chart: Option<ChartKind>,
    ) -> Result<Self, AppError> {
        let base_currency = base_currency.trim().to_uppercase();
        let quote_currency = quote_currency.trim().to_uppercase();
        if base_currency.is_empty() || quote_currency.is_empty() {
            return Err(AppError::InvalidInput(
                "currency codes must not be empty".to_string(),
            ));
        }

        let start_date = parse_date(start_date)?;
        let end_date = parse_date(end_date)?;
        if start_date > end_date {
            return Err(AppError::InvalidInput(format!(
                "start date {start_date} is after end date {end_date}"
            )));
        }

        match (output, chart) {
            (OutputKind::Chart, None) => {
                return Err(AppError::InvalidInput(
                    "a chart type is required when the output is a chart".to_string(),
                ));
            }
            (OutputKind::Csv, Some(_)) => {
                return Err(AppError::InvalidInput(
                    "a chart type only applies to chart output".to_string(),
                ));
            }
            _ => {}
        }

        Ok(RequestParameters {
            base_currency,
            quote_currency,
            start_date,
            end_date,
            endpoint,
            output,
            chart,
        })
    }

    /// Deterministic filename stem shared by all output artifacts
    ///
    /// # Returns
    /// `{base}_{quote}_{start}_{end}`
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.base_currency, self.quote_currency, self.start_date, self.end_date
        )
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| AppError::InvalidInput(format!("invalid date '{}': {e}", value.trim())))
}
