//! Normalized result table
//!
//! The rate service reduces every endpoint response to one of two row
//! shapes: a chronological list of per-date rates, or a single fluctuation
//! summary. A missing rate in the per-date shape stays an explicit `None`;
//! the time-series and fluctuation paths substitute `0.0` upstream instead
//! (a quirk of the source data flow that is preserved on purpose).

use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// CSV header for the per-date rate shape
pub const RATE_HEADERS: &[&str] = &["Date", "Rate"];
/// CSV header for the fluctuation shape
pub const FLUCTUATION_HEADERS: &[&str] =
    &["Date", "StartRate", "EndRate", "Change", "PercentChange"];

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// One per-date row of the result table
pub struct RatePoint {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Rate for the quote currency, absent when the API did not report one
    pub rate: Option<f64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// The single row produced by the fluctuation endpoint
pub struct FluctuationSummary {
    /// Start of the requested range
    pub date: NaiveDate,
    /// Rate at the start of the range
    pub start_rate: f64,
    /// Rate at the end of the range
    pub end_rate: f64,
    /// Absolute change over the range
    pub change: f64,
    /// Relative change over the range, in percent
    pub percent_change: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
/// Ordered result of one fetch, insertion order = chronological order
pub enum ResultTable {
    /// Per-date rates from the historical or time-series endpoints
    Rates(Vec<RatePoint>),
    /// Single summary row from the fluctuation endpoint
    Fluctuation(FluctuationSummary),
}

impl ResultTable {
    /// Number of rows in the table
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ResultTable::Rates(points) => points.len(),
            ResultTable::Fluctuation(_) => 1,
        }
    }

    /// Returns true if the table contains no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// CSV header row matching this table's shape
    #[must_use]
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            ResultTable::Rates(_) => RATE_HEADERS,
            ResultTable::Fluctuation(_) => FLUCTUATION_HEADERS,
        }
    }

    /// Largest present rate value, used by the reciprocal display heuristic
    ///
    /// For the fluctuation shape this is the end rate; absent rates are
    /// ignored.
    #[must_use]
    pub fn max_rate(&self) -> Option<f64> {
        match self {
            ResultTable::Rates(points) => points
                .iter()
                .filter_map(|p| p.rate)
                .fold(None, |acc, r| match acc {
                    Some(m) if m >= r => Some(m),
                    _ => Some(r),
                }),
            ResultTable::Fluctuation(summary) => Some(summary.end_rate),
        }
    }
}
