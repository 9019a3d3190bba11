//! Serde DTOs mirroring the four CurrencyFreaks response shapes

use crate::presentation::serialization::{string_as_float_opt, string_map_as_float};
use pretty_simple_display::DebugPretty;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(DebugPretty, Serialize, Deserialize, Clone, Default)]
/// Response of the `currency-symbols` resource
pub struct CurrencySymbolsResponse {
    /// Mapping of currency code to display name, empty when the field is absent
    #[serde(default, rename = "currencySymbols")]
    pub currency_symbols: BTreeMap<String, String>,
}

#[derive(DebugPretty, Serialize, Deserialize, Clone, Default)]
/// Response of the `rates/historical` resource for a single date
pub struct HistoricalRateResponse {
    /// Date the rates refer to, as reported by the API
    #[serde(default)]
    pub date: Option<String>,
    /// Mapping of currency code to rate against the requested base
    #[serde(default, deserialize_with = "string_map_as_float")]
    pub rates: HashMap<String, f64>,
}

#[derive(DebugPretty, Serialize, Deserialize, Clone)]
/// One per-date entry of a time-series response
pub struct TimeSeriesEntry {
    /// Calendar date of the entry, `YYYY-MM-DD`
    pub date: String,
    /// Mapping of currency code to rate against the requested base
    #[serde(default, deserialize_with = "string_map_as_float")]
    pub rates: HashMap<String, f64>,
}

#[derive(DebugPretty, Serialize, Deserialize, Clone, Default)]
/// Response of the `timeseries` resource
pub struct TimeSeriesResponse {
    /// Per-date rate entries in the order the API reported them
    #[serde(default, rename = "historicalRatesList")]
    pub historical_rates_list: Vec<TimeSeriesEntry>,
}

#[derive(DebugPretty, Serialize, Deserialize, Clone, Default)]
/// Net rate change of one currency over the requested range
pub struct RateFluctuation {
    /// Rate at the start of the range
    #[serde(default, rename = "startRate", deserialize_with = "string_as_float_opt")]
    pub start_rate: Option<f64>,
    /// Rate at the end of the range
    #[serde(default, rename = "endRate", deserialize_with = "string_as_float_opt")]
    pub end_rate: Option<f64>,
    /// Absolute change between start and end rate
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub change: Option<f64>,
    /// Relative change between start and end rate, in percent
    #[serde(default, rename = "percentChange", deserialize_with = "string_as_float_opt")]
    pub percent_change: Option<f64>,
}

#[derive(DebugPretty, Serialize, Deserialize, Clone, Default)]
/// Response of the `fluctuation` resource
pub struct FluctuationResponse {
    /// Mapping of currency code to its fluctuation over the range
    #[serde(default, rename = "rateFluctuations")]
    pub rate_fluctuations: HashMap<String, RateFluctuation>,
}
