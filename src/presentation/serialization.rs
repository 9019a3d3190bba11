//! Serde helpers for the CurrencyFreaks wire format
//!
//! The API serializes decimal rates as JSON strings (`"rates": {"EUR":
//! "0.92"}`); these deserializers accept both strings and plain numbers.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64<E: DeError>(self) -> Result<f64, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| E::custom(format!("invalid rate '{}': {e}", s.trim()))),
        }
    }
}

/// Deserializes an optional float that may arrive as a string, a number or null
pub fn string_as_float_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value.into_f64().map(Some),
    }
}

/// Deserializes a `currency code -> rate` map with string or numeric values
pub fn string_map_as_float<'de, D>(deserializer: D) -> Result<HashMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, NumberOrString>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(code, value)| Ok((code, value.into_f64()?)))
        .collect()
}
