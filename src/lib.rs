//! Client for the CurrencyFreaks exchange-rate API
//!
//! This crate fetches exchange-rate data from the CurrencyFreaks REST API and
//! turns it into either a CSV file or a chart image (line, bar, or
//! candlestick). The pipeline is strictly linear:
//!
//! 1. Fetch the supported-currency catalog and show it.
//! 2. Collect request parameters (currency pair, date range, endpoint,
//!    output).
//! 3. Fetch rates through one of three endpoint shapes and normalize the
//!    JSON into a uniform result table.
//! 4. Serialize the table to CSV or render it with plotters.
//!
//! # Example
//! ```ignore
//! use currencyfreaks_client::prelude::*;
//!
//! let config = Arc::new(Config::new());
//! let transport = Arc::new(FxHttpClientImpl::new(config.clone())?);
//! let service = RateServiceImpl::new(config, transport);
//!
//! let params = RequestParameters::new(
//!     "usd", "eur", "2024-01-01", "2024-01-03",
//!     EndpointKind::Historical, OutputKind::Csv, None,
//! )?;
//! let table = service.fetch(&params).await?;
//! let path = write_csv(&table, &params, std::path::Path::new("."))?;
//! ```

/// Service layer: catalog and rate fetching over the HTTP transport
pub mod application;
/// Configuration loaded from the environment
pub mod config;
/// Global constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Request parameters, response DTOs and the result table
pub mod model;
/// Convenience re-exports of the most commonly used types
pub mod prelude;
/// Console, CSV and chart output
pub mod presentation;
/// HTTP transport against the CurrencyFreaks REST API
pub mod transport;
/// Logging, environment and date helpers
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
