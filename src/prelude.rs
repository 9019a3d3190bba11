//! # CurrencyFreaks Client Prelude
//!
//! Imports the most commonly used types and functions of the library.
//!
//! ## Usage
//!
//! ```rust
//! use currencyfreaks_client::prelude::*;
//!
//! let config = Config::with_api("key", "https://api.example.com");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the CurrencyFreaks API client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{version, VERSION};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias for the library
pub use crate::error::{AppError, FxResult};

// ============================================================================
// CORE SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{CatalogService, RateService};

/// Service implementations
pub use crate::application::services::{CatalogServiceImpl, RateServiceImpl};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP client trait and implementation
pub use crate::transport::http_client::{FxHttpClient, FxHttpClientImpl};

// ============================================================================
// MODELS
// ============================================================================

/// Request parameters and enums
pub use crate::model::request::{
    ChartKind, EndpointKind, OutputKind, RequestParameters, DATE_FORMAT,
};

/// Response DTOs
pub use crate::model::response::{
    CurrencySymbolsResponse, FluctuationResponse, HistoricalRateResponse, RateFluctuation,
    TimeSeriesEntry, TimeSeriesResponse,
};

/// Result table types
pub use crate::model::table::{
    FluctuationSummary, RatePoint, ResultTable, FLUCTUATION_HEADERS, RATE_HEADERS,
};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Console, CSV and chart output
pub use crate::presentation::{
    catalog_table, display_series, print_catalog, render_chart, synthetic_candles, write_csv,
    Candle, DisplaySeries,
};

/// Serialization utilities
pub use crate::presentation::serialization::{string_as_float_opt, string_map_as_float};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Date range expansion
pub use crate::utils::date::expand_date_range;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use chrono::NaiveDate;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
