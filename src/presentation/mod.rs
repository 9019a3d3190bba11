/// Console table for the currency catalog
pub mod catalog;
/// Chart rendering with plotters
pub mod chart;
/// CSV serialization of the result table
pub mod csv_output;
/// Serde helpers for the wire format
pub mod serialization;

pub use catalog::{catalog_table, print_catalog};
pub use chart::{display_series, render_chart, synthetic_candles, Candle, DisplaySeries};
pub use csv_output::write_csv;
