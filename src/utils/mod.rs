/// Environment variable helpers
pub mod config;
/// Calendar date range expansion
pub mod date;
/// Logging setup
pub mod logger;
