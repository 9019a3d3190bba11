/// Default base URL for the CurrencyFreaks REST API
pub const DEFAULT_BASE_URL: &str = "https://api.currencyfreaks.com/v2.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("currencyfreaks-client/", env!("CARGO_PKG_VERSION"));
/// Maximum number of catalog entries printed to the console
pub const CATALOG_PRINT_LIMIT: usize = 50;
/// Multiplier applied to a rate to form the synthetic candle high
pub const CANDLE_HIGH_FACTOR: f64 = 1.01;
/// Multiplier applied to a rate to form the synthetic candle low
pub const CANDLE_LOW_FACTOR: f64 = 0.99;
/// Rates whose maximum stays below this value are displayed as reciprocals
pub const RECIPROCAL_THRESHOLD: f64 = 1.0;
/// Chart image width in pixels
pub const CHART_WIDTH: u32 = 1200;
/// Chart image height in pixels
pub const CHART_HEIGHT: u32 = 600;
