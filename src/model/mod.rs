/// Typed request parameters for a fetch
pub mod request;
/// Serde DTOs mirroring the CurrencyFreaks response shapes
pub mod response;
/// Normalized tabular result produced by the rate service
pub mod table;
