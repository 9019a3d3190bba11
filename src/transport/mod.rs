/// HTTP client trait and reqwest-backed implementation
pub mod http_client;
