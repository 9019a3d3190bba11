/// Catalog and rate services
pub mod services;
