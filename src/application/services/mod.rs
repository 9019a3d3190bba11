//! Service traits implemented by the application layer

use crate::error::AppError;
use crate::model::request::RequestParameters;
use crate::model::table::ResultTable;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Catalog service implementation
pub mod catalog_service;
/// Rate service implementation
pub mod rate_service;

pub use catalog_service::CatalogServiceImpl;
pub use rate_service::RateServiceImpl;

/// Fetches the list of currencies supported by the API
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Returns the mapping of currency code to display name
    ///
    /// The mapping is empty when the API omits the field.
    async fn supported_currencies(&self) -> Result<BTreeMap<String, String>, AppError>;
}

/// Fetches exchange rates and normalizes them into a result table
#[async_trait]
pub trait RateService: Send + Sync {
    /// Produces the result table for the given parameters
    async fn fetch(&self, params: &RequestParameters) -> Result<ResultTable, AppError>;
}
