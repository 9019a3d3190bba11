use crate::application::services::CatalogService;
use crate::error::AppError;
use crate::model::response::CurrencySymbolsResponse;
use crate::transport::http_client::FxHttpClient;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// Implementation of the catalog service
pub struct CatalogServiceImpl<T: FxHttpClient> {
    client: Arc<T>,
}

impl<T: FxHttpClient> CatalogServiceImpl<T> {
    /// Creates a new instance of the catalog service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: FxHttpClient + 'static> CatalogService for CatalogServiceImpl<T> {
    async fn supported_currencies(&self) -> Result<BTreeMap<String, String>, AppError> {
        let response: CurrencySymbolsResponse =
            self.client.get_json("currency-symbols", &[]).await?;
        info!(
            "Fetched {} supported currencies",
            response.currency_symbols.len()
        );
        Ok(response.currency_symbols)
    }
}
