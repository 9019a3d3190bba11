// Common utilities for integration tests

use currencyfreaks_client::prelude::*;

pub const TEST_API_KEY: &str = "test_api_key";

/// Creates a transport pointed at the given mock server URL
pub fn create_transport(server_url: &str) -> Arc<FxHttpClientImpl> {
    let config = Arc::new(Config::with_api(TEST_API_KEY, server_url));
    Arc::new(FxHttpClientImpl::new(config).expect("failed to build transport"))
}

/// Creates a rate service pointed at the given mock server URL
pub fn create_rate_service(server_url: &str) -> RateServiceImpl<FxHttpClientImpl> {
    let config = Arc::new(Config::with_api(TEST_API_KEY, server_url));
    let transport = create_transport(server_url);
    RateServiceImpl::new(config, transport)
}

/// Request parameters for USD/EUR over the first three days of 2024
pub fn usd_eur_params(endpoint: EndpointKind) -> RequestParameters {
    RequestParameters::new(
        "USD",
        "EUR",
        "2024-01-01",
        "2024-01-03",
        endpoint,
        OutputKind::Csv,
        None,
    )
    .expect("valid parameters")
}
