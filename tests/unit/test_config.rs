use currencyfreaks_client::config::Config;
use currencyfreaks_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

#[test]
fn with_api_sets_key_and_url() {
    let config = Config::with_api("secret", "http://localhost:1234");
    assert_eq!(config.api_key, "secret");
    assert_eq!(config.rest_api.base_url, "http://localhost:1234");
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn new_falls_back_to_defaults() {
    // No CURRENCYFREAKS_* variables are set in the test environment
    let config = Config::new();
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn config_is_cloneable() {
    let config = Config::with_api("secret", "http://localhost:1234");
    let copy = config.clone();
    assert_eq!(copy.api_key, config.api_key);
}
