use currencyfreaks_client::utils::config::get_env_or_default;

// Each test uses its own variable name so the env mutations cannot race

#[test]
fn missing_variable_returns_default() {
    std::env::remove_var("CFC_TEST_MISSING");
    let value: u64 = get_env_or_default("CFC_TEST_MISSING", 30);
    assert_eq!(value, 30);
}

#[test]
fn present_variable_is_parsed() {
    std::env::set_var("CFC_TEST_PRESENT", "120");
    let value: u64 = get_env_or_default("CFC_TEST_PRESENT", 30);
    assert_eq!(value, 120);
    std::env::remove_var("CFC_TEST_PRESENT");
}

#[test]
fn unparsable_variable_falls_back_to_default() {
    std::env::set_var("CFC_TEST_GARBAGE", "not-a-number");
    let value: u64 = get_env_or_default("CFC_TEST_GARBAGE", 30);
    assert_eq!(value, 30);
    std::env::remove_var("CFC_TEST_GARBAGE");
}
