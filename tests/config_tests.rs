use doctext::core::config::AppConfig;

// Single test so the environment is not mutated concurrently.
#[test]
fn test_textract_endpoint_override_from_env() {
    unsafe { std::env::remove_var("TEXTRACT_ENDPOINT_URL") };
    let config = AppConfig::from_env().unwrap();
    assert!(config.textract_endpoint_url.is_none());

    unsafe { std::env::set_var("TEXTRACT_ENDPOINT_URL", " http://localhost:4566 ") };
    let config = AppConfig::from_env().unwrap();
    assert_eq!(
        config.textract_endpoint_url.as_deref(),
        Some("http://localhost:4566")
    );

    unsafe { std::env::set_var("TEXTRACT_ENDPOINT_URL", "   ") };
    let err = AppConfig::from_env().unwrap_err();
    assert!(err.contains("TEXTRACT_ENDPOINT_URL"));

    unsafe { std::env::remove_var("TEXTRACT_ENDPOINT_URL") };
}
