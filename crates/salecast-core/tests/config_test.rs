use salecast_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SalecastConfig::from_toml("").unwrap();

    // Artifact defaults
    assert_eq!(config.artifacts.model_path, "artifacts/best_model.json");
    assert_eq!(
        config.artifacts.store_encoder_path,
        "artifacts/store_encoder.json"
    );
    assert_eq!(
        config.artifacts.product_encoder_path,
        "artifacts/product_encoder.json"
    );
    assert_eq!(
        config.artifacts.feature_list_path,
        "artifacts/final_features.json"
    );

    // Dataset defaults
    assert_eq!(config.dataset.csv_path, "retail_store_inventory.csv");
    assert_eq!(config.dataset.date_format, "%Y-%m-%d");

    // Recommendation defaults
    assert_eq!(config.recommendation.stock_less_ratio, 0.9);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[dataset]
csv_path = "/data/sales.csv"

[recommendation]
stock_less_ratio = 0.85
"#;
    let config = SalecastConfig::from_toml(toml).unwrap();
    assert_eq!(config.dataset.csv_path, "/data/sales.csv");
    assert_eq!(config.recommendation.stock_less_ratio, 0.85);
    // Non-overridden fields keep defaults
    assert_eq!(config.dataset.date_format, "%Y-%m-%d");
    assert_eq!(config.artifacts.model_path, "artifacts/best_model.json");
}

#[test]
fn config_rejects_invalid_toml() {
    assert!(SalecastConfig::from_toml("[dataset").is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = SalecastConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = SalecastConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.dataset.csv_path, config.dataset.csv_path);
    assert_eq!(
        roundtripped.recommendation.stock_less_ratio,
        config.recommendation.stock_less_ratio
    );
}
