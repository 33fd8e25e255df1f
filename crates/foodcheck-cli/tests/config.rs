use std::io::Write;
use std::time::Duration;

use foodcheck_cli::config::{ConfigOverrides, FoodcheckConfig};
use foodcheck_core::Viewport;
use foodcheck_model::UNSPECIFIED;

#[test]
fn empty_file_gives_defaults() {
    let config = FoodcheckConfig::parse("").unwrap();
    assert_eq!(config, FoodcheckConfig::default());
    assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.debounce(), Duration::from_millis(500));
    assert_eq!(config.display.per_page, 20);
    assert_eq!(config.display.placeholder, UNSPECIFIED);
    assert_eq!(config.viewport(), Viewport::Wide);
    assert_eq!(config.classifier_rules().calorie_limit(), 300.0);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = FoodcheckConfig::parse(
        r#"
[api]
base_url = "http://food.local:8080"

[display]
narrow = true

[rules]
restricted_terms = ["Soda", "גלידה"]
"#,
    )
    .unwrap();
    assert_eq!(config.api.base_url, "http://food.local:8080");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.viewport(), Viewport::Narrow);
    assert_eq!(config.display.per_page, 20);
    assert_eq!(
        config.classifier_rules().restricted_terms(),
        ["soda".to_string(), "גלידה".to_string()]
    );
    assert_eq!(config.rules.calorie_limit, 300.0);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(FoodcheckConfig::parse("[display]\nper_page = 0\n").is_err());
    assert!(FoodcheckConfig::parse("[api]\ntimeout_secs = \"soon\"\n").is_err());
    assert!(FoodcheckConfig::parse("not toml at all =").is_err());
}

#[test]
fn overrides_win_over_file() {
    let mut config = FoodcheckConfig::parse("[display]\nper_page = 50\n").unwrap();
    config
        .apply(&ConfigOverrides {
            api_url: Some("http://other:5000".to_string()),
            per_page: Some(10),
            narrow: true,
        })
        .unwrap();
    assert_eq!(config.api.base_url, "http://other:5000");
    assert_eq!(config.display.per_page, 10);
    assert!(config.display.narrow);
}

#[test]
fn explicit_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search]\ndebounce_ms = 250").unwrap();
    let config = FoodcheckConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.debounce(), Duration::from_millis(250));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = FoodcheckConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(format!("{error:#}").contains("absent.toml"));
}

#[test]
fn defaults_round_trip_through_toml() {
    let text = toml::to_string_pretty(&FoodcheckConfig::default()).unwrap();
    assert_eq!(FoodcheckConfig::parse(&text).unwrap(), FoodcheckConfig::default());
}
