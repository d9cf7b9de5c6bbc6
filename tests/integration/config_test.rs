use std::fs;
use std::sync::Arc;

use memvitals::core::health::{
    Direction, MetricSource, Quantity, RawMeasurement, Snapshot, UnitRequest,
};
use memvitals::core::{Config, ToleranceConfig};
use memvitals::HealthError;
use tempfile::TempDir;

struct FixedSource;

impl MetricSource for FixedSource {
    fn snapshot(&self) -> Snapshot {
        Snapshot::ok(RawMeasurement::new(1000, 800))
    }
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.checks.len(), 1);
    assert_eq!(config.checks[0].component.name(), "memory");
    assert_eq!(config.checks[0].quantities, vec![Quantity::Utilized]);
}

#[test]
fn test_config_load_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("missing.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_load_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "   \n").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.checks[0].tolerances.push(ToleranceConfig {
        unit: UnitRequest::Bytes,
        pass: 1000.0,
        warn: 500.0,
        fail: 0.0,
        direction: Direction::GreaterThan,
    });
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_file_uses_wire_names() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    Config::default().save_to(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"utilizedMemory\""));
    assert!(text.contains("\"lessThan\""));
    assert!(text.contains("\"percentage\""));
    assert!(text.contains("\"type\": \"system\""));
}

#[test]
fn test_config_parse_error_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Config::load_from(&path), Err(HealthError::Config(_))));
}

#[test]
fn test_config_rejects_empty_quantities() {
    let mut config = Config::default();
    config.checks[0].quantities.clear();
    assert!(matches!(
        config.build_registry(Arc::new(FixedSource)),
        Err(HealthError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_config_rejects_colon_in_component_name() {
    let json = r#"{"checks": [{
        "component": {"id": "1", "name": "svc:mem", "type": "system"},
        "quantities": ["freeMemory"],
        "tolerances": [{"unit": "bytes", "pass": 1, "warn": 2, "fail": 3}]
    }]}"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert!(matches!(
        config.build_registry(Arc::new(FixedSource)),
        Err(HealthError::InvalidComponentName(_))
    ));
}

#[test]
fn test_config_rejects_percentage_above_100() {
    let json = r#"{"checks": [{
        "component": {"id": "1", "name": "svc", "type": "system"},
        "quantities": ["freeMemory"],
        "tolerances": [{"unit": "percentageAndBytes", "pass": 50, "warn": 90, "fail": 150}]
    }]}"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert!(matches!(
        config.build_registry(Arc::new(FixedSource)),
        Err(HealthError::InvalidToleranceConfiguration(_))
    ));
}

#[test]
fn test_config_duplicate_titles_rejected() {
    let mut config = Config::default();
    let duplicate = config.checks[0].clone();
    config.checks.push(duplicate);
    assert!(matches!(
        config.build_registry(Arc::new(FixedSource)),
        Err(HealthError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_config_link_is_validated() {
    let json = r#"{"checks": [{
        "component": {"id": "1", "name": "svc", "type": "system", "link": "::bad::"},
        "quantities": ["freeMemory"],
        "tolerances": [{"unit": "bytes", "pass": 1, "warn": 2, "fail": 3}]
    }]}"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert!(config.build_registry(Arc::new(FixedSource)).is_err());
}
