//! Full demo pipeline: mock backend → runners → reports.
//!
//! Asserts the literal numbers the binary prints, end to end, with the same
//! default configuration the binary falls back to.

use quantfolio::backend::mock::MockBackend;
use quantfolio::config::AppConfig;
use quantfolio::types::{BellReport, ParityTable};
use quantfolio::{chsh, portfolio};

#[test]
fn test_full_demo_reproduces_literal_numbers() {
    let cfg = AppConfig::default();
    cfg.validate().unwrap();
    let backend = MockBackend::new();

    let bell = chsh::run(&backend, &cfg.chsh, &ParityTable::default(), cfg.demo.shots).unwrap();
    assert_eq!(bell.pairs.len(), 4);
    assert!((bell.s_value - 2916.0 / 1024.0).abs() < 1e-12);
    assert!(bell.violates_classical_bound());

    let folio = portfolio::run(&backend, &cfg.portfolio, cfg.demo.shots).unwrap();
    assert!((folio.performance.expected_return - 44.664 / 1024.0).abs() < 1e-12);
    assert!((folio.performance.risk - 14.238 / 1024.0).abs() < 1e-12);
    assert!((folio.total_weight() - 1.0).abs() < 1e-12);
}

#[test]
fn test_full_demo_is_idempotent() {
    let cfg = AppConfig::default();
    let backend = MockBackend::new();
    let parity = ParityTable::default();

    let first = chsh::run(&backend, &cfg.chsh, &parity, cfg.demo.shots).unwrap();
    let second = chsh::run(&backend, &cfg.chsh, &parity, cfg.demo.shots).unwrap();
    assert_eq!(first.s_value, second.s_value);

    let f1 = portfolio::run(&backend, &cfg.portfolio, cfg.demo.shots).unwrap();
    let f2 = portfolio::run(&backend, &cfg.portfolio, cfg.demo.shots).unwrap();
    assert_eq!(f1.performance.expected_return, f2.performance.expected_return);
    assert_eq!(f1.weights.as_slice(), f2.weights.as_slice());
}

#[test]
fn test_shipped_config_matches_defaults() {
    // The repo-root config.toml documents the defaults; parsing it must give
    // the same demo numbers as no config at all.
    let shipped = AppConfig::load("config.toml").unwrap();
    let backend = MockBackend::new();

    let bell = chsh::run(&backend, &shipped.chsh, &ParityTable::default(), shipped.demo.shots)
        .unwrap();
    assert!((bell.s_value - 2916.0 / 1024.0).abs() < 1e-9);

    let folio = portfolio::run(&backend, &shipped.portfolio, shipped.demo.shots).unwrap();
    assert!((folio.performance.expected_return - 44.664 / 1024.0).abs() < 1e-9);
}

#[test]
fn test_bell_report_serialization_roundtrip() {
    let cfg = AppConfig::default();
    let backend = MockBackend::new();
    let bell = chsh::run(&backend, &cfg.chsh, &ParityTable::default(), cfg.demo.shots).unwrap();

    let json = serde_json::to_string(&bell).unwrap();
    let parsed: BellReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.pairs.len(), 4);
    assert!((parsed.s_value - bell.s_value).abs() < 1e-12);
}
