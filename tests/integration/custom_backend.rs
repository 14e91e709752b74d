//! A test-controlled measurement backend.
//!
//! Implements `MeasurementBackend` directly (rather than through
//! `MockBackend`) to exercise the trait seam with an alternative outcome set
//! and fully scripted counts.

use quantfolio::backend::MeasurementBackend;
use quantfolio::config::{ChshConfig, PortfolioConfig};
use quantfolio::types::{OutcomeDistribution, ParityTable};
use quantfolio::{chsh, portfolio};

/// Backend reporting a three-outcome alphabet with scripted counts.
pub struct ScriptedBackend;

impl MeasurementBackend for ScriptedBackend {
    fn measure_pair(&self, _theta_a: f64, _theta_b: f64, shots: u64) -> OutcomeDistribution {
        OutcomeDistribution::new(vec![("aa", 300), ("ab", 100), ("bb", 100)], shots)
    }

    fn measure_allocation(&self, _angles: &[f64], shots: u64) -> OutcomeDistribution {
        OutcomeDistribution::new(vec![("aa", 250), ("ab", 250)], shots)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[test]
fn test_chsh_with_custom_parity_alphabet() {
    let backend = ScriptedBackend;
    let config = ChshConfig {
        angle_pairs: vec![(0.0, 0.0), (1.0, 1.0)],
        classical_bound: 2.0,
    };
    let parity = ParityTable::with_signs(vec![("aa", 1.0), ("bb", 1.0)]);

    let report = chsh::run(&backend, &config, &parity, 500).unwrap();
    // Per pair: (300 + 100 − 100) / 500 = 0.6; two pairs sum to 1.2.
    assert_eq!(report.pairs.len(), 2);
    assert!((report.pairs[0].expectation - 0.6).abs() < 1e-12);
    assert!((report.s_value - 1.2).abs() < 1e-12);
    assert!(!report.violates_classical_bound());
}

#[test]
fn test_portfolio_with_custom_tables() {
    let backend = ScriptedBackend;
    let mut config = PortfolioConfig {
        angles: vec![1.0, 3.0],
        ..PortfolioConfig::default()
    };
    config.returns = [("aa".to_string(), 0.10), ("ab".to_string(), 0.02)].into();
    config.risks = [("aa".to_string(), 0.04), ("ab".to_string(), 0.01)].into();

    let report = portfolio::run(&backend, &config, 500).unwrap();
    assert!((report.weights.as_slice()[0] - 0.25).abs() < 1e-12);
    assert!((report.weights.as_slice()[1] - 0.75).abs() < 1e-12);
    // (250·0.10 + 250·0.02) / 500 = 0.06; (250·0.04 + 250·0.01) / 500 = 0.025.
    assert!((report.performance.expected_return - 0.06).abs() < 1e-12);
    assert!((report.performance.risk - 0.025).abs() < 1e-12);
}

#[test]
fn test_portfolio_table_must_cover_backend_alphabet() {
    let backend = ScriptedBackend;
    // Default tables only know the 2-bit labels, not "aa"/"ab".
    let config = PortfolioConfig {
        angles: vec![1.0, 3.0],
        ..PortfolioConfig::default()
    };
    assert!(portfolio::run(&backend, &config, 500).is_err());
}
