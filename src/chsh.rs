//! CHSH demo runner.
//!
//! Drives the measurement backend through the configured analyzer-angle
//! pairs, computes the parity-signed expectation for each, and aggregates
//! the S-value for comparison against the classical bound.

use tracing::{debug, info};

use crate::aggregate;
use crate::backend::MeasurementBackend;
use crate::config::ChshConfig;
use crate::types::{BellReport, PairExpectation, ParityTable, QuantError};

/// Run the CHSH demo: one measurement per configured pair, then the S-value.
pub fn run(
    backend: &dyn MeasurementBackend,
    config: &ChshConfig,
    parity: &ParityTable,
    shots: u64,
) -> Result<BellReport, QuantError> {
    info!(
        backend = backend.name(),
        pairs = config.angle_pairs.len(),
        shots,
        "Running CHSH demo"
    );

    let mut pairs = Vec::with_capacity(config.angle_pairs.len());
    for &(theta_a, theta_b) in &config.angle_pairs {
        let dist = backend.measure_pair(theta_a, theta_b, shots);
        let expectation = aggregate::expectation(&dist, parity)?;
        debug!(
            theta_a = format!("{theta_a:.4}"),
            theta_b = format!("{theta_b:.4}"),
            expectation = format!("{expectation:.4}"),
            "Pair measured"
        );
        pairs.push(PairExpectation {
            theta_a,
            theta_b,
            expectation,
        });
    }

    let expectations: Vec<f64> = pairs.iter().map(|p| p.expectation).collect();
    let s_value = aggregate::s_value(&expectations);

    let report = BellReport {
        pairs,
        s_value,
        classical_bound: config.classical_bound,
    };

    info!(
        s_value = format!("{:.4}", report.s_value),
        violates_bound = report.violates_classical_bound(),
        "CHSH demo complete"
    );

    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
