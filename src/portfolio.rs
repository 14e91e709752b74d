//! Portfolio demo runner.
//!
//! Normalizes the configured rotation angles into portfolio weights, measures
//! the allocation distribution through the backend, and aggregates expected
//! return and risk from the configured lookup tables.

use tracing::{debug, info};

use crate::aggregate;
use crate::backend::MeasurementBackend;
use crate::config::PortfolioConfig;
use crate::types::{PortfolioReport, QuantError};

/// Run the portfolio demo: weights from angles, performance from counts.
pub fn run(
    backend: &dyn MeasurementBackend,
    config: &PortfolioConfig,
    shots: u64,
) -> Result<PortfolioReport, QuantError> {
    info!(
        backend = backend.name(),
        assets = config.angles.len(),
        shots,
        "Running portfolio demo"
    );

    let weights = aggregate::normalize_weights(&config.angles)?;
    debug!(total_weight = format!("{:.6}", weights.total()), "Weights normalized");

    let dist = backend.measure_allocation(&config.angles, shots);
    let performance = aggregate::portfolio_performance(&dist, &config.asset_table())?;

    let report = PortfolioReport {
        weights,
        performance,
    };

    info!(
        expected_return = format!("{:.4}", report.performance.expected_return),
        risk = format!("{:.4}", report.performance.risk),
        total_weight = format!("{:.4}", report.total_weight()),
        "Portfolio demo complete"
    );

    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
