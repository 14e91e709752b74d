//! Probability-weighted outcome aggregation.
//!
//! The computational core of the demo: expectation values with a parity sign
//! rule, S-value accumulation, angle normalization into portfolio weights,
//! and return/risk aggregation over a measurement distribution.
//!
//! Everything here is a pure free function — the "simulators" in the demo
//! narrative carry no state, so there is no object to hold.

use tracing::debug;

use crate::types::{
    AssetTable, OutcomeDistribution, ParityTable, PortfolioPerformance, QuantError, WeightVector,
};

/// Parity-signed expectation value of a measurement distribution.
///
/// For each outcome: probability = count / shots, multiplied by the parity
/// sign for its label, summed over all outcomes. Counts are taken as given —
/// no check that they sum to `shots`.
pub fn expectation(dist: &OutcomeDistribution, parity: &ParityTable) -> Result<f64, QuantError> {
    if dist.shots == 0 {
        debug!(outcomes = dist.counts.len(), "Rejected distribution with zero shots");
        return Err(QuantError::ZeroShots);
    }

    let shots = dist.shots as f64;
    let value = dist
        .counts
        .iter()
        .map(|(label, count)| parity.sign(label) * (*count as f64 / shots))
        .sum();

    Ok(value)
}

/// S-value: plain sum of a sequence of expectation values.
///
/// No statistical weighting or variance correction — direct accumulation,
/// compared against the classical bound by the caller.
pub fn s_value(expectations: &[f64]) -> f64 {
    expectations.iter().sum()
}

/// Normalize a sequence of angles into portfolio weights.
///
/// `w_i = |a_i| / Σ|a_j|` — weights are non-negative and sum to 1. An input
/// whose magnitudes all vanish has no defined normalization and is rejected.
pub fn normalize_weights(angles: &[f64]) -> Result<WeightVector, QuantError> {
    let norm: f64 = angles.iter().map(|a| a.abs()).sum();

    if norm == 0.0 {
        debug!(angles = angles.len(), "Rejected zero-magnitude angle vector");
        return Err(QuantError::DegenerateAngles);
    }

    Ok(WeightVector(angles.iter().map(|a| a.abs() / norm).collect()))
}

/// Probability-weighted expected return and risk over a distribution.
///
/// Return and risk are accumulated independently from the two lookup maps.
/// Every distribution label must have an entry in both maps.
pub fn portfolio_performance(
    dist: &OutcomeDistribution,
    table: &AssetTable,
) -> Result<PortfolioPerformance, QuantError> {
    if dist.shots == 0 {
        debug!(outcomes = dist.counts.len(), "Rejected distribution with zero shots");
        return Err(QuantError::ZeroShots);
    }

    let shots = dist.shots as f64;
    let mut expected_return = 0.0;
    let mut risk = 0.0;

    for (label, count) in &dist.counts {
        let probability = *count as f64 / shots;
        let (ret, rsk) = table.lookup(label)?;
        expected_return += probability * ret;
        risk += probability * rsk;
    }

    Ok(PortfolioPerformance { expected_return, risk })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
