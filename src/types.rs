//! Shared types for the QUANTFOLIO demo.
//!
//! These types form the data model used across all modules: measurement
//! distributions produced by the backend, the lookup tables the aggregator
//! consumes, and the report values the demo runners hand back to the binary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Measurement outcomes
// ---------------------------------------------------------------------------

/// Observed counts for a set of discrete measurement outcomes, together with
/// the number of trials (`shots`) used as the probability denominator.
///
/// Counts are ordered and are NOT required to sum to `shots`; probabilities
/// are computed per-outcome as `count / shots`, so a distribution whose counts
/// exceed its shots yields probability mass above 1. No check is performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    /// Ordered (label, count) pairs, e.g. `("00", 500)`.
    pub counts: Vec<(String, u64)>,
    /// Trial count — the denominator for every outcome probability.
    pub shots: u64,
}

impl OutcomeDistribution {
    /// Build a distribution from label/count pairs and a trial count.
    pub fn new(counts: Vec<(&str, u64)>, shots: u64) -> Self {
        Self {
            counts: counts.into_iter().map(|(l, c)| (l.to_string(), c)).collect(),
            shots,
        }
    }

    /// Sum of all observed counts (may differ from `shots`).
    pub fn total_count(&self) -> u64 {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Helper to build the sample distribution used across tests.
    #[cfg(test)]
    pub fn sample() -> Self {
        OutcomeDistribution::new(vec![("00", 500), ("01", 250), ("10", 250), ("11", 500)], 1024)
    }
}

impl fmt::Display for OutcomeDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body: Vec<String> = self
            .counts
            .iter()
            .map(|(label, count)| format!("{label}:{count}"))
            .collect();
        write!(f, "shots={} {{{}}}", self.shots, body.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Parity signs for the CHSH expectation value.
///
/// Labels present in the table carry their configured sign; any label absent
/// from the table reads as −1. The default covers the two-qubit correlated
/// outcomes: `"00"` and `"11"` map to +1, everything else to −1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParityTable {
    signs: HashMap<String, f64>,
}

impl ParityTable {
    /// Build a parity table from explicit label/sign pairs.
    pub fn with_signs(signs: Vec<(&str, f64)>) -> Self {
        Self {
            signs: signs.into_iter().map(|(l, s)| (l.to_string(), s)).collect(),
        }
    }

    /// Sign for an outcome label. Absent labels are −1 by rule, not an error.
    pub fn sign(&self, label: &str) -> f64 {
        self.signs.get(label).copied().unwrap_or(-1.0)
    }
}

impl Default for ParityTable {
    fn default() -> Self {
        ParityTable::with_signs(vec![("00", 1.0), ("11", 1.0)])
    }
}

/// Per-outcome return and risk lookup tables for the portfolio demo.
///
/// Unlike [`ParityTable`], a distribution label missing from either map is an
/// error — the tables must cover every outcome the backend can produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetTable {
    pub returns: HashMap<String, f64>,
    pub risks: HashMap<String, f64>,
}

impl AssetTable {
    /// Build an asset table from parallel return and risk entries.
    pub fn new(returns: Vec<(&str, f64)>, risks: Vec<(&str, f64)>) -> Self {
        Self {
            returns: returns.into_iter().map(|(l, v)| (l.to_string(), v)).collect(),
            risks: risks.into_iter().map(|(l, v)| (l.to_string(), v)).collect(),
        }
    }

    /// Look up the (return, risk) pair for an outcome label.
    pub fn lookup(&self, label: &str) -> Result<(f64, f64), QuantError> {
        let ret = self
            .returns
            .get(label)
            .ok_or_else(|| QuantError::UnknownOutcome(label.to_string()))?;
        let risk = self
            .risks
            .get(label)
            .ok_or_else(|| QuantError::UnknownOutcome(label.to_string()))?;
        Ok((*ret, *risk))
    }
}

impl Default for AssetTable {
    fn default() -> Self {
        AssetTable::new(
            vec![("00", 0.05), ("01", 0.03), ("10", 0.04), ("11", 0.036)],
            vec![("00", 0.015), ("01", 0.012), ("10", 0.013), ("11", 0.012)],
        )
    }
}

// ---------------------------------------------------------------------------
// Portfolio values
// ---------------------------------------------------------------------------

/// Ordered non-negative portfolio weights. Produced by
/// [`crate::aggregate::normalize_weights`]; sums to 1 within floating-point
/// tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightVector(pub Vec<f64>);

impl WeightVector {
    /// Sum of all weights (expected to be ≈ 1.0).
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body: Vec<String> = self.0.iter().map(|w| format!("{w:.4}")).collect();
        write!(f, "[{}]", body.join(", "))
    }
}

/// Probability-weighted expected return and risk of the portfolio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PortfolioPerformance {
    pub expected_return: f64,
    pub risk: f64,
}

impl fmt::Display for PortfolioPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "return={:.2}% risk={:.2}%",
            self.expected_return * 100.0,
            self.risk * 100.0,
        )
    }
}

// ---------------------------------------------------------------------------
// Demo reports
// ---------------------------------------------------------------------------

/// Expectation value measured for one analyzer-angle pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairExpectation {
    pub theta_a: f64,
    pub theta_b: f64,
    pub expectation: f64,
}

impl fmt::Display for PairExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "E({:.4}, {:.4}) = {:+.4}",
            self.theta_a, self.theta_b, self.expectation,
        )
    }
}

/// Result of the CHSH demo: per-pair expectations and the aggregate S-value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BellReport {
    pub pairs: Vec<PairExpectation>,
    pub s_value: f64,
    pub classical_bound: f64,
}

impl BellReport {
    /// Whether the measured S-value exceeds the classical bound.
    pub fn violates_classical_bound(&self) -> bool {
        self.s_value > self.classical_bound
    }
}

impl fmt::Display for BellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S = {:.4} ({} classical bound {:.1})",
            self.s_value,
            if self.violates_classical_bound() { "violates" } else { "within" },
            self.classical_bound,
        )
    }
}

/// Result of the portfolio demo: weights plus aggregate performance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub weights: WeightVector,
    pub performance: PortfolioPerformance,
}

impl PortfolioReport {
    /// Total allocated weight (expected to be ≈ 1.0).
    pub fn total_weight(&self) -> f64 {
        self.weights.total()
    }
}

impl fmt::Display for PortfolioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weights={} | {} | total={:.4}",
            self.weights,
            self.performance,
            self.total_weight(),
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for QUANTFOLIO.
#[derive(Debug, thiserror::Error)]
pub enum QuantError {
    #[error("expectation undefined: shots must be positive")]
    ZeroShots,

    #[error("cannot normalize weights: all angle magnitudes are zero")]
    DegenerateAngles,

    #[error("no return/risk entry for outcome '{0}'")]
    UnknownOutcome(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
