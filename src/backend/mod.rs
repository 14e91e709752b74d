//! Measurement backends for the demo.
//!
//! Defines the `MeasurementBackend` trait and provides the mock
//! implementation. The trait is the seam where a real quantum (or
//! quantum-inspired) backend would plug in; only the mock exists, and its
//! outputs are hand-written constants unrelated to the requested angles.

pub mod mock;

use crate::types::OutcomeDistribution;

/// Abstraction over measurement-count producers.
///
/// Implementors turn analyzer settings into an outcome distribution over
/// 2-bit labels. Nothing here promises that counts sum to `shots` — the
/// aggregator works with whatever the backend reports.
pub trait MeasurementBackend: Send + Sync {
    /// Measure a single CHSH analyzer-angle pair.
    fn measure_pair(&self, theta_a: f64, theta_b: f64, shots: u64) -> OutcomeDistribution;

    /// Measure the portfolio allocation circuit for a set of rotation angles.
    fn measure_allocation(&self, angles: &[f64], shots: u64) -> OutcomeDistribution;

    /// Backend identifier string.
    fn name(&self) -> &str;
}
