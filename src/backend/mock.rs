//! Mock measurement backend with hand-written count tables.
//!
//! Returns deterministic, canned outcome counts regardless of input. The
//! four canonical CHSH analyzer settings each have their own table; any other
//! pair gets a flat fallback. The allocation measurement ignores its angles
//! entirely and returns one fixed distribution.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};

use super::MeasurementBackend;
use crate::types::OutcomeDistribution;

/// Tolerance for matching a requested angle pair against a canned setting.
const ANGLE_EPS: f64 = 1e-9;

type CountTable = Vec<(String, u64)>;

fn table(counts: &[(&str, u64)]) -> CountTable {
    counts.iter().map(|(l, c)| (l.to_string(), *c)).collect()
}

/// A mock backend producing literal measurement counts.
///
/// All tables are fully controllable from test code via [`MockBackend::with_tables`];
/// the default reproduces the demo's canned numbers.
pub struct MockBackend {
    pair_tables: Vec<(f64, f64, CountTable)>,
    allocation_table: CountTable,
    fallback_table: CountTable,
}

impl MockBackend {
    /// Create the demo backend with the default canned tables.
    pub fn new() -> Self {
        let pair_tables = vec![
            (
                0.0,
                FRAC_PI_8,
                table(&[("00", 437), ("01", 75), ("10", 75), ("11", 437)]),
            ),
            (
                0.0,
                3.0 * FRAC_PI_8,
                table(&[("00", 441), ("01", 71), ("10", 71), ("11", 441)]),
            ),
            (
                FRAC_PI_4,
                FRAC_PI_8,
                table(&[("00", 430), ("01", 82), ("10", 82), ("11", 430)]),
            ),
            (
                FRAC_PI_4,
                3.0 * FRAC_PI_8,
                table(&[("00", 445), ("01", 67), ("10", 67), ("11", 445)]),
            ),
        ];

        Self {
            pair_tables,
            allocation_table: table(&[("00", 600), ("01", 200), ("10", 150), ("11", 74)]),
            fallback_table: table(&[("00", 256), ("01", 256), ("10", 256), ("11", 256)]),
        }
    }

    /// Create a mock with custom tables (for testing alternative outcome sets).
    pub fn with_tables(
        pair_tables: Vec<(f64, f64, Vec<(&str, u64)>)>,
        allocation_table: Vec<(&str, u64)>,
        fallback_table: Vec<(&str, u64)>,
    ) -> Self {
        Self {
            pair_tables: pair_tables
                .into_iter()
                .map(|(a, b, t)| (a, b, table(&t)))
                .collect(),
            allocation_table: table(&allocation_table),
            fallback_table: table(&fallback_table),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementBackend for MockBackend {
    fn measure_pair(&self, theta_a: f64, theta_b: f64, shots: u64) -> OutcomeDistribution {
        let counts = self
            .pair_tables
            .iter()
            .find(|(a, b, _)| (a - theta_a).abs() < ANGLE_EPS && (b - theta_b).abs() < ANGLE_EPS)
            .map(|(_, _, t)| t.clone())
            .unwrap_or_else(|| self.fallback_table.clone());

        OutcomeDistribution { counts, shots }
    }

    fn measure_allocation(&self, _angles: &[f64], shots: u64) -> OutcomeDistribution {
        // Canned output — the angles only influence the separately computed
        // weight vector, never these counts.
        OutcomeDistribution {
            counts: self.allocation_table.clone(),
            shots,
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
