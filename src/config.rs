//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs. Every
//! field carries a default reproducing the literal demo inputs, so the binary
//! runs with no config file at all — a present file only overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8};
use std::fs;
use std::path::Path;

use crate::types::{AssetTable, QuantError};

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub chsh: ChshConfig,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    /// Trial count used as the probability denominator for every measurement.
    #[serde(default = "default_shots")]
    pub shots: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChshConfig {
    /// Analyzer-angle pairs measured by the CHSH demo, in radians.
    #[serde(default = "default_angle_pairs")]
    pub angle_pairs: Vec<(f64, f64)>,
    /// Classical correlation bound the S-value is compared against.
    #[serde(default = "default_classical_bound")]
    pub classical_bound: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PortfolioConfig {
    /// Rotation angles normalized into portfolio weights.
    #[serde(default = "default_portfolio_angles")]
    pub angles: Vec<f64>,
    /// Per-outcome asset returns.
    #[serde(default = "default_returns")]
    pub returns: HashMap<String, f64>,
    /// Per-outcome asset risks.
    #[serde(default = "default_risks")]
    pub risks: HashMap<String, f64>,
}

fn default_shots() -> u64 {
    1024
}

fn default_classical_bound() -> f64 {
    2.0
}

fn default_angle_pairs() -> Vec<(f64, f64)> {
    vec![
        (0.0, FRAC_PI_8),
        (0.0, 3.0 * FRAC_PI_8),
        (FRAC_PI_4, FRAC_PI_8),
        (FRAC_PI_4, 3.0 * FRAC_PI_8),
    ]
}

fn default_portfolio_angles() -> Vec<f64> {
    vec![FRAC_PI_8, -FRAC_PI_8, FRAC_PI_4, FRAC_PI_2]
}

fn default_returns() -> HashMap<String, f64> {
    AssetTable::default().returns
}

fn default_risks() -> HashMap<String, f64> {
    AssetTable::default().risks
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { shots: default_shots() }
    }
}

impl Default for ChshConfig {
    fn default() -> Self {
        Self {
            angle_pairs: default_angle_pairs(),
            classical_bound: default_classical_bound(),
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            angles: default_portfolio_angles(),
            returns: default_returns(),
            risks: default_risks(),
        }
    }
}

impl PortfolioConfig {
    /// The configured return/risk maps as an [`AssetTable`].
    pub fn asset_table(&self) -> AssetTable {
        AssetTable {
            returns: self.returns.clone(),
            risks: self.risks.clone(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Load configuration, falling back to the built-in defaults when the
    /// file does not exist. A present-but-malformed file is still an error.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject configurations the demo cannot run with.
    pub fn validate(&self) -> Result<(), QuantError> {
        if self.demo.shots == 0 {
            return Err(QuantError::Config("shots must be positive".into()));
        }
        if self.chsh.angle_pairs.is_empty() {
            return Err(QuantError::Config("chsh.angle_pairs must not be empty".into()));
        }
        if self.portfolio.angles.is_empty() {
            return Err(QuantError::Config("portfolio.angles must not be empty".into()));
        }
        if self.portfolio.returns.is_empty() || self.portfolio.risks.is_empty() {
            return Err(QuantError::Config(
                "portfolio return/risk tables must not be empty".into(),
            ));
        }
        Ok(())
    }
}
