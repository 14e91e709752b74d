//! QUANTFOLIO — Quantum-Inspired Asset Pricing & Portfolio Demo
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod aggregate;
pub mod backend;
pub mod chsh;
pub mod config;
pub mod portfolio;
pub mod types;
