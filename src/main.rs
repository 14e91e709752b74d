//! QUANTFOLIO — Quantum-Inspired Asset Pricing & Portfolio Demo
//!
//! Entry point. Loads configuration (built-in demo defaults when no file is
//! present), initialises structured logging, and runs the CHSH and portfolio
//! demos against the mock measurement backend, printing a line-oriented
//! report to stdout.

use anyhow::Result;
use tracing::info;

use quantfolio::backend::mock::MockBackend;
use quantfolio::backend::MeasurementBackend;
use quantfolio::config::AppConfig;
use quantfolio::types::ParityTable;
use quantfolio::{chsh, portfolio};

const BANNER: &str = r#"
  ___  _   _   _    _   _ _____ _____ ___  _     ___ ___
 / _ \| | | | / \  | \ | |_   _|  ___/ _ \| |   |_ _/ _ \
| | | | | | |/ _ \ |  \| | | | | |_ | | | | |    | | | | |
| |_| | |_| / ___ \| |\  | | | |  _|| |_| | |___ | | |_| |
 \__\_\\___/_/   \_\_| \_| |_| |_|   \___/|_____|___\___/

  Quantum-Inspired Asset Pricing & Portfolio Demo
  v0.1.0 — Mocked Backend
"#;

fn main() -> Result<()> {
    let cfg = AppConfig::load_or_default("config.toml")?;
    cfg.validate()?;

    init_logging();

    println!("{BANNER}");
    info!(
        shots = cfg.demo.shots,
        chsh_pairs = cfg.chsh.angle_pairs.len(),
        assets = cfg.portfolio.angles.len(),
        "QUANTFOLIO starting up"
    );

    let backend = MockBackend::new();
    info!(backend = backend.name(), "Using mocked measurement backend");

    // -- CHSH demo --------------------------------------------------------

    let parity = ParityTable::default();
    let bell = chsh::run(&backend, &cfg.chsh, &parity, cfg.demo.shots)?;

    println!("=== CHSH Bell test ===");
    for pair in &bell.pairs {
        println!("{pair}");
    }
    println!("{bell}");
    println!();

    // -- Portfolio demo ---------------------------------------------------

    let folio = portfolio::run(&backend, &cfg.portfolio, cfg.demo.shots)?;

    println!("=== Portfolio ===");
    println!("weights: {}", folio.weights);
    println!("expected return: {:.4}", folio.performance.expected_return);
    println!("risk: {:.4}", folio.performance.risk);
    println!("total weight: {:.4}", folio.total_weight());

    info!("QUANTFOLIO demo complete.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quantfolio=info"));

    let json_logging = std::env::var("QUANTFOLIO_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
