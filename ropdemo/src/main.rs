use std::fs::File;

use anyhow::Context as _;
use rop_core::{Baselines, PricingRequest, ports::SalesHistorySource as _};
use ropdemo::{AppConfig, Cli, CsvSalesHistory, report, slider_price};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project; subscribe so the events reach
    // stderr, filtered by RUST_LOG.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args, then layer the configuration on top of them
    let cli = Cli::import()?;
    let AppConfig { grid, elasticity } = AppConfig::load(&cli)?;
    grid.validate().context("invalid grid configuration")?;

    // The one-time dataset read; everything after this is pure compute
    let records = CsvSalesHistory::new(&cli.data)
        .load()
        .with_context(|| format!("failed to load dataset from {}", cli.data.display()))?;
    let baselines = Baselines::from_records(&records)?;
    tracing::info!(
        reference_price = baselines.reference_price,
        base_demand = baselines.base_demand,
        "derived baselines"
    );

    let request = PricingRequest {
        price: slider_price(cli.price, &baselines, &grid),
        promo_active: cli.promo,
    };

    let outcome = rop_solver::evaluate(&baselines, &request, &elasticity)?;
    let sweep = rop_solver::sweep(&baselines, request.regime(), &elasticity, &grid)?;
    let optimal = sweep.optimum();

    // If requested, dump the curves for charting
    if let Some(path) = &cli.curves {
        let document = report::CurvesDocument::new(&sweep, request.price, &optimal);
        serde_json::to_writer_pretty(File::create(path)?, &document)?;
        tracing::info!(path = %path.display(), "wrote curve data");
    }

    println!("{}", report::metrics_block(&outcome));
    println!("{}", report::elasticity_line(&outcome));
    println!("{}", report::summary_line(&optimal, request.regime()));

    Ok(())
}
