//! Bracket Orders Binary
//!
//! Sizes and builds one bracket order from configuration and, when
//! submission is enabled, sends it to the broker.
//!
//! # Usage
//!
//! ```bash
//! BRACKET_CONFIG=config.yaml cargo run --bin bracket-orders
//! ```
//!
//! # Environment Variables
//!
//! - `BRACKET_CONFIG`: Config file path (default: config.yaml)
//! - `RUST_LOG`: Log filter (default: `observability.logging.level`)
//! - Any `${VAR}` referenced from the config file (a `.env` file is loaded)
//!
//! # Exit Codes
//!
//! - 0: order built (and accepted, when submission is enabled)
//! - 1: any failure
//! - 2: quote high below quote low

use std::process::ExitCode;
use std::sync::Arc;

use bracket_orders::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use bracket_orders::error::{BracketError, EXIT_FAILURE};
use bracket_orders::infrastructure::broker::tda::{TdaBrokerAdapter, TdaConfig, TdaOrderRequest};
use bracket_orders::telemetry::init_tracing;
use bracket_orders::{PlaceBracketOrderUseCase, PlacementOutcome, PlacementReport};
use tracing::Instrument;

fn main() -> ExitCode {
    load_dotenv();

    let path =
        std::env::var("BRACKET_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match load_config(Some(&path)) {
        Ok(config) => config,
        Err(e) => {
            let err = BracketError::from(e);
            eprintln!("{}: {err}", err.code());
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(e) = init_tracing(&config.observability.logging) {
        eprintln!("{e}");
        return ExitCode::from(EXIT_FAILURE);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start runtime");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let run_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("bracket_run", run_id = %run_id, config = %path);

    match runtime.block_on(run(&config).instrument(span)) {
        Ok(report) => {
            print_order(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(
                run_id = %run_id,
                code = %e.code(),
                error = %e,
                "Bracket order run failed"
            );
            ExitCode::from(e.exit_code())
        }
    }
}

/// Wire the adapter into the use case and run it once.
async fn run(config: &Config) -> Result<PlacementReport, BracketError> {
    tracing::info!(
        symbol = %config.order.symbol,
        max_risk = %config.order.max_risk_per_position,
        entry = ?config.order.entry,
        rounding = %config.order.rounding,
        submission_enabled = config.submission.enabled,
        "Starting bracket order run"
    );

    let adapter = Arc::new(TdaBrokerAdapter::new(&TdaConfig::from(&config.broker))?);
    let use_case = PlaceBracketOrderUseCase::new(Arc::clone(&adapter), adapter)
        .with_sizer(config.position_sizer())
        .with_builder(config.order_builder());

    let report = use_case.execute(&config.placement_request()).await?;

    match &report.outcome {
        PlacementOutcome::DryRun => tracing::info!("Dry run complete"),
        PlacementOutcome::Submitted(confirmation) => tracing::info!(
            order_id = ?confirmation.order_id,
            "Bracket order submitted"
        ),
    }

    Ok(report)
}

/// Print the order as the broker would receive it.
fn print_order(report: &PlacementReport) {
    match serde_json::to_string_pretty(&TdaOrderRequest::from(&report.order)) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::warn!(error = %e, "Failed to render order JSON"),
    }
}

/// Load `.env` from the working directory or the nearest ancestor.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
