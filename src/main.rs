// This is the primary entry point for the logo optimizer.
// The lib.rs file serves only as a public API for external consumers.

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use logo_optimizer::{PipelineConfig, PipelineReporter};

fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)         // Keep colored output
        .with_writer(std::io::stdout)
        .compact();              // Use compact formatter instead of pretty

    subscriber.init();

    info!("=== Logo Optimizer Starting ===");

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = PipelineConfig::default();

    let report = logo_optimizer::pipeline::run(&config)
        .context("logo optimization pipeline failed")?;

    info!("\n{}", PipelineReporter::from_report(report));
    Ok(())
}
