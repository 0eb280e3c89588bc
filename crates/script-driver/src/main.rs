//! Chess engine test harness
//!
//! Starts the engine and replays the recorded game into it, so the whole
//! transcript (our input and the engine's output) appears on this terminal.

use tracing::info;
use tracing_subscriber::EnvFilter;

use script_driver::{DriverConfig, Script, ScriptedDriver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr, stdout carries the transcript
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut config = DriverConfig::load()?;
    config.apply_args(std::env::args().skip(1))?;

    let script = match &config.script_path {
        Some(path) => Script::load(path).await?,
        None => Script::builtin(),
    };
    let launch = config.launch_command()?;
    info!(command = %launch, lines = script.len(), "Driver config loaded");

    let mut driver = ScriptedDriver::new(launch, script, config.pacing(), tokio::io::stdout());
    let summary = driver.run().await?;

    info!(lines_sent = summary.lines_sent, status = %summary.status, "Script complete");
    Ok(())
}
