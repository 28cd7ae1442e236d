//! Runs one synchronisation pass and exits.
//!
//! Usage:
//!
//! ```text
//! LINEAR_PERSONAL_API_KEY=lin_api_... autotask [--definitions tasks/index.json]
//! ```
//!
//! Exits with status 0 when every definition was created or skipped, and
//! non-zero with a single message otherwise. Under GitHub Actions the
//! message is also emitted as an `::error::` workflow command so it is
//! surfaced on the run summary.

use autotask::config::Cli;
use autotask::definition::adapters::JsonFileDefinitionSource;
use autotask::logging;
use autotask::sync::services::SyncService;
use autotask::tracker::adapters::LinearClient;
use clap::Parser;
use eyre::WrapErr;
use mockable::DefaultClock;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let result = run(cli).await;
    if let Err(err) = &result {
        annotate_workflow(&format!("{err:#}"));
    }
    result
}

async fn run(cli: Cli) -> eyre::Result<()> {
    let config = cli.into_config()?;
    let source = JsonFileDefinitionSource::new(config.definitions.clone());
    let tracker = LinearClient::with_options(config.api_key.clone(), &config.linear_options())
        .wrap_err("failed to initialise the Linear client")?;
    let service = SyncService::new(Arc::new(tracker), Arc::new(DefaultClock))
        .with_options(config.sync_options());

    service.run_from_source(&source).await?;
    Ok(())
}

/// Emits a GitHub Actions error annotation when running inside a workflow.
fn annotate_workflow(message: &str) {
    if env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true") {
        emit_workflow_error(&escape_workflow_data(message));
    }
}

#[expect(
    clippy::print_stdout,
    reason = "workflow commands are read from stdout by the Actions runner"
)]
fn emit_workflow_error(escaped: &str) {
    println!("::error::{escaped}");
}

/// Escapes workflow command data so multi-line messages stay one command.
fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
