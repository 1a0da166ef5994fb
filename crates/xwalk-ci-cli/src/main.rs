//! xwalk-ci - Crosswalk test-environment provisioner CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use xwalk_ci_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // The pipeline's only externally observable result is the test
    // runner's exit status.
    let code = xwalk_ci_cli::run(cli).await?;
    std::process::exit(code);
}
