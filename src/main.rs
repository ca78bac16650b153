use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod publish;

/// Build the container image rooted next to this binary and push it to
/// its registry. Configured entirely through the environment: IMAGE_URL
/// (required) and CONTAINER_CLI (optional, defaults to docker).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    // Initialize tracing before anything else runs
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let _cli = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            // Exit with the failing tool's own code when there is one.
            let code = err
                .downcast_ref::<publish::PublishError>()
                .map(publish::PublishError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let config = config::Config::from_env()?;
    publish::publish_image(&config)?;
    Ok(())
}
