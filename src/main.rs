//! image-ingest - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use image_ingest::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    output::print_error,
    pipeline, CliGit, ImageFetcher,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    // Tagged lines go to stdout; diagnostics go to stderr
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(args.config.as_deref())?.with_env_overrides();
    validate_config(&config)?;

    let fetcher = ImageFetcher::new(&config.fetch)?;
    let git = CliGit::from_path()?;

    let report = pipeline::run(&args.to_run_options(), &fetcher, &git).await?;
    tracing::debug!("Run finished: {:?}", report);

    Ok(())
}
