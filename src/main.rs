//! urlhash main entry point
//!
//! This is the command-line interface: it parses arguments, merges them over
//! the configuration file, runs the pipeline, and prints one line per target.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use urlhash::config::{load_config_with_hash, validate, Config};
use urlhash::output::LineWriter;
use urlhash::pipeline::{DispatchOptions, Dispatcher, HttpFetcher};

/// urlhash: fetch URLs in parallel and print an MD5 of each body
///
/// Each target prints as `<target> <md5>` on success or
/// `<target> <error>` on failure. Lines appear in completion order.
#[derive(Parser, Debug)]
#[command(name = "urlhash")]
#[command(version)]
#[command(about = "Fetch URLs in parallel and fingerprint their content", long_about = None)]
struct Cli {
    /// URLs to fetch; `http://` is assumed when no scheme is given
    #[arg(value_name = "TARGET")]
    targets: Vec<String>,

    /// Parallel requests limit [default: 10]
    #[arg(long, value_name = "N")]
    parallel: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    let fetcher = HttpFetcher::from_config(&config.fetcher)?;
    let dispatcher = Dispatcher::new(fetcher, DispatchOptions::from_config(&config));

    tracing::info!(
        "Fetching {} targets with up to {} parallel requests",
        cli.targets.len(),
        config.fetcher.parallel
    );

    let collector = dispatcher.spawn(cli.targets);
    let mut output = LineWriter::stdout();
    collector.drain_into(&mut output).await?;

    Ok(())
}

/// Loads the config file if given, then applies CLI overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::debug!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::debug!("Configuration loaded (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(parallel) = cli.parallel {
        config.fetcher.parallel = parallel;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only result lines.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("urlhash=info,warn")),
            1 => EnvFilter::new("urlhash=debug,info"),
            2 => EnvFilter::new("urlhash=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
