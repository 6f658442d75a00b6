//! Bounded concurrent fetch pipeline
//!
//! This module contains the core of urlhash:
//! - Fetching target content over HTTP
//! - Fingerprinting fetched content
//! - A fixed pool of workers competing for targets on a shared job queue
//! - A single collector receiving exactly one outcome per target
//!
//! ```text
//! seeder ──► job queue ──► worker × W ──► outcome channel ──► collector ──► sink
//! ```

mod collector;
mod dispatcher;
mod fetcher;
mod hasher;
mod outcome;
mod worker;

pub use collector::{Collector, RunState, RunSummary};
pub use dispatcher::{effective_workers, DispatchOptions, Dispatcher};
pub use fetcher::{build_http_client, fetch_body, Fetch, HttpFetcher};
pub use hasher::{fingerprint, Fingerprint, FINGERPRINT_LEN};
pub use outcome::{FailureOutcome, Outcome, SuccessOutcome};
pub use worker::{process_target, run_worker, JobReceiver, JobSender, OutcomeSender};

use crate::target::Target;
use crate::UrlHashError;

/// Fetches and fingerprints every target, returning all outcomes
///
/// Outcomes are in arrival order, not input order. Individual fetch failures
/// are returned as [`Outcome::Failure`] values; the only error is an internal
/// pipeline fault.
///
/// # Example
///
/// ```no_run
/// use urlhash::pipeline::{run, HttpFetcher};
/// use urlhash::config::FetcherConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::from_config(&FetcherConfig::default())?;
/// let outcomes = run(vec!["example.com", "https://www.rust-lang.org"], 4, fetcher).await?;
/// for outcome in &outcomes {
///     println!("{}", outcome);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn run<F, I, T>(
    targets: I,
    parallelism: usize,
    fetcher: F,
) -> Result<Vec<Outcome>, UrlHashError>
where
    F: Fetch + 'static,
    I: IntoIterator<Item = T>,
    T: Into<Target>,
{
    let dispatcher = Dispatcher::new(fetcher, DispatchOptions::new(parallelism));
    let collector = dispatcher.spawn(targets);

    let mut outcomes = Vec::with_capacity(collector.expected());
    collector.drain_into(&mut outcomes).await?;
    Ok(outcomes)
}
