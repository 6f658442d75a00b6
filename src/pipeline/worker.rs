//! Pipeline workers
//!
//! Each worker takes one target at a time from the shared job queue, fetches
//! and hashes it, and hands exactly one outcome to the collector before
//! taking the next target.

use crate::pipeline::fetcher::Fetch;
use crate::pipeline::hasher::fingerprint;
use crate::pipeline::outcome::Outcome;
use crate::target::Target;
use std::sync::Arc;
use tokio::sync::mpsc;

pub type JobSender = async_channel::Sender<Target>;
pub type JobReceiver = async_channel::Receiver<Target>;
pub type OutcomeSender = mpsc::Sender<Outcome>;

/// Fetches and hashes one target, converting any failure into an outcome
pub async fn process_target<F>(fetcher: &F, target: Target) -> Outcome
where
    F: Fetch + ?Sized,
{
    match fetcher.fetch(&target).await {
        Ok(body) => Outcome::success(target, fingerprint(&body)),
        Err(cause) => {
            tracing::debug!("Fetch failed for {}: {}", target, cause);
            Outcome::failure(target, cause)
        }
    }
}

/// Drains the job queue until it is closed and empty
///
/// Returns the number of targets this worker processed.
pub async fn run_worker<F>(
    id: usize,
    fetcher: Arc<F>,
    jobs: JobReceiver,
    outcomes: OutcomeSender,
) -> usize
where
    F: Fetch + ?Sized,
{
    tracing::trace!("Worker {} started", id);
    let mut processed = 0;

    while let Ok(target) = jobs.recv().await {
        let outcome = process_target(fetcher.as_ref(), target).await;

        // Blocks until the collector has room
        if let Err(e) = outcomes.send(outcome).await {
            tracing::warn!(
                "Worker {} stopping: collector dropped outcome for {}",
                id,
                e.0.target()
            );
            break;
        }
        processed += 1;
    }

    tracing::trace!("Worker {} finished after {} targets", id, processed);
    processed
}
