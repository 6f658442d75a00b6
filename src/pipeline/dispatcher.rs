//! Dispatcher - seeds the job queue and starts the worker pool
//!
//! The dispatcher computes the effective worker count, starts that many
//! workers on the runtime, and feeds every target into the job queue from a
//! separate task so seeding never waits on the collector.

use crate::config::Config;
use crate::pipeline::collector::Collector;
use crate::pipeline::fetcher::Fetch;
use crate::pipeline::outcome::Outcome;
use crate::pipeline::worker::{run_worker, JobSender};
use crate::target::Target;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Knobs for one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Upper bound on concurrent workers
    pub parallelism: usize,

    /// Job queue capacity; 0 means one slot per worker
    pub queue_capacity: usize,
}

impl DispatchOptions {
    pub fn new(parallelism: usize) -> Self {
        Self {
            parallelism,
            queue_capacity: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            parallelism: config.fetcher.parallel,
            queue_capacity: config.pipeline.queue_capacity,
        }
    }
}

/// Number of workers started for `targets` targets
///
/// Never more workers than targets. A parallelism of 0 is a caller error;
/// it is treated as 1 so a non-empty run cannot stall.
pub fn effective_workers(parallelism: usize, targets: usize) -> usize {
    let parallelism = if parallelism == 0 {
        tracing::warn!("Parallelism of 0 requested, using 1 worker");
        1
    } else {
        parallelism
    };
    parallelism.min(targets)
}

/// Owns the fetcher and starts pipeline runs
pub struct Dispatcher<F: ?Sized> {
    fetcher: Arc<F>,
    options: DispatchOptions,
}

impl<F> Dispatcher<F>
where
    F: Fetch + 'static,
{
    pub fn new(fetcher: F, options: DispatchOptions) -> Self {
        Self::with_shared(Arc::new(fetcher), options)
    }
}

impl<F> Dispatcher<F>
where
    F: Fetch + ?Sized + 'static,
{
    /// Creates a dispatcher around a fetcher that is already shared
    pub fn with_shared(fetcher: Arc<F>, options: DispatchOptions) -> Self {
        Self { fetcher, options }
    }

    /// Starts a run over `targets` and returns its collector
    ///
    /// Must be called from within a Tokio runtime. Workers and the seeder are
    /// detached; they exit on their own once the job queue is drained.
    pub fn spawn<I, T>(&self, targets: I) -> Collector
    where
        I: IntoIterator<Item = T>,
        T: Into<Target>,
    {
        let targets: Vec<Target> = targets.into_iter().map(Into::into).collect();
        let total = targets.len();
        let workers = effective_workers(self.options.parallelism, total);

        if total == 0 {
            tracing::debug!("No targets, nothing to dispatch");
            let (_, rx) = mpsc::channel::<Outcome>(1);
            return Collector::new(rx, 0, 0, Arc::new(AtomicBool::new(true)));
        }

        let capacity = if self.options.queue_capacity == 0 {
            workers
        } else {
            self.options.queue_capacity
        }
        .max(1);

        tracing::debug!(
            "Dispatching {} targets to {} workers (queue capacity {})",
            total,
            workers,
            capacity
        );

        let (job_tx, job_rx) = async_channel::bounded::<Target>(capacity);
        let (outcome_tx, outcome_rx) = mpsc::channel::<Outcome>(workers);

        for id in 0..workers {
            tokio::spawn(run_worker(
                id,
                Arc::clone(&self.fetcher),
                job_rx.clone(),
                outcome_tx.clone(),
            ));
        }
        // Only workers may hold these, so the channels close when they exit
        drop(job_rx);
        drop(outcome_tx);

        let seeded = Arc::new(AtomicBool::new(false));
        tokio::spawn(seed(targets, job_tx, Arc::clone(&seeded)));

        Collector::new(outcome_rx, total, workers, seeded)
    }
}

/// Feeds every target into the job queue in input order, then closes it
async fn seed(targets: Vec<Target>, jobs: JobSender, seeded: Arc<AtomicBool>) {
    for target in targets {
        if let Err(e) = jobs.send(target).await {
            tracing::warn!("Job queue closed before {} was queued", e.0);
            break;
        }
    }
    jobs.close();
    seeded.store(true, Ordering::Release);
    tracing::trace!("Seeding complete");
}
