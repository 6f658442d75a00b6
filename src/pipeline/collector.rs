//! Collector - the single consumer of pipeline outcomes
//!
//! The collector performs exactly one receive per dispatched target and hands
//! each outcome to the output boundary as soon as it arrives.

use crate::output::OutcomeSink;
use crate::pipeline::outcome::Outcome;
use crate::UrlHashError;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Lifecycle of one run
///
/// There is no idle state: a `Collector` only exists once `Dispatcher::spawn`
/// has started the workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Workers started, targets still being queued
    Dispatching,

    /// Every target queued, outcomes still arriving
    Draining,

    /// One outcome received for every target
    Done,
}

/// Totals for a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub workers: usize,
    pub elapsed: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} targets ({} ok, {} failed) with {} workers in {:?}",
            self.total, self.succeeded, self.failed, self.workers, self.elapsed
        )
    }
}

/// Receives the outcomes of one dispatched run
pub struct Collector {
    outcomes: mpsc::Receiver<Outcome>,
    expected: usize,
    received: usize,
    succeeded: usize,
    workers: usize,
    seeded: Arc<AtomicBool>,
    started: Instant,
}

impl Collector {
    pub(crate) fn new(
        outcomes: mpsc::Receiver<Outcome>,
        expected: usize,
        workers: usize,
        seeded: Arc<AtomicBool>,
    ) -> Self {
        Self {
            outcomes,
            expected,
            received: 0,
            succeeded: 0,
            workers,
            seeded,
            started: Instant::now(),
        }
    }

    /// Number of outcomes this run will produce
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Number of outcomes received so far
    pub fn received(&self) -> usize {
        self.received
    }

    /// Number of workers started for this run
    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn state(&self) -> RunState {
        if self.received >= self.expected {
            RunState::Done
        } else if self.seeded.load(Ordering::Acquire) {
            RunState::Draining
        } else {
            RunState::Dispatching
        }
    }

    /// Waits for the next outcome
    ///
    /// Returns `None` once every target has been accounted for. An earlier
    /// `None` means every worker exited abnormally; [`Collector::received`]
    /// is then below [`Collector::expected`].
    pub async fn next(&mut self) -> Option<Outcome> {
        if self.received >= self.expected {
            return None;
        }

        let outcome = self.outcomes.recv().await?;
        self.received += 1;
        if outcome.is_success() {
            self.succeeded += 1;
        }
        Some(outcome)
    }

    /// Forwards every outcome to `sink` and summarises the run
    pub async fn drain_into<S>(mut self, sink: &mut S) -> Result<RunSummary, UrlHashError>
    where
        S: OutcomeSink + ?Sized,
    {
        while let Some(outcome) = self.next().await {
            sink.emit(&outcome)?;
        }

        if self.received < self.expected {
            tracing::error!(
                "Pipeline closed early: {} of {} outcomes received",
                self.received,
                self.expected
            );
            return Err(UrlHashError::PipelineClosed {
                expected: self.expected,
                received: self.received,
            });
        }

        let summary = self.summary();
        tracing::info!("Run complete: {}", summary);
        Ok(summary)
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            total: self.received,
            succeeded: self.succeeded,
            failed: self.received - self.succeeded,
            workers: self.workers,
            elapsed: self.started.elapsed(),
        }
    }
}
