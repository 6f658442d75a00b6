//! Output sink trait
//!
//! The collector calls [`OutcomeSink::emit`] once per outcome, in arrival
//! order. Sinks decide how (and whether) to render it.

use crate::pipeline::Outcome;
use std::io;

/// Receives outcomes from the collector
pub trait OutcomeSink {
    /// Handles one outcome
    fn emit(&mut self, outcome: &Outcome) -> io::Result<()>;
}

/// Keeps every outcome in memory
impl OutcomeSink for Vec<Outcome> {
    fn emit(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.push(outcome.clone());
        Ok(())
    }
}

impl<S: OutcomeSink + ?Sized> OutcomeSink for &mut S {
    fn emit(&mut self, outcome: &Outcome) -> io::Result<()> {
        (**self).emit(outcome)
    }
}
