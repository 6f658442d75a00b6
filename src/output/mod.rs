//! Output module for reporting outcomes
//!
//! This module handles:
//! - The sink interface the collector hands outcomes to
//! - Writing one line per outcome as it arrives

mod traits;
mod writer;

pub use traits::OutcomeSink;
pub use writer::LineWriter;
