use crate::output::traits::OutcomeSink;
use crate::pipeline::Outcome;
use std::io::{self, Write};

/// Writes `<target> <fingerprint-or-cause>` lines
///
/// Each line is flushed as soon as it is written so results show up while
/// the run is still in progress.
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    inner: W,
    lines: usize,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    /// Number of lines written so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl LineWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutcomeSink for LineWriter<W> {
    fn emit(&mut self, outcome: &Outcome) -> io::Result<()> {
        writeln!(self.inner, "{}", outcome)?;
        self.inner.flush()?;
        self.lines += 1;
        Ok(())
    }
}
