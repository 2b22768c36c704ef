use crate::Extraction;
use std::io::{self, Write};

/// Writes one `category → item` line per entry.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the number of lines written.
    pub fn report(&mut self, extraction: &Extraction) -> io::Result<usize> {
        for entry in &extraction.entries {
            writeln!(self.out, "{entry}")?;
        }
        self.out.flush()?;
        Ok(extraction.entries.len())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
