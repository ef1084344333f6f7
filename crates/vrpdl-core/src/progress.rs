//! Coarse ASCII progress bar for the batch download.
//!
//! Renders `[####>      ] : 42.00%` with a carriage return so successive
//! updates overwrite the same terminal line, and a final full bar on `finish`.

use std::io::{self, Write};

/// Progress over a fixed number of pairs, written to any sink.
pub struct ProgressBar<W: Write> {
    total: usize,
    width: usize,
    refresh: usize,
    done: usize,
    sink: W,
}

impl<W: Write> ProgressBar<W> {
    /// Redraws every `max(total / width, 1)` completed items. `width` is clamped to at least 1.
    pub fn new(total: usize, width: usize, sink: W) -> Self {
        let width = width.max(1);
        Self {
            total,
            width,
            refresh: (total / width).max(1),
            done: 0,
            sink,
        }
    }

    pub fn done(&self) -> usize {
        self.done
    }

    /// The underlying sink, for messages printed between redraws.
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Number of `#` cells for `done` completed items.
    fn filled(&self) -> usize {
        (self.done / self.refresh).min(self.width)
    }

    fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.done as f64 / self.total as f64 * 100.0
    }

    /// Bar line for the current state, without the trailing `\r`.
    pub fn render(&self) -> String {
        let filled = self.filled();
        format!(
            "[{}>{}] : {:.2}%",
            "#".repeat(filled),
            " ".repeat(self.width - filled),
            self.percent()
        )
    }

    /// Marks one more item complete and redraws when the refresh interval is reached.
    pub fn advance(&mut self) -> io::Result<()> {
        self.done += 1;
        if self.done % self.refresh == 0 {
            let line = self.render();
            write!(self.sink, "{}\r", line)?;
            self.sink.flush()?;
        }
        Ok(())
    }

    /// Prints the completed bar on its own line and returns the sink.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.sink, "[{}>] : 100%   ", "#".repeat(self.width))?;
        self.sink.flush()?;
        Ok(self.sink)
    }
}
