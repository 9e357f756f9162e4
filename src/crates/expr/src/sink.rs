//! Output sinks that the append node writes into.

use std::fmt::Write as _;
use std::io;

use crate::node::Int;

/// Something integers can be appended to, like a stream or an output iterator.
pub trait Sink {
    fn append(&mut self, value: Int);
}

impl Sink for Vec<Int> {
    fn append(&mut self, value: Int) {
        self.push(value);
    }
}

/// Appends the decimal text of each value, with no separator.
impl Sink for String {
    fn append(&mut self, value: Int) {
        // Writing into a String cannot fail.
        let _ = write!(self, "{}", value);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn append(&mut self, value: Int) {
        (**self).append(value);
    }
}

/// Sink formatting values into an `io::Write`.
///
/// Each value is followed by the separator, if one is set. `Sink::append`
/// has no error channel, so the first I/O error is kept, later values are
/// dropped, and the error is returned from [`WriteSink::finish`].
#[derive(Debug)]
pub struct WriteSink<W: io::Write> {
    writer: W,
    separator: Option<String>,
    written: usize,
    error: Option<io::Error>,
}

impl<W: io::Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            separator: None,
            written: 0,
            error: None,
        }
    }

    /// Write `separator` after every value.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Number of values written successfully.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the writer, or the first error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn try_append(&mut self, value: Int) -> io::Result<()> {
        write!(self.writer, "{}", value)?;
        if let Some(separator) = &self.separator {
            self.writer.write_all(separator.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: io::Write> Sink for WriteSink<W> {
    fn append(&mut self, value: Int) {
        if self.error.is_some() {
            return;
        }
        match self.try_append(value) {
            Ok(()) => self.written += 1,
            Err(err) => {
                log::warn!("sink write failed after {} values: {}", self.written, err);
                self.error = Some(err);
            }
        }
    }
}
