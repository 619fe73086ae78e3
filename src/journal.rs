use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::Error;

/// Append-only log buffered in memory
///
/// Entries accumulate until [`Journal::flush`] appends them to a file, one
/// per line, and empties the buffer.
#[derive(Debug, Clone)]
pub struct Journal<T> {
    entries: Vec<T>,
}

impl<T> Default for Journal<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Display> Journal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append buffered entries to `path`, creating the file if needed.
    ///
    /// An empty buffer leaves the file untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written. The buffer
    /// is kept in that case so the entries can be flushed again.
    pub fn flush(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        if self.entries.is_empty() {
            return Ok(());
        }

        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);
        for entry in &self.entries {
            writeln!(writer, "{entry}")?;
        }
        writer.flush()?;

        debug!("Flushed {} journal entries to {}", self.entries.len(), path.display());
        self.entries.clear();
        Ok(())
    }
}
