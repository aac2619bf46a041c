//! Downstream console sinks.
//!
//! A [`LinePrint`] writes exactly one already-split line per call. Print
//! strategies own message splitting and thread placement; a `LinePrint` only
//! has to put one `(level, tag, line)` triple somewhere.

use std::io::Write;
use std::sync::Mutex;

use crate::level::Level;
use crate::tag::Tag;

/// Writes a single log line to some console-like destination.
///
/// Implementations are not required to be thread-safe in any interesting
/// way beyond `Send + Sync`; the thread-affine strategy exists precisely so
/// that a `LinePrint` only ever runs on the designated main context.
pub trait LinePrint: Send + Sync {
    /// Writes one single-line message with its level and tag.
    ///
    /// `line` never contains `'\n'`.
    fn write_line(&self, level: Level, tag: &Tag, line: &str);
}

/// Console sink that renders `"{level}/{tag}: {line}"` to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrPrint;

impl LinePrint for StderrPrint {
    fn write_line(&self, level: Level, tag: &Tag, line: &str) {
        // Ignore I/O failures: a log sink has nowhere to report them.
        let stderr = std::io::stderr();
        let mut guard = stderr.lock();
        let _ = writeln!(guard, "{level}/{tag}: {line}");
    }
}

/// One recorded line write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Severity the line was written with.
    pub level: Level,
    /// Tag the line was written with.
    pub tag: Tag,
    /// The single-line message body.
    pub line: String,
}

/// In-memory sink that records every line write.
///
/// This is the observable backend used by the crate's own tests; it is
/// public so embedders can assert on output the same way.
///
/// # Examples
///
/// ```
/// use mainprint::{Level, LinePrint, MemoryPrint, Tag};
///
/// let sink = MemoryPrint::default();
/// let tag = Tag::new("t").unwrap();
/// sink.write_line(Level::Info, &tag, "hello");
///
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.records()[0].line, "hello");
/// ```
#[derive(Debug, Default)]
pub struct MemoryPrint {
    records: Mutex<Vec<LineRecord>>,
}

impl MemoryPrint {
    /// Returns a snapshot of every line recorded so far, in write order.
    ///
    /// # Panics
    ///
    /// Panics if a previous writer panicked while holding the record lock.
    #[must_use]
    pub fn records(&self) -> Vec<LineRecord> {
        self.records.lock().expect("record lock poisoned").clone()
    }

    /// Number of lines recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if a previous writer panicked while holding the record lock.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().expect("record lock poisoned").len()
    }

    /// Returns true if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all recorded lines.
    ///
    /// # Panics
    ///
    /// Panics if a previous writer panicked while holding the record lock.
    pub fn clear(&self) {
        self.records.lock().expect("record lock poisoned").clear();
    }
}

impl LinePrint for MemoryPrint {
    fn write_line(&self, level: Level, tag: &Tag, line: &str) {
        let record = LineRecord {
            level,
            tag: tag.clone(),
            line: line.to_string(),
        };
        self.records.lock().expect("record lock poisoned").push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_print_records_in_write_order() {
        let sink = MemoryPrint::default();
        let tag = Tag::new("t").unwrap();

        sink.write_line(Level::Info, &tag, "first");
        sink.write_line(Level::Warn, &tag, "second");

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, "first");
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[1].line, "second");
        assert_eq!(records[1].level, Level::Warn);
    }

    #[test]
    fn stderr_print_accepts_any_line() {
        let sink = StderrPrint;
        let tag = Tag::new("console").unwrap();
        sink.write_line(Level::Verbose, &tag, "smoke test line");
        sink.write_line(Level::Assert, &tag, "");
    }

    #[test]
    fn memory_print_clear_empties_the_sink() {
        let sink = MemoryPrint::default();
        let tag = Tag::new("t").unwrap();
        sink.write_line(Level::Debug, &tag, "x");
        assert!(!sink.is_empty());

        sink.clear();
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
    }
}
