//! The pluggable print-strategy contract.
//!
//! A logging facade that wants to emit something calls
//! [`Print::println`] with a level, a tag, and a message that may span
//! several lines. Strategies decide where and *on which thread* the
//! resulting line writes happen.

use std::sync::Arc;

use crate::console::LinePrint;
use crate::level::Level;
use crate::tag::Tag;

/// Output strategy consumed by a logging facade.
///
/// # Line splitting
///
/// Every strategy in this crate splits `message` the same way: trailing
/// `'\n'` characters are trimmed, then the body is split on `'\n'` and each
/// segment becomes one [`LinePrint::write_line`] call with the same
/// `(level, tag)`, top to bottom. A message whose body is empty (the empty
/// string, or newlines only) produces exactly one write of an empty line,
/// so a call always results in at least one write.
pub trait Print: Send + Sync {
    /// Emits a possibly multi-line message.
    ///
    /// No return value: failures to deliver are the strategy's business
    /// (this is a best-effort sink, not a transport).
    fn println(&self, level: Level, tag: &Tag, message: &str);
}

/// Splits `message` per the [`Print`] contract and writes each line.
pub(crate) fn write_split(console: &dyn LinePrint, level: Level, tag: &Tag, message: &str) {
    let body = message.trim_end_matches('\n');
    if body.is_empty() {
        console.write_line(level, tag, "");
        return;
    }
    for line in body.split('\n') {
        console.write_line(level, tag, line);
    }
}

/// Strategy that writes immediately on the calling thread.
///
/// Use this when the underlying console is thread-safe and caller-side
/// latency matters more than deterministic ordering.
pub struct DirectPrint {
    console: Arc<dyn LinePrint>,
}

impl DirectPrint {
    /// Creates a direct strategy over the given console.
    #[must_use]
    pub fn new(console: Arc<dyn LinePrint>) -> Self {
        Self { console }
    }
}

impl Print for DirectPrint {
    fn println(&self, level: Level, tag: &Tag, message: &str) {
        write_split(self.console.as_ref(), level, tag, message);
    }
}
