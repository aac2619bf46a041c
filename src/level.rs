//! Severity levels for log output.
//!
//! Levels order by severity (`Verbose < Debug < … < Assert`) and carry the
//! numeric priority used by logcat-style console protocols.

use std::fmt;

/// Severity of a log message.
///
/// # Examples
///
/// ```
/// use mainprint::Level;
///
/// assert!(Level::Warn > Level::Info);
/// assert_eq!(Level::Info.priority(), 4);
/// assert_eq!(Level::Error.as_str(), "E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Fine-grained tracing output.
    Verbose,
    /// Diagnostic output for development.
    Debug,
    /// Routine operational messages.
    Info,
    /// Something unexpected that the program can continue past.
    Warn,
    /// A failure the program could not handle.
    Error,
    /// A condition that should never happen.
    Assert,
}

impl Level {
    /// Numeric console priority (`Verbose` = 2 through `Assert` = 7).
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Verbose => 2,
            Self::Debug => 3,
            Self::Info => 4,
            Self::Warn => 5,
            Self::Error => 6,
            Self::Assert => 7,
        }
    }

    /// One-letter label used when rendering a line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "V",
            Self::Debug => "D",
            Self::Info => "I",
            Self::Warn => "W",
            Self::Error => "E",
            Self::Assert => "A",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
