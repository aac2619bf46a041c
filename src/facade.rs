//! Adapter for the `log` facade.
//!
//! Installs any [`Print`] strategy as the process-wide `log` backend. Level
//! filtering stays where the facade puts it (`log::set_max_level`); this
//! adapter forwards every record it is given.

use std::sync::Arc;

use log::{Log, Metadata, Record};

use crate::level::Level;
use crate::print::Print;
use crate::tag::Tag;

/// Maps a `log` level onto a console [`Level`].
///
/// `Trace` maps to [`Level::Verbose`]; the rest map by name.
#[must_use]
pub fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Verbose,
    }
}

/// `log::Log` implementation forwarding records to a [`Print`] strategy.
///
/// The record's `target` becomes the tag; records with an empty target fall
/// back to the default tag given at construction.
pub struct FacadeLogger {
    print: Arc<dyn Print>,
    default_tag: Tag,
}

impl FacadeLogger {
    /// Creates a facade logger over the given strategy.
    #[must_use]
    pub fn new(print: Arc<dyn Print>, default_tag: Tag) -> Self {
        Self { print, default_tag }
    }
}

impl Log for FacadeLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Filtering belongs to the facade (`log::set_max_level`).
        true
    }

    fn log(&self, record: &Record) {
        let tag = Tag::new(record.target()).unwrap_or_else(|_| self.default_tag.clone());
        let message = record.args().to_string();
        self.print.println(map_level(record.level()), &tag, &message);
    }

    fn flush(&self) {}
}

/// Installs a [`Print`] strategy as the global `log` backend.
///
/// Call once at startup; set the level ceiling separately with
/// `log::set_max_level`.
///
/// # Errors
///
/// Returns `log::SetLoggerError` if a logger is already installed.
pub fn install(print: Arc<dyn Print>, default_tag: Tag) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(FacadeLogger::new(print, default_tag)))
}
