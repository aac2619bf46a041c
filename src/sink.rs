//! The thread-affine print strategy.

use std::sync::Arc;

use crate::console::LinePrint;
use crate::context::MainHandle;
use crate::level::Level;
use crate::print::{write_split, Print};
use crate::tag::Tag;

/// Print strategy that only ever writes from the designated main context.
///
/// On the main context, `println` splits and writes synchronously before
/// returning. On any other thread, the whole split-and-write is packaged as
/// one deferred task and posted to the main context's queue; the call
/// returns immediately and the lines appear whenever that queue is next
/// serviced. One message is always one task, so its lines are never
/// interleaved with another deferred message's lines.
///
/// Ordering is guaranteed only among calls made directly on the main
/// context. Deferred messages run in post order relative to each other, but
/// interleave arbitrarily with main-context writes. If the main context is
/// gone (or its queue full), a deferred message is silently dropped: this
/// is a best-effort convenience sink, not a durable transport.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mainprint::{
///     Level, MainContext, MainContextConfig, MainThreadPrint, MemoryPrint, Print, Tag,
/// };
///
/// let context = MainContext::bind(MainContextConfig::default());
/// let sink = Arc::new(MemoryPrint::default());
/// let print = MainThreadPrint::new(context.handle(), sink.clone());
///
/// // Bound thread: written before println returns.
/// print.println(Level::Info, &Tag::new("demo").unwrap(), "ready");
/// assert_eq!(sink.len(), 1);
/// ```
pub struct MainThreadPrint {
    main: MainHandle,
    console: Arc<dyn LinePrint>,
}

impl MainThreadPrint {
    /// Creates a thread-affine strategy bound to the given main context.
    #[must_use]
    pub fn new(main: MainHandle, console: Arc<dyn LinePrint>) -> Self {
        Self { main, console }
    }
}

impl Print for MainThreadPrint {
    fn println(&self, level: Level, tag: &Tag, message: &str) {
        if self.main.is_current() {
            write_split(self.console.as_ref(), level, tag, message);
            return;
        }

        let console = Arc::clone(&self.console);
        let tag = tag.clone();
        let message = message.to_string();
        // Best effort: with the main context gone there is nowhere to write.
        let _ = self.main.post(move || {
            write_split(console.as_ref(), level, &tag, &message);
        });
    }
}
