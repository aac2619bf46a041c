//! # mainprint - thread-affine log printing
//!
//! mainprint guarantees that log lines are written only from one designated
//! main execution context, no matter which thread issued the log call. Use
//! it when the underlying console is not thread-safe, or when one thread
//! (a UI loop, an embedder's callback thread) must own all output.
//!
//! ## Core pieces
//!
//! - **[`MainContext`]**: a bounded FIFO task queue bound to one thread,
//!   serviced with [`drain`](MainContext::drain) / [`run`](MainContext::run)
//!   or a dedicated thread via [`spawn`](MainContext::spawn)
//! - **[`Print`]**: the output-strategy contract a logging facade plugs into
//! - **[`MainThreadPrint`]**: the thread-affine strategy - writes inline on
//!   the main context, defers whole messages from everywhere else
//! - **[`LinePrint`]**: the downstream one-line console primitive
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use mainprint::{
//!     Level, MainContext, MainContextConfig, MainThreadPrint, MemoryPrint, Print, Tag,
//! };
//!
//! let context = MainContext::bind(MainContextConfig::default());
//! let console = Arc::new(MemoryPrint::default());
//! let print = MainThreadPrint::new(context.handle(), console.clone());
//!
//! let tag = Tag::new("app").unwrap();
//! print.println(Level::Info, &tag, "started");
//!
//! std::thread::scope(|s| {
//!     s.spawn(|| print.println(Level::Warn, &tag, "from a worker"));
//! });
//! context.drain().unwrap();
//!
//! assert_eq!(console.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod context;
pub mod error;
pub mod level;
pub mod print;
pub mod sink;
pub mod tag;

#[cfg(feature = "facade")]
pub mod facade;

// Re-export primary types at crate root for convenience
pub use console::{LinePrint, LineRecord, MemoryPrint, StderrPrint};
pub use context::{MainContext, MainContextConfig, MainHandle, MainLoop, Task};
pub use error::{DispatchError, MainPrintError, MainPrintResult, ValidationError};
pub use level::Level;
pub use print::{DirectPrint, Print};
pub use sink::MainThreadPrint;
pub use tag::Tag;
