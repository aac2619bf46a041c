//! The designated main execution context.
//!
//! A [`MainContext`] owns a bounded FIFO task queue and the identity of the
//! one thread allowed to service it. Any number of producer threads post
//! tasks through cloned [`MainHandle`]s; the bound thread runs them with
//! [`drain`](MainContext::drain) or [`run`](MainContext::run). Producers
//! never block: posting is a `try_send` hand-off.

use std::thread::{self, JoinHandle, ThreadId};

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError, TrySendError};

use crate::error::DispatchError;

/// A unit of deferred work executed on the main context.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Main context configuration.
#[derive(Debug, Clone)]
pub struct MainContextConfig {
    /// Max queued tasks before posts are rejected.
    pub queue_capacity: usize,
    /// Name given to the dedicated thread when using [`MainContext::spawn`].
    pub thread_name: String,
}

impl Default for MainContextConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 1024,
            thread_name: "mainprint-main".to_string(),
        }
    }
}

/// The consuming side of the main context: queue plus bound thread identity.
///
/// Created with [`bind`](Self::bind) on the thread that is to act as the
/// main context. The identity and the queue are fixed at that point and
/// never reconfigured.
///
/// # Examples
///
/// ```
/// use mainprint::{MainContext, MainContextConfig};
///
/// let context = MainContext::bind(MainContextConfig::default());
/// let handle = context.handle();
///
/// assert!(handle.is_current());
/// handle.post(|| {}).unwrap();
/// assert_eq!(context.drain().unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct MainContext {
    thread_id: ThreadId,
    tx: Sender<Task>,
    rx: Receiver<Task>,
    queue_capacity: usize,
}

impl MainContext {
    /// Binds a new main context to the calling thread.
    #[must_use]
    pub fn bind(config: MainContextConfig) -> Self {
        let queue_capacity = config.queue_capacity.max(1);
        let (tx, rx) = bounded::<Task>(queue_capacity);
        Self {
            thread_id: thread::current().id(),
            tx,
            rx,
            queue_capacity,
        }
    }

    /// Spawns a dedicated thread that binds a context and services it until
    /// the last handle is dropped.
    ///
    /// Returns a handle for producers and a [`MainLoop`] guard for the
    /// thread. Use this when no existing event loop wants to own the queue.
    ///
    /// # Panics
    ///
    /// Panics if the OS refuses to spawn the thread.
    #[must_use]
    pub fn spawn(config: MainContextConfig) -> (MainHandle, MainLoop) {
        let thread_name = config.thread_name.clone();
        let (ready_tx, ready_rx) = bounded::<MainHandle>(1);

        let join = thread::Builder::new()
            .name(thread_name)
            .spawn(move || {
                let context = Self::bind(config);
                let _ = ready_tx.send(context.handle());
                // Affinity holds by construction: run() executes on the bound thread.
                let _ = context.run();
            })
            .expect("failed to spawn mainprint main-context thread");

        let handle = ready_rx
            .recv()
            .expect("mainprint main-context thread died during startup");

        (handle, MainLoop { join: Some(join) })
    }

    /// Returns a cheap, cloneable handle for posting tasks from any thread.
    #[must_use]
    pub fn handle(&self) -> MainHandle {
        MainHandle {
            thread_id: self.thread_id,
            tx: self.tx.clone(),
            queue_capacity: self.queue_capacity,
        }
    }

    /// Runs every task currently queued, in FIFO order, then returns.
    ///
    /// Returns the number of tasks executed. Never blocks: tasks posted
    /// after the queue is observed empty wait for the next service pass.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::NotMainContext` if the caller is not the
    /// thread this context was bound to.
    pub fn drain(&self) -> Result<usize, DispatchError> {
        self.check_affinity()?;

        let mut executed = 0;
        loop {
            match self.rx.try_recv() {
                Ok(task) => {
                    task();
                    executed += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        Ok(executed)
    }

    /// Services the queue until every [`MainHandle`] has been dropped.
    ///
    /// Consumes the context; this is the event-loop deployment, used by
    /// [`spawn`](Self::spawn) internally.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::NotMainContext` if the caller is not the
    /// thread this context was bound to.
    pub fn run(self) -> Result<(), DispatchError> {
        self.check_affinity()?;

        // Drop our own sender so recv() disconnects once all handles are gone.
        let Self { rx, tx, .. } = self;
        drop(tx);

        for task in &rx {
            task();
        }
        Ok(())
    }

    fn check_affinity(&self) -> Result<(), DispatchError> {
        if thread::current().id() == self.thread_id {
            Ok(())
        } else {
            Err(DispatchError::NotMainContext)
        }
    }
}

/// Producer-side handle to a main context.
///
/// Holds the immutable pieces of state a print strategy needs: the bound
/// thread's identity (for the "am I the main context?" check) and the
/// sending end of the task queue.
#[derive(Debug, Clone)]
pub struct MainHandle {
    thread_id: ThreadId,
    tx: Sender<Task>,
    queue_capacity: usize,
}

impl MainHandle {
    /// Returns true if the calling thread is the bound main context.
    #[must_use]
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    /// Posts a task to run on the main context. Never blocks.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::QueueFull` if the queue is at capacity, or
    /// `DispatchError::Disconnected` if the context has been torn down.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) -> Result<(), DispatchError> {
        match self.tx.try_send(Box::new(task)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(DispatchError::QueueFull {
                capacity: self.queue_capacity,
            }),
            Err(TrySendError::Disconnected(_)) => Err(DispatchError::Disconnected),
        }
    }
}

/// Guard for the dedicated thread created by [`MainContext::spawn`].
#[derive(Debug)]
pub struct MainLoop {
    join: Option<JoinHandle<()>>,
}

impl MainLoop {
    /// Waits for the loop thread to finish.
    ///
    /// The thread exits once every [`MainHandle`] has been dropped; joining
    /// while still holding one deadlocks, so drop handles first.
    pub fn join(mut self) {
        if let Some(handle) = self.join.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MainLoop {
    fn drop(&mut self) {
        // Do not join here.
        //
        // Callers may still hold `MainHandle` clones when the guard drops;
        // the loop thread stays alive until the last one goes away, and a
        // join would deadlock on it. Detaching is safe: the thread exits
        // once the last sender is dropped.
        if let Some(handle) = self.join.take() {
            drop(handle);
        }
    }
}
