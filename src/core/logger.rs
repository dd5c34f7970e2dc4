//! Logger core and async delivery worker
//!
//! Records below the panic/fatal tier are formatted at the call site and
//! pushed into a bounded channel drained by one background thread per
//! logger; a full queue blocks the producer, which is the backpressure
//! contract. Panic and fatal records never touch the queue: they are
//! written synchronously before the process terminates or unwinds.

use super::{
    caller::CallSite,
    emitter::Emitter,
    error::{LogError, Result},
    flags::Flags,
    level::Level,
    metrics::Metrics,
};
use crossbeam_channel::{bounded, Sender};
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Capacity of the pending-record queue unless overridden by the builder.
pub const DEFAULT_QUEUE_CAPACITY: usize = 128;

/// How long `Drop` waits for the worker to drain before giving up.
///
/// An explicit [`Logger::flush`] has no timeout; a stalled sink stalls it
/// indefinitely.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Termination strategy invoked by the `fatal` family after the record is
/// written. Defaults to `process::exit`; inject a recording handler in tests.
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

fn default_exit_handler() -> ExitHandler {
    Arc::new(|code| std::process::exit(code))
}

pub struct Logger {
    level: RwLock<Level>,
    flags: Flags,
    emitter: Arc<Emitter>,
    metrics: Arc<Metrics>,
    /// Producer side of the queue; `None` once flushed.
    sender: RwLock<Option<Sender<String>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    exit: ExitHandler,
}

impl Logger {
    /// Create a logger writing to `sink`, with a constant line prefix and
    /// formatting flags. The delivery worker starts immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use linelog::{Flags, Level, Logger};
    ///
    /// let logger = Logger::new(Vec::new(), "app: ", Flags::STD | Flags::SHORT_FILE);
    /// logger.info("server started");
    /// logger.flush().unwrap();
    /// ```
    pub fn new(sink: impl Write + Send + 'static, prefix: impl Into<String>, flags: Flags) -> Self {
        Self::with_parts(
            Box::new(sink),
            prefix.into(),
            flags,
            Level::default(),
            DEFAULT_QUEUE_CAPACITY,
            default_exit_handler(),
        )
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn with_parts(
        sink: Box<dyn Write + Send>,
        prefix: String,
        flags: Flags,
        level: Level,
        capacity: usize,
        exit: ExitHandler,
    ) -> Self {
        let emitter = Arc::new(Emitter::new(sink, prefix, flags));
        let metrics = Arc::new(Metrics::new());
        let (sender, receiver) = bounded::<String>(capacity);

        let worker_emitter = Arc::clone(&emitter);
        let worker_metrics = Arc::clone(&metrics);
        let handle = thread::spawn(move || {
            // Strict FIFO, one line at a time. A failed write is counted and
            // skipped; buffered delivery is at-most-once.
            for line in receiver {
                match worker_emitter.write_line(&line) {
                    Ok(()) => {
                        worker_metrics.record_written();
                    }
                    Err(_) => {
                        worker_metrics.record_write_error();
                        worker_metrics.record_dropped();
                    }
                }
            }
        });

        Self {
            level: RwLock::new(level),
            flags,
            emitter,
            metrics,
            sender: RwLock::new(Some(sender)),
            worker: Mutex::new(Some(handle)),
            exit,
        }
    }

    /// Current threshold.
    pub fn level(&self) -> Level {
        *self.level.read()
    }

    /// Set the threshold. Takes effect for subsequent calls.
    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Delivery counters: written, dropped, sink write errors.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The record pipeline shared by every severity and shape.
    fn dispatch(&self, level: Level, site: CallSite, message: &str, newline: bool) {
        if level == Level::Off {
            return;
        }
        let threshold = *self.level.read();
        if !threshold.admits(level) {
            return;
        }

        let mut line = site.format(self.flags);
        if level != Level::Print {
            line.push('[');
            line.push_str(level.as_str());
            line.push_str("] ");
        }
        line.push_str(message);
        if newline {
            line.push('\n');
        }

        if level.is_terminal() {
            // Synchronous write so the record survives the imminent exit or
            // unwind even when the queue is full or the worker is stalled.
            match self.emitter.write_line(&line) {
                Ok(()) => {
                    self.metrics.record_terminal_write();
                    self.metrics.record_written();
                }
                Err(_) => {
                    self.metrics.record_write_error();
                    self.metrics.record_dropped();
                }
            }
            return;
        }

        let sender = self.sender.read().as_ref().cloned();
        match sender {
            // send blocks while the queue is full: backpressure from a slow
            // sink lands on the producer.
            Some(tx) => match tx.send(line) {
                Ok(()) => {
                    self.metrics.record_enqueued();
                }
                Err(_) => {
                    self.metrics.record_dropped();
                }
            },
            // Enqueue after flush is a counted no-op.
            None => {
                self.metrics.record_dropped();
            }
        }
    }

    /// Emit `message` at `level` with no termination side effect.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>) {
        self.dispatch(level, CallSite::here(), &message.into(), false);
    }

    /// Like [`Logger::log`] with an unconditional trailing newline.
    #[track_caller]
    pub fn logln(&self, level: Level, message: impl Into<String>) {
        self.dispatch(level, CallSite::here(), &message.into(), true);
    }

    /// Emit without a severity tag.
    #[track_caller]
    pub fn print(&self, message: impl Into<String>) {
        self.dispatch(Level::Print, CallSite::here(), &message.into(), false);
    }

    #[track_caller]
    pub fn println(&self, message: impl Into<String>) {
        self.dispatch(Level::Print, CallSite::here(), &message.into(), true);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.dispatch(Level::Debug, CallSite::here(), &message.into(), false);
    }

    #[track_caller]
    pub fn debugln(&self, message: impl Into<String>) {
        self.dispatch(Level::Debug, CallSite::here(), &message.into(), true);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.dispatch(Level::Info, CallSite::here(), &message.into(), false);
    }

    #[track_caller]
    pub fn infoln(&self, message: impl Into<String>) {
        self.dispatch(Level::Info, CallSite::here(), &message.into(), true);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.dispatch(Level::Warn, CallSite::here(), &message.into(), false);
    }

    #[track_caller]
    pub fn warnln(&self, message: impl Into<String>) {
        self.dispatch(Level::Warn, CallSite::here(), &message.into(), true);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.dispatch(Level::Error, CallSite::here(), &message.into(), false);
    }

    #[track_caller]
    pub fn errorln(&self, message: impl Into<String>) {
        self.dispatch(Level::Error, CallSite::here(), &message.into(), true);
    }

    /// Write the record synchronously, then invoke the exit handler with
    /// code 1. Termination happens even when the record is filtered out by
    /// the threshold.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.dispatch(Level::Fatal, CallSite::here(), &message.into(), false);
        (self.exit)(1);
    }

    #[track_caller]
    pub fn fatalln(&self, message: impl Into<String>) {
        self.dispatch(Level::Fatal, CallSite::here(), &message.into(), true);
        (self.exit)(1);
    }

    /// Write the record synchronously, then panic with the message body.
    /// The panic is raised even when the record is filtered out.
    #[track_caller]
    pub fn panic(&self, message: impl Into<String>) -> ! {
        let body = message.into();
        self.dispatch(Level::Panic, CallSite::here(), &body, false);
        panic!("{}", body);
    }

    #[track_caller]
    pub fn panicln(&self, message: impl Into<String>) -> ! {
        let body = message.into();
        self.dispatch(Level::Panic, CallSite::here(), &body, true);
        panic!("{}", body);
    }

    /// Adapter for callers holding a pre-formatted line: routes it through
    /// the line-variant print pipeline and always reports success.
    ///
    /// `call_depth` is accepted for source compatibility with stack-walking
    /// loggers; the call site resolves via `#[track_caller]` instead.
    #[track_caller]
    pub fn output(&self, _call_depth: usize, line: &str) -> Result<()> {
        self.dispatch(Level::Print, CallSite::here(), line, true);
        Ok(())
    }

    /// Close the producer side of the queue and block until the worker has
    /// written every remaining record and exited.
    ///
    /// Callable at most once; a second call fails fast with
    /// [`LogError::AlreadyFlushed`]. Buffered emission after flush is a
    /// counted no-op; terminal records still write synchronously.
    pub fn flush(&self) -> Result<()> {
        let sender = self.sender.write().take();
        if sender.is_none() {
            return Err(LogError::AlreadyFlushed);
        }
        drop(sender);

        if let Some(handle) = self.worker.lock().take() {
            handle.join().map_err(|_| LogError::WorkerPanicked)?;
        }
        Ok(())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Close the channel first so the worker drains and exits.
        drop(self.sender.write().take());

        if let Some(handle) = self.worker.lock().take() {
            let start = std::time::Instant::now();
            while !handle.is_finished() {
                if start.elapsed() >= DEFAULT_SHUTDOWN_TIMEOUT {
                    eprintln!(
                        "[linelog] delivery worker did not drain within {:?}; \
                         some records may be lost",
                        DEFAULT_SHUTDOWN_TIMEOUT
                    );
                    return;
                }
                thread::sleep(Duration::from_millis(10));
            }
            if handle.join().is_err() {
                eprintln!("[linelog] delivery worker panicked during shutdown");
            }
        }

        let dropped = self.metrics.dropped();
        if dropped > 0 {
            eprintln!("[linelog] shutting down with {} dropped records", dropped);
        }
    }
}

/// Fluent construction for [`Logger`].
///
/// # Example
///
/// ```
/// use linelog::{Flags, Level, Logger};
///
/// let logger = Logger::builder()
///     .sink(Vec::new())
///     .prefix("app: ")
///     .flags(Flags::STD | Flags::SHORT_FILE)
///     .level(Level::Info)
///     .capacity(256)
///     .build();
/// logger.info("ready");
/// logger.flush().unwrap();
/// ```
pub struct LoggerBuilder {
    sink: Option<Box<dyn Write + Send>>,
    prefix: String,
    flags: Flags,
    level: Level,
    capacity: usize,
    exit: Option<ExitHandler>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            sink: None,
            prefix: String::new(),
            flags: Flags::STD,
            level: Level::default(),
            capacity: DEFAULT_QUEUE_CAPACITY,
            exit: None,
        }
    }

    /// Destination for finished lines. Defaults to stderr.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Constant prefix written at the start of every line.
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Initial threshold. Defaults to [`Level::Print`] (admit everything).
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Pending-record queue capacity. Producers block when it is full.
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Replace the process-exit strategy used by the `fatal` family.
    #[must_use = "builder methods return a new value"]
    pub fn exit_handler(mut self, handler: ExitHandler) -> Self {
        self.exit = Some(handler);
        self
    }

    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(std::io::stderr()));
        Logger::with_parts(
            sink,
            self.prefix,
            self.flags,
            self.level,
            self.capacity,
            self.exit.unwrap_or_else(default_exit_handler),
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
