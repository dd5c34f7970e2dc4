//! # linelog
//!
//! A leveled logging facade in front of a synchronous line-output sink.
//!
//! ## Features
//!
//! - **Leveled filtering**: runtime-adjustable threshold over eight
//!   severities, from `Off` (block everything) to `Print` (untagged,
//!   most verbose)
//! - **Caller tagging**: `file:line` prefixes captured with
//!   `#[track_caller]`, styled by [`Flags`]
//! - **Buffered delivery**: ordinary records go through a bounded queue
//!   drained in FIFO order by one background worker; a full queue blocks
//!   the producer
//! - **Durable fatal path**: panic/fatal records bypass the queue and are
//!   written synchronously before the process exits or unwinds
//!
//! ## Example
//!
//! ```
//! use linelog::{Flags, Level, Logger};
//!
//! let logger = Logger::builder()
//!     .sink(Vec::new())
//!     .prefix("app: ")
//!     .flags(Flags::STD | Flags::SHORT_FILE)
//!     .level(Level::Info)
//!     .build();
//!
//! logger.infoln("server started");
//! logger.debugln("filtered out at Info");
//! logger.flush().unwrap();
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        CallSite, ExitHandler, Flags, Level, LogError, Logger, LoggerBuilder, Metrics, Result,
        DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT, UNKNOWN_LEVEL_NAME,
    };
}

pub use core::{
    CallSite, ExitHandler, Flags, Level, LogError, Logger, LoggerBuilder, Metrics, Result,
    DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT, UNKNOWN_LEVEL_NAME,
};
