//! Core logging types

pub mod caller;
pub mod emitter;
pub mod error;
pub mod flags;
pub mod level;
pub mod logger;
pub mod metrics;

pub use caller::CallSite;
pub use emitter::Emitter;
pub use error::{LogError, Result};
pub use flags::Flags;
pub use level::{Level, UNKNOWN_LEVEL_NAME};
pub use logger::{
    ExitHandler, Logger, LoggerBuilder, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use metrics::Metrics;
