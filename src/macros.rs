//! Logging macros for the three message shapes.
//!
//! Per severity there are three shapes, mirroring the method families on
//! [`Logger`](crate::Logger):
//!
//! - `info!(logger, a, b, c)` — space-joins the `Display` rendering of each
//!   argument.
//! - `infof!(logger, "fmt {}", x)` — `format!`-style substitution.
//! - `infoln!(logger, a, b)` — like the joined shape, with an unconditional
//!   trailing newline.
//!
//! The `print` and `panic` joined shapes stay methods (`Logger::print`,
//! `Logger::panic`) to avoid shadowing the std prelude macros of the same
//! names; their format shapes are `printf!` and `panicf!`.
//!
//! # Examples
//!
//! ```
//! use linelog::{Flags, Logger};
//! use linelog::{info, warnf};
//!
//! let logger = Logger::builder().sink(Vec::new()).flags(Flags::NONE).build();
//!
//! info!(logger, "server started");
//! info!(logger, "disk", "low");
//! warnf!(logger, "retry {} of {}", 3, 5);
//! logger.flush().unwrap();
//! ```

/// Log at an explicit level with `format!`-style arguments.
///
/// ```
/// # use linelog::{Flags, Level, Logger};
/// # let logger = Logger::builder().sink(Vec::new()).flags(Flags::NONE).build();
/// use linelog::log;
/// log!(logger, Level::Info, "simple message");
/// log!(logger, Level::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Like [`log!`] with an unconditional trailing newline.
#[macro_export]
macro_rules! logln {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logln($level, format!($($arg)+))
    };
}

/// Space-joined arguments at debug severity.
///
/// ```
/// # use linelog::{Flags, Logger};
/// # let logger = Logger::builder().sink(Vec::new()).flags(Flags::NONE).build();
/// use linelog::debug;
/// debug!(logger, "cache", "miss", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// Space-joined arguments at info severity.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// Space-joined arguments at warn severity.
///
/// ```
/// # use linelog::{Flags, Logger};
/// # let logger = Logger::builder().sink(Vec::new()).flags(Flags::NONE).build();
/// use linelog::warn;
/// warn!(logger, "disk", "low");
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// Space-joined arguments at error severity.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// Space-joined arguments at fatal severity. Writes synchronously, then
/// invokes the logger's exit handler.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.fatal([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// Debug severity with a trailing newline.
#[macro_export]
macro_rules! debugln {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debugln([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// Info severity with a trailing newline.
#[macro_export]
macro_rules! infoln {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.infoln([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// Warn severity with a trailing newline.
#[macro_export]
macro_rules! warnln {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warnln([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// Error severity with a trailing newline.
#[macro_export]
macro_rules! errorln {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.errorln([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// Fatal severity with a trailing newline, then the exit handler.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.fatalln([$(::std::string::ToString::to_string(&$arg)),+].join(" "))
    };
}

/// `format!`-style message without a severity tag.
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.print(format!($($arg)+))
    };
}

/// `format!`-style message at debug severity.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format!($($arg)+))
    };
}

/// `format!`-style message at info severity.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
}

/// `format!`-style message at warn severity.
///
/// ```
/// # use linelog::{Flags, Logger};
/// # let logger = Logger::builder().sink(Vec::new()).flags(Flags::NONE).build();
/// use linelog::warnf;
/// warnf!(logger, "retry {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format!($($arg)+))
    };
}

/// `format!`-style message at error severity.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+))
    };
}

/// `format!`-style message at fatal severity, then the exit handler.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}

/// `format!`-style message at panic severity, then `panic!` with the body.
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic(format!($($arg)+))
    };
}
