//! Process-wide default logger
//!
//! One shared instance, created on first use with default settings (stderr
//! sink, empty prefix, [`Flags::STD`], most verbose threshold). Install a
//! configured instance with [`init`] before any logging call reaches
//! [`logger`]; whoever owns process teardown calls [`flush`].

use crate::core::error::{LogError, Result};
use crate::core::flags::Flags;
use crate::core::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide instance.
///
/// Fails with [`LogError::AlreadyInitialized`] if the global logger was
/// already installed or already used.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL.set(logger).map_err(|_| LogError::AlreadyInitialized)
}

/// The process-wide logger, lazily created with default settings.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::new(std::io::stderr(), "", Flags::STD))
}

/// Drain the process-wide logger. Call once during process teardown.
pub fn flush() -> Result<()> {
    logger().flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // Single test so initialization order stays deterministic in-process.
    #[test]
    fn test_init_logger_flush_lifecycle() {
        let buf = SharedBuf::default();
        let custom = Logger::builder()
            .sink(buf.clone())
            .flags(Flags::NONE)
            .build();
        init(custom).unwrap();

        let second = Logger::builder().sink(Vec::new()).build();
        assert!(matches!(init(second), Err(LogError::AlreadyInitialized)));

        logger().infoln("via global");
        flush().unwrap();
        assert_eq!(
            String::from_utf8(buf.0.lock().clone()).unwrap(),
            "[INFO] via global\n"
        );

        assert!(matches!(flush(), Err(LogError::AlreadyFlushed)));
    }
}
