//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error from the underlying sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Flush was already called on this logger
    #[error("logger already flushed")]
    AlreadyFlushed,

    /// The global logger was already installed
    #[error("global logger already initialized")]
    AlreadyInitialized,

    /// The delivery worker panicked while draining
    #[error("delivery worker panicked")]
    WorkerPanicked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(LogError::AlreadyFlushed.to_string(), "logger already flushed");
        assert_eq!(
            LogError::AlreadyInitialized.to_string(),
            "global logger already initialized"
        );

        let err: LogError = std::io::Error::new(std::io::ErrorKind::Other, "sink down").into();
        assert!(err.to_string().contains("sink down"));
    }
}
