//! Line emission to the sink
//!
//! The emitter owns the sink and is the single place bytes leave the crate.
//! It prepends the constant prefix and the date/time header at write time,
//! so buffered records carry the timestamp of when they were drained, not
//! when they were enqueued. Both the worker and the synchronous terminal
//! path funnel through [`Emitter::write_line`]; the sink lock serializes
//! them.

use super::error::Result;
use super::flags::Flags;
use chrono::{DateTime, Local, TimeZone, Utc};
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::io::Write;

pub struct Emitter {
    sink: Mutex<Box<dyn Write + Send>>,
    prefix: String,
    flags: Flags,
}

impl Emitter {
    pub fn new(sink: Box<dyn Write + Send>, prefix: String, flags: Flags) -> Self {
        Self {
            sink: Mutex::new(sink),
            prefix,
            flags,
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Write one formatted record: `prefix` + date/time header + `line`.
    ///
    /// No newline is appended; line-variant calls carry their own.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut out = String::with_capacity(self.prefix.len() + 32 + line.len());
        out.push_str(&self.prefix);
        if self.flags.contains(Flags::UTC) {
            self.push_stamp(&mut out, Utc::now());
        } else {
            self.push_stamp(&mut out, Local::now());
        }
        out.push_str(line);

        let mut sink = self.sink.lock();
        sink.write_all(out.as_bytes())?;
        Ok(())
    }

    fn push_stamp<Tz: TimeZone>(&self, out: &mut String, now: DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        if self.flags.intersects(Flags::DATE) {
            let _ = write!(out, "{} ", now.format("%Y/%m/%d"));
        }
        if self.flags.intersects(Flags::TIME) {
            if self.flags.intersects(Flags::MICROSECONDS) {
                let _ = write!(out, "{} ", now.format("%H:%M:%S%.6f"));
            } else {
                let _ = write!(out, "{} ", now.format("%H:%M:%S"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PlMutex;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<PlMutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn emitter(buf: &SharedBuf, prefix: &str, flags: Flags) -> Emitter {
        Emitter::new(Box::new(buf.clone()), prefix.to_string(), flags)
    }

    #[test]
    fn test_plain_line() {
        let buf = SharedBuf::default();
        emitter(&buf, "", Flags::NONE).write_line("[WARN] disk low").unwrap();
        assert_eq!(buf.contents(), "[WARN] disk low");
    }

    #[test]
    fn test_prefix() {
        let buf = SharedBuf::default();
        emitter(&buf, "app: ", Flags::NONE).write_line("hello").unwrap();
        assert_eq!(buf.contents(), "app: hello");
    }

    #[test]
    fn test_no_trailing_newline_added() {
        let buf = SharedBuf::default();
        let e = emitter(&buf, "", Flags::NONE);
        e.write_line("a").unwrap();
        e.write_line("b\n").unwrap();
        assert_eq!(buf.contents(), "ab\n");
    }

    #[test]
    fn test_date_time_header_shape() {
        let buf = SharedBuf::default();
        emitter(&buf, "", Flags::STD | Flags::UTC).write_line("msg").unwrap();
        let line = buf.contents();
        // "2009/01/23 01:23:23 msg"
        assert_eq!(line.len(), "2009/01/23 01:23:23 ".len() + 3);
        assert_eq!(&line[4..5], "/");
        assert_eq!(&line[7..8], "/");
        assert_eq!(&line[13..14], ":");
        assert_eq!(&line[16..17], ":");
        assert!(line.ends_with(" msg"));
    }

    #[test]
    fn test_microseconds_header_shape() {
        let buf = SharedBuf::default();
        emitter(&buf, "", Flags::TIME | Flags::MICROSECONDS | Flags::UTC)
            .write_line("msg")
            .unwrap();
        let line = buf.contents();
        // "01:23:23.123123 msg"
        assert_eq!(line.len(), "01:23:23.123123 ".len() + 3);
        assert_eq!(&line[8..9], ".");
    }

    #[test]
    fn test_time_only_header() {
        let buf = SharedBuf::default();
        emitter(&buf, "", Flags::TIME).write_line("msg").unwrap();
        let line = buf.contents();
        assert_eq!(line.len(), "01:23:23 ".len() + 3);
        assert!(!line.contains('/'));
    }

    #[test]
    fn test_write_error_surfaces() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "sink down"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let e = Emitter::new(Box::new(FailingSink), String::new(), Flags::NONE);
        assert!(e.write_line("lost").is_err());
    }
}
