//! Caller location capture and formatting
//!
//! Every public emission method on the logger is `#[track_caller]`, so the
//! location captured here is the call site of the facade, not one of its
//! internal frames. Wrapper layers that want to stay transparent annotate
//! themselves with `#[track_caller]` as well.

use super::flags::Flags;
use std::panic::Location;

/// Source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Sentinel used when no location could be resolved.
    pub const UNKNOWN: CallSite = CallSite { file: "???", line: 0 };

    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Capture the location of the caller.
    #[track_caller]
    pub fn here() -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }

    /// Render the location prefix per the file flags.
    ///
    /// `SHORT_FILE` keeps the final path element and overrides `LONG_FILE`;
    /// with neither flag set the prefix is empty. The rendered prefix carries
    /// a trailing space so it can be glued straight onto the record.
    pub fn format(&self, flags: Flags) -> String {
        if !flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
            return String::new();
        }
        let file = if flags.contains(Flags::SHORT_FILE) {
            self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
        } else {
            self.file
        };
        format!("{}:{} ", file, self.line)
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::UNKNOWN
    }
}
