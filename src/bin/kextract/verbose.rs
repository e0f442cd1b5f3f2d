//! Verbose diagnostics for the command line.
//!
//! Diagnostics go to stderr so they never mix with the formatted output on
//! stdout. They are off unless `-v` is given.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Global verbosity flag, set once at startup.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn init(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Returns `true` if verbose mode is active.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print a diagnostic to stderr only when verbose mode is enabled.
///
/// ```ignore
/// vprintln!("read {} bytes", source.len());
/// ```
macro_rules! vprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use vprintln;

/// RAII timer that reports elapsed duration on drop when verbose mode is active.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if is_verbose() {
            eprintln!("  {}: {:.1?}", self.label, self.start.elapsed());
        }
    }
}
