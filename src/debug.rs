//! Opt-in debug logging for the rasterizers.
//!
//! Output goes to stderr and is off by default. Enable it with
//! [`enable`], or by setting `RASTER_DEBUG=1` and calling [`init_from_env`].
//! Logging never affects which pixels are drawn.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Environment variable read by [`init_from_env`].
pub const ENV_VAR: &str = "RASTER_DEBUG";

/// Global debug mode flag.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Start time stored as millis since UNIX epoch (atomic-safe).
static START_TIME_MS: AtomicU64 = AtomicU64::new(0);

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Enables debug mode globally.
pub fn enable() {
    START_TIME_MS.store(now_ms(), Ordering::SeqCst);
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disables debug mode globally.
pub fn disable() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Enables debug mode if `RASTER_DEBUG` is set to `1` or `true`.
///
/// Returns whether debug mode is enabled afterwards.
pub fn init_from_env() -> bool {
    let requested = std::env::var(ENV_VAR)
        .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(false);
    if requested {
        enable();
    }
    is_enabled()
}

/// Returns true if debug mode is enabled.
#[inline]
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

fn elapsed_ms() -> u64 {
    let start = START_TIME_MS.load(Ordering::Relaxed);
    if start == 0 {
        return 0;
    }
    now_ms().saturating_sub(start)
}

/// Debug log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Per-invocation rasterizer detail
    Trace,
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Rejected requests
    Warn,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
        }
    }

    fn color_code(self) -> &'static str {
        match self {
            Level::Trace => "\x1b[90m", // Gray
            Level::Debug => "\x1b[36m", // Cyan
            Level::Info => "\x1b[32m",  // Green
            Level::Warn => "\x1b[33m",  // Yellow
        }
    }
}

/// Formats a log line: `[+0000ms] [LEVEL] [component] message`.
fn format_line(elapsed: u64, level: Level, component: &str, message: &str, color: bool) -> String {
    let (start, reset) = if color { (level.color_code(), "\x1b[0m") } else { ("", "") };
    format!("[+{elapsed:04}ms] {start}[{:5}]{reset} [{component}] {message}", level.as_str())
}

/// Logs a debug message if debug mode is enabled.
pub fn log(level: Level, component: &str, message: &str) {
    if !is_enabled() {
        return;
    }

    let _ = writeln!(io::stderr(), "{}", format_line(elapsed_ms(), level, component, message, true));
}

/// Logs with format arguments.
#[macro_export]
macro_rules! debug_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            $crate::debug::log($level, $component, &format!($($arg)*));
        }
    };
}

/// Convenience macro for trace level.
#[macro_export]
macro_rules! trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Trace, $component, $($arg)*)
    };
}

/// Convenience macro for debug level.
#[macro_export]
macro_rules! debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Debug, $component, $($arg)*)
    };
}

/// Convenience macro for info level.
#[macro_export]
macro_rules! info {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Info, $component, $($arg)*)
    };
}

/// Convenience macro for warn level.
#[macro_export]
macro_rules! warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Warn, $component, $($arg)*)
    };
}

/// RAII guard for timing a scope.
pub struct TimingGuard {
    component: &'static str,
    operation: String,
    start: Instant,
}

impl TimingGuard {
    /// Creates a new timing guard.
    pub fn new(component: &'static str, operation: impl Into<String>) -> Self {
        let operation = operation.into();
        if is_enabled() {
            log(Level::Trace, component, &format!("-> {operation}"));
        }
        Self { component, operation, start: Instant::now() }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        if is_enabled() {
            let elapsed = self.start.elapsed();
            log(
                Level::Trace,
                self.component,
                &format!("<- {} ({:.2}ms)", self.operation, elapsed.as_secs_f64() * 1000.0),
            );
        }
    }
}

/// Creates a timing guard for a scope.
#[macro_export]
macro_rules! time_scope {
    ($component:expr, $operation:expr) => {
        let _guard = $crate::debug::TimingGuard::new($component, $operation);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The flag is process-wide; serialize tests that toggle it.
    static FLAG_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_enable_disable() {
        let _lock = FLAG_LOCK.lock().unwrap();
        disable();
        assert!(!is_enabled());

        enable();
        assert!(is_enabled());

        disable();
        assert!(!is_enabled());
    }

    #[test]
    fn test_level_as_str() {
        assert_eq!(Level::Trace.as_str(), "TRACE");
        assert_eq!(Level::Debug.as_str(), "DEBUG");
        assert_eq!(Level::Info.as_str(), "INFO");
        assert_eq!(Level::Warn.as_str(), "WARN");
    }

    #[test]
    fn test_format_line() {
        let line = format_line(42, Level::Warn, "raster", "zero-length segment", false);
        assert_eq!(line, "[+0042ms] [WARN ] [raster] zero-length segment");
    }

    #[test]
    fn test_macros_and_timing_guard_when_enabled() {
        let _lock = FLAG_LOCK.lock().unwrap();
        enable();
        crate::trace!("test", "trace {}", 1);
        crate::warn!("test", "warn {}", 2);
        {
            crate::time_scope!("test", "scope");
        }
        disable();
    }

    #[test]
    fn test_log_when_disabled_does_nothing() {
        let _lock = FLAG_LOCK.lock().unwrap();
        disable();
        log(Level::Debug, "test", "message");
        assert!(!is_enabled());
    }
}
