//! # Early Console and Logging
//!
//! Logging for the bring-up stages, before any serial driver is bound.
//!
//! ## Overview
//!
//! Board bring-up runs long before the serial subsystem has claimed a UART,
//! yet every stage wants to report what it hands to which subsystem. This
//! crate provides:
//!
//! * a registered **console sink**: a plain `fn(&[u8])` installed once via
//!   [`register_console`]; on hardware this is the polled UART0 writer in
//!   [`s3c_uart`], on the host a test capture,
//! * [`early_trace!`], a `format_args!`-based macro writing straight to the
//!   sink without allocation,
//! * [`EarlyConLogger`], a `log::Log` backend that formats records as
//!   `"[LEVEL] target: message\n"` through the same sink.
//!
//! ```text
//! info!(...) ──► EarlyConLogger ─┐
//!                                ├─► ConsoleSink (fmt::Write) ──► registered fn(&[u8])
//! early_trace!(...) ─────────────┘
//! ```
//!
//! ## Feature System
//!
//! * `enabled` (default): output is forwarded to the registered sink.
//! * without `enabled`: all output becomes a no-op; registration still
//!   succeeds so board code does not need to care.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kernel_earlycon::{EarlyConLogger, register_console};
//! use log::{LevelFilter, info};
//!
//! fn host_console(bytes: &[u8]) {
//!     print!("{}", String::from_utf8_lossy(bytes));
//! }
//!
//! register_console(host_console).expect("console registration");
//! EarlyConLogger::new(LevelFilter::Debug).init().expect("logger initialization");
//! info!("map_io: 4 static mappings");
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod logger;

#[cfg(target_arch = "arm")]
pub mod s3c_uart;

pub use logger::EarlyConLogger;

use kernel_sync::SyncOnceCell;

/// Raw console writer. Must not allocate and must tolerate being called
/// with interrupts off.
pub type ConsoleWriteFn = fn(&[u8]);

static CONSOLE: SyncOnceCell<ConsoleWriteFn> = SyncOnceCell::new();

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ConsoleError {
    #[error("an early console is already registered")]
    AlreadyRegistered,
    #[error("a global logger is already installed")]
    LoggerAlreadySet,
}

/// Install the console sink. Only the first registration wins.
///
/// # Errors
/// [`ConsoleError::AlreadyRegistered`] on any later call.
pub fn register_console(write: ConsoleWriteFn) -> Result<(), ConsoleError> {
    CONSOLE
        .set(write)
        .map_err(|_| ConsoleError::AlreadyRegistered)
}

/// `true` once a sink is installed.
pub fn console_registered() -> bool {
    CONSOLE.is_initialized()
}

#[cfg(feature = "enabled")]
#[doc(hidden)]
pub mod earlycon_fmt {
    use core::fmt::{self, Write};

    /// `fmt::Write` adapter over the registered console. Drops output while
    /// no console is registered.
    pub struct ConsoleSink;

    impl Write for ConsoleSink {
        #[inline]
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if let Some(write) = super::CONSOLE.get() {
                write(s.as_bytes());
            }
            Ok(())
        }
    }

    #[doc(hidden)]
    #[inline]
    pub fn earlycon_write(args: fmt::Arguments) {
        // Ignore errors; this is best-effort debug output.
        let _ = fmt::write(&mut ConsoleSink, args);
    }
}

#[cfg(not(feature = "enabled"))]
#[doc(hidden)]
pub mod earlycon_fmt {
    use core::fmt;

    #[doc(hidden)]
    #[inline(always)]
    pub fn earlycon_write(_: fmt::Arguments) {
        // no-op when feature disabled
    }
}

/// Write formatted output straight to the early console.
#[macro_export]
macro_rules! early_trace {
    ($($arg:tt)*) => {{
        $crate::earlycon_fmt::earlycon_write(core::format_args!($($arg)*));
    }};
}
