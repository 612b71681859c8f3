//! UART0 console for the bring-up stages.

use kernel_earlycon::s3c_uart::uart0_write;
use kernel_earlycon::{ConsoleError, EarlyConLogger, console_registered, register_console};
use log::LevelFilter;

/// Installs the logger, registering UART0 as the early console unless a
/// sink is already in place.
///
/// # Errors
/// A logger was installed before.
pub fn init(max_level: LevelFilter) -> Result<(), ConsoleError> {
    if !console_registered() {
        register_console(uart0_write)?;
    }
    EarlyConLogger::new(max_level).init()
}
