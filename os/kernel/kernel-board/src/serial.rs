//! Per-port UART configuration handed to the serial subsystem.

use crate::error::LayoutError;
use kernel_registers::uart::{Ucon, Ufcon, Ulcon};

/// Register values for one on-chip UART.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UartConfig {
    pub hwport: u8,
    pub flags: u32,
    pub ucon: Ucon,
    pub ulcon: Ulcon,
    pub ufcon: Ufcon,
}

/// Ports must be listed in order, numbered from 0 without gaps.
///
/// # Errors
/// [`LayoutError::UartPort`] for the first entry out of place.
pub const fn check_uart_table(table: &[UartConfig]) -> Result<(), LayoutError> {
    let mut i = 0;
    while i < table.len() {
        if table[i].hwport as usize != i {
            return Err(LayoutError::UartPort {
                index: i,
                port: table[i].hwport,
            });
        }
        i += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn port(hwport: u8) -> UartConfig {
        UartConfig {
            hwport,
            flags: 0,
            ucon: Ucon::s3c2440_default(),
            ulcon: Ulcon::cs8_pnone_1stop(),
            ufcon: Ufcon::rx8_tx16(),
        }
    }

    #[test]
    fn contiguous_ports() {
        assert_eq!(check_uart_table(&[port(0), port(1), port(2)]), Ok(()));
        assert_eq!(check_uart_table(&[]), Ok(()));
    }

    #[test]
    fn gap_is_reported() {
        assert_eq!(
            check_uart_table(&[port(0), port(2)]),
            Err(LayoutError::UartPort { index: 1, port: 2 })
        );
    }
}
