//! Polled writer for S3C24xx UART0, usable with the MMU still off.
//!
//! The bootloader leaves UART0 configured (115200 8N1 from PCLK); this
//! writer only waits for the transmit holding register and pushes bytes.

use kernel_registers::MmioRegister;
use kernel_registers::uart::{UTXH, Utrstat};

/// Physical base of UART0.
pub const UART0_PHYS: usize = 0x5000_0000;

/// Console sink for [`register_console`](crate::register_console).
pub fn uart0_write(bytes: &[u8]) {
    for &b in bytes {
        if b == b'\n' {
            putc(b'\r');
        }
        putc(b);
    }
}

fn putc(b: u8) {
    // SAFETY: UART0 is identity-accessible during early boot and the serial
    // driver has not claimed it yet.
    unsafe {
        while !Utrstat::read(UART0_PHYS).tx_buffer_empty() {
            core::hint::spin_loop();
        }
        core::ptr::write_volatile((UART0_PHYS + UTXH) as *mut u8, b);
    }
}
