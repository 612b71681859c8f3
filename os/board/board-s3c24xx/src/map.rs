//! Physical memory map of the S3C2410/S3C2440 and the fixed virtual
//! windows shared by all S3C24xx boards.

use kernel_info::memory::S3C_ADDR_BASE;
use kernel_memory_addresses::{PhysicalAddress, SZ_1K, SZ_1M, SZ_4K, VirtualAddress};

/// Bank chip selects `nGCS0..nGCS7`, 128 MiB apart.
pub const S3C2410_CS0: PhysicalAddress = PhysicalAddress::new(0x0000_0000);
pub const S3C2410_CS1: PhysicalAddress = PhysicalAddress::new(0x0800_0000);
pub const S3C2410_CS2: PhysicalAddress = PhysicalAddress::new(0x1000_0000);
pub const S3C2410_CS3: PhysicalAddress = PhysicalAddress::new(0x1800_0000);
pub const S3C2410_CS4: PhysicalAddress = PhysicalAddress::new(0x2000_0000);
pub const S3C2410_CS5: PhysicalAddress = PhysicalAddress::new(0x2800_0000);
pub const S3C2410_CS6: PhysicalAddress = PhysicalAddress::new(0x3000_0000);
pub const S3C2410_CS7: PhysicalAddress = PhysicalAddress::new(0x3800_0000);

/// Word-wide view of the ISA-style bus on `nGCS2`.
pub const S3C24XX_VA_ISA_WORD: VirtualAddress = S3C_ADDR_BASE.offset(0x0200_0000);
/// Byte-wide view of the same bus.
pub const S3C24XX_VA_ISA_BYTE: VirtualAddress = S3C_ADDR_BASE.offset(0x0300_0000);

pub const S3C2410_PA_USBHOST: u32 = 0x4900_0000;
pub const S3C2410_PA_LCD: u32 = 0x4D00_0000;
pub const S3C2410_PA_NAND: u32 = 0x4E00_0000;
pub const S3C2410_PA_UART: u32 = 0x5000_0000;
pub const S3C2410_PA_TIMER: u32 = 0x5100_0000;
pub const S3C2410_PA_USBDEV: u32 = 0x5200_0000;
pub const S3C2410_PA_WATCHDOG: u32 = 0x5300_0000;
pub const S3C2410_PA_IIC: u32 = 0x5400_0000;
pub const S3C2410_PA_IIS: u32 = 0x5500_0000;
pub const S3C2410_PA_GPIO: u32 = 0x5600_0000;

pub const S3C24XX_SZ_USBHOST: u32 = SZ_1M;
pub const S3C24XX_SZ_LCD: u32 = SZ_1M;
pub const S3C24XX_SZ_NAND: u32 = SZ_1M;
pub const S3C24XX_SZ_USBDEV: u32 = SZ_1M;
pub const S3C24XX_SZ_WATCHDOG: u32 = SZ_1K;
pub const S3C24XX_SZ_IIC: u32 = SZ_4K;
pub const S3C24XX_SZ_IIS: u32 = SZ_1M;

/// Spacing of the UART register blocks.
pub const S3C2410_UART_STRIDE: u32 = 0x4000;

/// Physical base of UART `port`.
#[must_use]
pub const fn uart_base(port: u8) -> PhysicalAddress {
    PhysicalAddress::new(S3C2410_PA_UART + port as u32 * S3C2410_UART_STRIDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isa_windows() {
        assert_eq!(S3C24XX_VA_ISA_WORD, VirtualAddress::new(0xF800_0000));
        assert_eq!(S3C24XX_VA_ISA_BYTE, VirtualAddress::new(0xF900_0000));
    }

    #[test]
    fn uart_blocks() {
        assert_eq!(uart_base(0), PhysicalAddress::new(0x5000_0000));
        assert_eq!(uart_base(2), PhysicalAddress::new(0x5000_8000));
    }
}
