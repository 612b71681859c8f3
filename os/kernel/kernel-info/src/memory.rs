//! # Memory Layout

use kernel_memory_addresses::{PhysicalAddress, SZ_64M, VirtualAddress};

/// Start of SDRAM (bank 6, `nGCS6`).
pub const PHYS_OFFSET: PhysicalAddress = PhysicalAddress::new(0x3000_0000);

/// Installed SDRAM on the EmbedSky 2440 boards.
pub const SDRAM_SIZE: u32 = SZ_64M;

/// Start of the kernel's linear mapping of SDRAM.
pub const PAGE_OFFSET: VirtualAddress = VirtualAddress::new(0xC000_0000);

/// Offset of the kernel image from the start of SDRAM. The 32 KiB below it
/// hold the boot parameters and the initial page tables.
pub const TEXT_OFFSET: u32 = 0x8000;

/// Base of the static I/O window region used for `MT_DEVICE` mappings.
pub const S3C_ADDR_BASE: VirtualAddress = VirtualAddress::new(0xF600_0000);

const _: () = {
    assert!(PHYS_OFFSET.as_u32().is_multiple_of(0x0010_0000));
    assert!(S3C_ADDR_BASE.as_u32() > PAGE_OFFSET.as_u32() + SDRAM_SIZE);
    assert!(TEXT_OFFSET.is_multiple_of(0x1000));
};
