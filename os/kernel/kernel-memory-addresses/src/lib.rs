//! # Physical and Virtual Address Types (32-bit ARM)
//!
//! Strongly typed wrappers for the raw addresses that appear in board
//! descriptor tables: I/O mappings, peripheral resource windows and boot
//! parameter locations.
//!
//! ## Overview
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PhysicalAddress`] | A bus/physical address (SDRAM, chip selects, SoC MMIO). |
//! | [`VirtualAddress`] | A kernel virtual address, after the MMU translates it. |
//! | [`PageFrameNumber`] | A physical address shifted down by [`PAGE_SHIFT`]. |
//!
//! All three are `#[repr(transparent)]` around `u32` and every conversion is
//! a `const fn`, so board tables can be written as plain `const`/`static`
//! items and checked at compile time.
//!
//! ## Typical Usage
//!
//! ```rust
//! # use kernel_memory_addresses::*;
//! let cs2 = PhysicalAddress::new(0x1000_0000);
//! let pfn = cs2.pfn();
//! assert_eq!(pfn.as_u32(), 0x1_0000);
//! assert_eq!(pfn.base(), cs2);
//!
//! let va = VirtualAddress::new(0xF800_0000) + SZ_64K;
//! assert_eq!(va.as_u32(), 0xF801_0000);
//! ```
//!
//! ## Design Notes
//!
//! - The ARMv4T MMU uses 4 KiB small pages; frame numbers always refer to
//!   4 KiB frames regardless of the section size the mapper ends up using.
//! - Arithmetic on addresses wraps like the hardware does; use the
//!   `checked_*` helpers where an overflow would indicate a table error.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]
#![allow(clippy::cast_lossless)]

mod page_frame;
mod physical_address;
mod virtual_address;

pub use page_frame::PageFrameNumber;
pub use physical_address::PhysicalAddress;
pub use virtual_address::VirtualAddress;

/// log2 of the small page size.
pub const PAGE_SHIFT: u32 = 12;

/// Small page size in bytes.
pub const PAGE_SIZE: u32 = 1 << PAGE_SHIFT;

pub const SZ_1K: u32 = 0x0000_0400;
pub const SZ_4K: u32 = 0x0000_1000;
pub const SZ_16K: u32 = 0x0000_4000;
pub const SZ_64K: u32 = 0x0001_0000;
pub const SZ_1M: u32 = 0x0010_0000;
pub const SZ_2M: u32 = 0x0020_0000;
pub const SZ_4M: u32 = 0x0040_0000;
pub const SZ_8M: u32 = 0x0080_0000;
pub const SZ_16M: u32 = 0x0100_0000;
pub const SZ_64M: u32 = 0x0400_0000;

/// Half-open byte range `[start, start + len)` evaluated in 64-bit space so
/// ranges ending exactly at 4 GiB do not wrap.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    #[inline]
    #[must_use]
    pub const fn new(start: u32, len: u32) -> Self {
        Self {
            start: start as u64,
            end: start as u64 + len as u64,
        }
    }

    /// Builds a range from an inclusive `[first, last]` pair, the way
    /// resource windows are written.
    #[inline]
    #[must_use]
    pub const fn inclusive(first: u32, last: u32) -> Self {
        Self {
            start: first as u64,
            end: last as u64 + 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// `true` if both ranges share at least one byte.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, addr: u64) -> bool {
        self.start <= addr && addr < self.end
    }
}
