//! # Typed S3C24xx Peripheral Registers
//!
//! `bitfield-struct` models of the UART and LCD controller registers whose
//! raw values appear in board descriptor tables. Building table entries from
//! named fields keeps the magic numbers (`0x3c5`, `0x43`, ...) reviewable
//! while still producing the exact bit patterns the drivers expect.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

/// A 32-bit memory-mapped register at a fixed offset from its block base.
pub trait MmioRegister: Sized {
    /// Byte offset from the peripheral block base.
    const OFFSET: usize;

    fn from_raw(raw: u32) -> Self;

    fn into_raw(self) -> u32;

    /// Read the register of the block at `base`.
    ///
    /// # Safety
    /// `base` must be the address of the mapped (or, with the MMU off,
    /// physical) register block this register belongs to.
    #[inline]
    unsafe fn read(base: usize) -> Self {
        let ptr = (base + Self::OFFSET) as *const u32;
        Self::from_raw(unsafe { core::ptr::read_volatile(ptr) })
    }

    /// Write the register of the block at `base`.
    ///
    /// # Safety
    /// Same as [`read`](Self::read); additionally the write must not race
    /// with the driver owning the block.
    #[inline]
    unsafe fn write(self, base: usize) {
        let ptr = (base + Self::OFFSET) as *mut u32;
        unsafe { core::ptr::write_volatile(ptr, self.into_raw()) }
    }
}

/// Implements [`MmioRegister`] for a `#[bitfield(u32)]` type.
macro_rules! mmio_register {
    ($ty:ty, $offset:expr) => {
        impl $crate::MmioRegister for $ty {
            const OFFSET: usize = $offset;

            #[inline]
            fn from_raw(raw: u32) -> Self {
                Self::from_bits(raw)
            }

            #[inline]
            fn into_raw(self) -> u32 {
                self.into_bits()
            }
        }
    };
}

#[cfg(feature = "lcd")]
pub mod lcd;

#[cfg(feature = "uart")]
pub mod uart;
