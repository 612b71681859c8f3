use crate::{PAGE_SHIFT, PhysicalAddress};
use core::fmt;

/// Physical page frame number: a [`PhysicalAddress`] shifted right by
/// [`PAGE_SHIFT`].
///
/// I/O mapping descriptors store frames rather than addresses so that the
/// full 32-bit physical space (and LPAE-style extensions) fits in one word.
///
/// ### Examples
/// ```rust
/// # use kernel_memory_addresses::*;
/// let pfn = PageFrameNumber::from_phys(PhysicalAddress::new(0x1100_0000));
/// assert_eq!(pfn.as_u32(), 0x1_1000);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PageFrameNumber(u32);

impl PageFrameNumber {
    #[inline]
    #[must_use]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn from_phys(pa: PhysicalAddress) -> Self {
        pa.pfn()
    }

    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Physical base address of the frame.
    #[inline]
    #[must_use]
    pub const fn base(self) -> PhysicalAddress {
        PhysicalAddress::new(self.0 << PAGE_SHIFT)
    }
}

impl fmt::Debug for PageFrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PFN(0x{:05X})", self.0)
    }
}

impl fmt::Display for PageFrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:05X}", self.0)
    }
}
