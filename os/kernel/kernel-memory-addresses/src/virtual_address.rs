use core::fmt;
use core::ops::{Add, AddAssign};

/// Virtual memory address.
///
/// Only carries the *kind* of address; no validation is performed. Static
/// I/O windows on the S3C24xx live in the `0xF600_0000..` region above the
/// kernel's linear map.
///
/// ### Examples
/// ```rust
/// # use kernel_memory_addresses::*;
/// let isa_word = VirtualAddress::new(0xF800_0000);
/// assert_eq!((isa_word + SZ_64K).as_u32(), 0xF801_0000);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VirtualAddress(u32);

impl VirtualAddress {
    #[inline]
    #[must_use]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0 as u64
    }

    /// Offsets the address at compile time; usable inside `const` tables
    /// where the `Add` operator is not.
    #[inline]
    #[must_use]
    pub const fn offset(self, by: u32) -> Self {
        Self(self.0.wrapping_add(by))
    }

    #[inline]
    #[must_use]
    pub const fn checked_add(self, rhs: u32) -> Option<Self> {
        match self.0.checked_add(rhs) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Debug for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VA(0x{:08X})", self.0)
    }
}

impl fmt::Display for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl From<u32> for VirtualAddress {
    #[inline]
    fn from(v: u32) -> Self {
        Self::new(v)
    }
}

impl Add<u32> for VirtualAddress {
    type Output = Self;
    #[inline]
    fn add(self, rhs: u32) -> Self::Output {
        self.offset(rhs)
    }
}

impl AddAssign<u32> for VirtualAddress {
    #[inline]
    fn add_assign(&mut self, rhs: u32) {
        self.0 = self.0.wrapping_add(rhs);
    }
}
