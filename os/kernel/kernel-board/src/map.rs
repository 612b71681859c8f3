//! Static I/O mappings.

use crate::error::LayoutError;
use kernel_memory_addresses::{
    ByteRange, PAGE_SIZE, PageFrameNumber, PhysicalAddress, VirtualAddress,
};

/// Memory type of a static mapping.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MapType {
    /// Strongly ordered, uncached, unbuffered. Used for peripherals.
    Device,
    /// Uncached but write-buffered.
    Uncached,
    /// Normal cacheable memory.
    Memory,
}

/// One fixed virtual-to-physical window set up before the MMU-based
/// allocators exist.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MapDesc {
    pub virt: VirtualAddress,
    pub pfn: PageFrameNumber,
    pub length: u32,
    pub kind: MapType,
}

impl MapDesc {
    #[must_use]
    pub const fn device(virt: VirtualAddress, phys: PhysicalAddress, length: u32) -> Self {
        Self {
            virt,
            pfn: phys.pfn(),
            length,
            kind: MapType::Device,
        }
    }

    /// Virtual range covered by the mapping.
    #[must_use]
    pub const fn virt_range(&self) -> ByteRange {
        ByteRange::new(self.virt.as_u32(), self.length)
    }

    /// Physical range covered by the mapping.
    #[must_use]
    pub const fn phys_range(&self) -> ByteRange {
        ByteRange::new(self.pfn.base().as_u32(), self.length)
    }

    /// Non-empty and page aligned at both ends.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.length != 0
            && self.length.is_multiple_of(PAGE_SIZE)
            && self.virt.as_u32().is_multiple_of(PAGE_SIZE)
    }
}

/// First violation in a mapping table, if any.
///
/// Virtual ranges must be pairwise disjoint; physical ranges may alias.
///
/// # Errors
/// [`LayoutError::BadMapping`] or [`LayoutError::MappingOverlap`].
pub const fn check_io_map(table: &[MapDesc]) -> Result<(), LayoutError> {
    let mut i = 0;
    while i < table.len() {
        if !table[i].is_well_formed() {
            return Err(LayoutError::BadMapping(i));
        }
        let mut j = i + 1;
        while j < table.len() {
            if table[i].virt_range().overlaps(&table[j].virt_range()) {
                return Err(LayoutError::MappingOverlap {
                    first: i,
                    second: j,
                });
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

/// `const` form of [`check_io_map`] for build-time assertions.
#[must_use]
pub const fn io_map_is_disjoint(table: &[MapDesc]) -> bool {
    check_io_map(table).is_ok()
}
