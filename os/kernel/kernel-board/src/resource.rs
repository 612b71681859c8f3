//! Device resources: MMIO windows and interrupt lines.

use bitflags::bitflags;
use core::fmt;
use kernel_memory_addresses::{ByteRange, PhysicalAddress};

/// Platform interrupt number, after the SoC's offset is applied.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IrqLine(u16);

impl IrqLine {
    #[inline]
    #[must_use]
    pub const fn new(n: u16) -> Self {
        Self(n)
    }

    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for IrqLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IRQ{}", self.0)
    }
}

impl fmt::Display for IrqLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How an interrupt line signals.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IrqTrigger {
    /// Whatever the controller is already set up for.
    Default,
    EdgeRising,
    EdgeFalling,
    EdgeBoth,
    LevelHigh,
    LevelLow,
}

bitflags! {
    /// Resource flag word as seen by the device subsystem.
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct ResourceFlags: u32 {
        const IRQ_HIGHEDGE = 0x0000_0001;
        const IRQ_LOWEDGE = 0x0000_0002;
        const IRQ_HIGHLEVEL = 0x0000_0004;
        const IRQ_LOWLEVEL = 0x0000_0008;
        const IRQ_SHAREABLE = 0x0000_0010;
        const MEM = 0x0000_0200;
        const IRQ = 0x0000_0400;
    }
}

impl IrqTrigger {
    #[must_use]
    pub const fn flags(self) -> ResourceFlags {
        match self {
            Self::Default => ResourceFlags::empty(),
            Self::EdgeRising => ResourceFlags::IRQ_HIGHEDGE,
            Self::EdgeFalling => ResourceFlags::IRQ_LOWEDGE,
            Self::EdgeBoth => ResourceFlags::IRQ_HIGHEDGE.union(ResourceFlags::IRQ_LOWEDGE),
            Self::LevelHigh => ResourceFlags::IRQ_HIGHLEVEL,
            Self::LevelLow => ResourceFlags::IRQ_LOWLEVEL,
        }
    }
}

/// What a resource describes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResourceKind {
    /// Inclusive MMIO window `start..=end`.
    Mem {
        start: PhysicalAddress,
        end: PhysicalAddress,
    },
    Irq {
        line: IrqLine,
        trigger: IrqTrigger,
        shared: bool,
    },
}

/// One resource of a [`PlatformDevice`](crate::PlatformDevice).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Resource {
    pub name: Option<&'static str>,
    pub kind: ResourceKind,
}

impl Resource {
    /// Unnamed MMIO window of `len` bytes starting at `start`.
    ///
    /// `len` must be non-zero.
    #[must_use]
    pub const fn mem(start: u32, len: u32) -> Self {
        Self {
            name: None,
            kind: ResourceKind::Mem {
                start: PhysicalAddress::new(start),
                end: PhysicalAddress::new(start + (len - 1)),
            },
        }
    }

    /// Unnamed, unshared interrupt with the controller's default trigger.
    #[must_use]
    pub const fn irq(line: IrqLine) -> Self {
        Self {
            name: None,
            kind: ResourceKind::Irq {
                line,
                trigger: IrqTrigger::Default,
                shared: false,
            },
        }
    }

    #[must_use]
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// The resource flag word.
    ///
    /// ```rust
    /// # use kernel_board::{IrqLine, IrqTrigger, Resource, ResourceFlags, ResourceKind};
    /// let irq = Resource {
    ///     name: Some("dm9000_irq"),
    ///     kind: ResourceKind::Irq { line: IrqLine::new(51), trigger: IrqTrigger::LevelHigh, shared: false },
    /// };
    /// assert_eq!(irq.flags().bits(), 0x404);
    /// ```
    #[must_use]
    pub const fn flags(&self) -> ResourceFlags {
        match self.kind {
            ResourceKind::Mem { .. } => ResourceFlags::MEM,
            ResourceKind::Irq {
                trigger, shared, ..
            } => {
                let flags = ResourceFlags::IRQ.union(trigger.flags());
                if shared {
                    flags.union(ResourceFlags::IRQ_SHAREABLE)
                } else {
                    flags
                }
            }
        }
    }

    /// MMIO window as a half-open range, or `None` for interrupts.
    #[must_use]
    pub const fn window(&self) -> Option<ByteRange> {
        match self.kind {
            ResourceKind::Mem { start, end } => {
                Some(ByteRange::inclusive(start.as_u32(), end.as_u32()))
            }
            ResourceKind::Irq { .. } => None,
        }
    }

    /// `start <= end` for windows; always true for interrupts.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        match self.kind {
            ResourceKind::Mem { start, end } => start.as_u32() <= end.as_u32(),
            ResourceKind::Irq { .. } => true,
        }
    }
}
