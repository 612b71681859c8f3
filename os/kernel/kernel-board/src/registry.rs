//! The board's ordered device list.

use crate::device::PlatformDevice;
use crate::error::{EnrollError, LayoutError};
use crate::map::MapDesc;
use crate::resource::ResourceKind;
use crate::subsystem::DeviceSubsystem;
use log::{debug, error, info};

/// Devices awaiting enrollment, in declaration order.
///
/// Order matters: bus controllers come before the devices hanging off them.
#[derive(Debug)]
pub struct DeviceRegistry {
    devices: &'static [&'static PlatformDevice],
    enrolled: bool,
}

impl DeviceRegistry {
    #[must_use]
    pub const fn new(devices: &'static [&'static PlatformDevice]) -> Self {
        Self {
            devices,
            enrolled: false,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    #[must_use]
    pub const fn is_enrolled(&self) -> bool {
        self.enrolled
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static PlatformDevice> + '_ {
        self.devices.iter().copied()
    }

    /// First device called `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static PlatformDevice> {
        self.iter().find(|dev| dev.name == name)
    }

    /// Hands the whole list to the device subsystem in one call.
    ///
    /// # Errors
    /// [`EnrollError::AlreadyEnrolled`] on the second call, otherwise
    /// whatever the subsystem rejected. Either way the caller must not
    /// continue booting.
    pub fn enroll_all<D>(&mut self, subsystem: &mut D) -> Result<(), EnrollError>
    where
        D: DeviceSubsystem + ?Sized,
    {
        if self.enrolled {
            return Err(EnrollError::AlreadyEnrolled);
        }
        self.enrolled = true;

        for dev in self.devices {
            debug!(
                "enrolling {} ({} resources)",
                dev.display_name(),
                dev.resources.len()
            );
        }

        subsystem.add_devices(self.devices).inspect_err(|e| {
            error!("device enrollment failed: {e}");
        })?;

        info!("enrolled {} devices", self.devices.len());
        Ok(())
    }
}

/// Checks a device list against the rules the device subsystem enforces:
/// well-formed MMIO windows, no window shared between devices, interrupt
/// lines below `nr_irqs` and only shared with matching trigger.
///
/// # Errors
/// The first violation found, in declaration order.
pub const fn check_devices(
    devices: &[&PlatformDevice],
    nr_irqs: u16,
) -> Result<(), LayoutError> {
    let mut i = 0;
    while i < devices.len() {
        let dev = devices[i];
        let mut r = 0;
        while r < dev.resources.len() {
            let res = &dev.resources[r];
            if !res.is_well_formed() {
                return Err(LayoutError::InvertedWindow {
                    device: dev.name,
                    resource: r,
                });
            }
            if let ResourceKind::Irq { line, .. } = res.kind
                && line.as_u16() >= nr_irqs
            {
                return Err(LayoutError::IrqOutOfRange {
                    device: dev.name,
                    line,
                });
            }
            r += 1;
        }

        let mut j = i + 1;
        while j < devices.len() {
            if let Err(e) = check_pair(dev, devices[j]) {
                return Err(e);
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

/// `const` form of [`check_devices`] for build-time assertions.
#[must_use]
pub const fn resources_are_disjoint(devices: &[&PlatformDevice], nr_irqs: u16) -> bool {
    check_devices(devices, nr_irqs).is_ok()
}

/// Device windows must stay clear of the physical ranges behind the static
/// I/O mappings.
///
/// # Errors
/// [`LayoutError::WindowMapped`] for the first device window inside one.
pub const fn check_windows_unmapped(
    devices: &[&PlatformDevice],
    table: &[MapDesc],
) -> Result<(), LayoutError> {
    let mut i = 0;
    while i < devices.len() {
        let dev = devices[i];
        let mut r = 0;
        while r < dev.resources.len() {
            if let Some(window) = dev.resources[r].window() {
                let mut m = 0;
                while m < table.len() {
                    if window.overlaps(&table[m].phys_range()) {
                        return Err(LayoutError::WindowMapped {
                            device: dev.name,
                            mapping: m,
                        });
                    }
                    m += 1;
                }
            }
            r += 1;
        }
        i += 1;
    }
    Ok(())
}

const fn check_pair(a: &PlatformDevice, b: &PlatformDevice) -> Result<(), LayoutError> {
    let mut x = 0;
    while x < a.resources.len() {
        let mut y = 0;
        while y < b.resources.len() {
            match (a.resources[x].kind, b.resources[y].kind) {
                (ResourceKind::Mem { .. }, ResourceKind::Mem { .. }) => {
                    if let (Some(wa), Some(wb)) =
                        (a.resources[x].window(), b.resources[y].window())
                        && wa.overlaps(&wb)
                    {
                        return Err(LayoutError::WindowOverlap {
                            first: a.name,
                            second: b.name,
                        });
                    }
                }
                (
                    ResourceKind::Irq {
                        line: la,
                        trigger: ta,
                        shared: sa,
                    },
                    ResourceKind::Irq {
                        line: lb,
                        trigger: tb,
                        shared: sb,
                    },
                ) => {
                    if la.as_u16() == lb.as_u16() && !(sa && sb && ta as u8 == tb as u8) {
                        return Err(LayoutError::IrqConflict {
                            first: a.name,
                            second: b.name,
                            line: la,
                        });
                    }
                }
                _ => {}
            }
            y += 1;
        }
        x += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceId;
    use crate::resource::{IrqLine, IrqTrigger, Resource};

    const fn irq(line: u16, trigger: IrqTrigger, shared: bool) -> Resource {
        Resource {
            name: None,
            kind: ResourceKind::Irq {
                line: IrqLine::new(line),
                trigger,
                shared,
            },
        }
    }

    static A: PlatformDevice = PlatformDevice {
        name: "a",
        id: DeviceId::Single,
        resources: &[Resource::mem(0x4900_0000, 0x1000), irq(42, IrqTrigger::Default, false)],
        platform_data: None,
    };
    static B_OVERLAP: PlatformDevice = PlatformDevice {
        name: "b",
        id: DeviceId::Single,
        resources: &[Resource::mem(0x4900_0FFF, 0x10)],
        platform_data: None,
    };
    static B_ADJACENT: PlatformDevice = PlatformDevice {
        name: "b",
        id: DeviceId::Single,
        resources: &[Resource::mem(0x4900_1000, 0x10)],
        platform_data: None,
    };
    static C_SAME_IRQ: PlatformDevice = PlatformDevice {
        name: "c",
        id: DeviceId::Single,
        resources: &[irq(42, IrqTrigger::Default, false)],
        platform_data: None,
    };
    static SHARED_1: PlatformDevice = PlatformDevice {
        name: "s1",
        id: DeviceId::Single,
        resources: &[irq(48, IrqTrigger::LevelLow, true)],
        platform_data: None,
    };
    static SHARED_2: PlatformDevice = PlatformDevice {
        name: "s2",
        id: DeviceId::Single,
        resources: &[irq(48, IrqTrigger::LevelLow, true)],
        platform_data: None,
    };
    static SHARED_EDGE: PlatformDevice = PlatformDevice {
        name: "s3",
        id: DeviceId::Single,
        resources: &[irq(48, IrqTrigger::EdgeFalling, true)],
        platform_data: None,
    };

    #[test]
    fn overlapping_windows() {
        assert_eq!(
            check_devices(&[&A, &B_OVERLAP], 85),
            Err(LayoutError::WindowOverlap {
                first: "a",
                second: "b"
            })
        );
        assert!(resources_are_disjoint(&[&A, &B_ADJACENT], 85));
    }

    #[test]
    fn irq_sharing_rules() {
        assert_eq!(
            check_devices(&[&A, &C_SAME_IRQ], 85),
            Err(LayoutError::IrqConflict {
                first: "a",
                second: "c",
                line: IrqLine::new(42)
            })
        );
        assert!(resources_are_disjoint(&[&SHARED_1, &SHARED_2], 85));
        assert!(!resources_are_disjoint(&[&SHARED_1, &SHARED_EDGE], 85));
    }

    #[test]
    fn irq_range() {
        assert_eq!(
            check_devices(&[&A], 42),
            Err(LayoutError::IrqOutOfRange {
                device: "a",
                line: IrqLine::new(42)
            })
        );
    }

    #[test]
    fn windows_behind_static_mappings() {
        use kernel_memory_addresses::{PhysicalAddress, SZ_64K, VirtualAddress};

        let table = [MapDesc::device(
            VirtualAddress::new(0xF800_0000),
            PhysicalAddress::new(0x4900_0000),
            SZ_64K,
        )];
        assert_eq!(
            check_windows_unmapped(&[&C_SAME_IRQ, &A], &table),
            Err(LayoutError::WindowMapped {
                device: "a",
                mapping: 0
            })
        );
        assert_eq!(check_windows_unmapped(&[&C_SAME_IRQ], &table), Ok(()));
    }

    static LIST: [&PlatformDevice; 2] = [&A, &B_ADJACENT];

    #[test]
    fn lookup() {
        let reg = DeviceRegistry::new(&LIST);
        assert_eq!(reg.len(), 2);
        assert!(!reg.is_enrolled());
        assert_eq!(reg.find("b").map(|d| d.resources.len()), Some(1));
        assert!(reg.find("c").is_none());
        let names: Vec<_> = reg.iter().map(|d| d.name).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
