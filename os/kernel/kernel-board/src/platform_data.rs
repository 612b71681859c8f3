//! Driver-specific configuration records attached to devices.
//!
//! These are the typed payloads drivers receive either through a device's
//! [`platform_data`](crate::PlatformDevice::platform_data) or through one of
//! the singleton setters on [`DeviceSubsystem`](crate::DeviceSubsystem).

use crate::gpio::GpioPin;
use bitflags::bitflags;

/// S3C24xx I²C controller setup.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct I2cPlatformData {
    pub flags: u32,
    /// Own address when addressed as a slave (7-bit).
    pub slave_addr: u8,
    /// Maximum bus frequency in Hz.
    pub frequency: u32,
    /// SDA hold delay in ns.
    pub sda_delay: u32,
}

impl I2cPlatformData {
    /// What the controller uses when the board passes no data.
    pub const DEFAULT: Self = Self {
        flags: 0,
        slave_addr: 0x10,
        frequency: 100_000,
        sda_delay: 100,
    };

    /// Board data if given, otherwise [`Self::DEFAULT`].
    #[must_use]
    pub fn resolve(data: Option<&Self>) -> Self {
        data.copied().unwrap_or(Self::DEFAULT)
    }
}

/// S3C24xx USB device controller setup.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UdcMachInfo {
    /// Pin switching the D+ pull-up that signals attachment to the host.
    pub pullup_pin: Option<GpioPin>,
    pub pullup_pin_inverted: bool,
    /// Pin sensing VBUS; `None` means the device assumes it is powered.
    pub vbus_pin: Option<GpioPin>,
    pub vbus_pin_inverted: bool,
}

bitflags! {
    /// DM9000 bus and PHY options.
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct Dm9000Flags: u32 {
        const BUS_8BIT_ONLY = 0x0001;
        const BUS_16BIT_ONLY = 0x0002;
        const BUS_32BIT_ONLY = 0x0004;
        const EXTERNAL_PHY = 0x0008;
        const NO_EEPROM = 0x0010;
        const SIMPLE_PHY = 0x0020;
    }
}

/// DM9000 Ethernet controller setup.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dm9000PlatformData {
    pub flags: Dm9000Flags,
    /// MAC address; all zero means "read it from the EEPROM".
    pub dev_addr: [u8; 6],
}

bitflags! {
    /// GPIO LED options.
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct LedFlags: u32 {
        /// The LED lights when the pin is driven low.
        const ACTIVE_LOW = 0x0001;
        /// Switch the pin to input instead of driving it when off.
        const TRISTATE = 0x0002;
    }
}

/// One GPIO driven LED.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LedPlatformData {
    pub name: &'static str,
    pub gpio: GpioPin,
    pub flags: LedFlags,
    pub default_trigger: Option<&'static str>,
}

/// Size of an MTD partition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PartitionSize {
    Bytes(u32),
    /// Everything from the offset to the end of the chip.
    Remaining,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MtdPartition {
    pub name: &'static str,
    pub offset: u32,
    pub size: PartitionSize,
}

/// Chips sharing one partition table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NandSet {
    pub name: &'static str,
    pub nr_chips: u8,
    pub partitions: &'static [MtdPartition],
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NandEcc {
    Software,
    Hardware,
}

/// S3C24xx NAND controller setup. Timings are in ns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NandPlatformData {
    pub tacls: u8,
    pub twrph0: u8,
    pub twrph1: u8,
    pub sets: &'static [NandSet],
    pub ecc: NandEcc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_i2c_data_resolves_to_defaults() {
        let resolved = I2cPlatformData::resolve(None);
        assert_eq!(resolved.slave_addr, 0x10);
        assert_eq!(resolved.frequency, 100_000);
        assert_eq!(resolved.sda_delay, 100);
        assert_eq!(resolved.flags, 0);
    }

    #[test]
    fn board_i2c_data_wins() {
        let fast = I2cPlatformData {
            frequency: 400_000,
            ..I2cPlatformData::DEFAULT
        };
        assert_eq!(I2cPlatformData::resolve(Some(&fast)).frequency, 400_000);
    }
}
