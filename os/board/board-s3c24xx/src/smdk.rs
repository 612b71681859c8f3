//! Setup shared by boards derived from the Samsung SMDK2410/2440 reference
//! design: four status LEDs on GPF4..7 and the NAND flash controller.

use crate::devs::S3C_DEVICE_NAND;
use kernel_board::platform_data::{
    LedFlags, LedPlatformData, MtdPartition, NandEcc, NandPlatformData, NandSet, PartitionSize,
};
use kernel_board::{
    CommonBoardSetup, DeviceId, DeviceRegistry, GpioBank, GpioConfig, GpioPin, Platform,
    PlatformDevice, StageError,
};
use kernel_memory_addresses::{SZ_16K, SZ_1M, SZ_2M, SZ_4M, SZ_8M};
use log::{info, warn};

const LED_FLAGS: LedFlags = LedFlags::ACTIVE_LOW.union(LedFlags::TRISTATE);

pub static SMDK_LED4: LedPlatformData = LedPlatformData {
    name: "led4",
    gpio: GpioPin::new(GpioBank::F, 4),
    flags: LED_FLAGS,
    default_trigger: Some("timer"),
};

pub static SMDK_LED5: LedPlatformData = LedPlatformData {
    name: "led5",
    gpio: GpioPin::new(GpioBank::F, 5),
    flags: LED_FLAGS,
    default_trigger: Some("nand-disk"),
};

pub static SMDK_LED6: LedPlatformData = LedPlatformData {
    name: "led6",
    gpio: GpioPin::new(GpioBank::F, 6),
    flags: LED_FLAGS,
    default_trigger: None,
};

pub static SMDK_LED7: LedPlatformData = LedPlatformData {
    name: "led7",
    gpio: GpioPin::new(GpioBank::F, 7),
    flags: LED_FLAGS,
    default_trigger: None,
};

const fn led_device(index: u16, data: &'static LedPlatformData) -> PlatformDevice {
    PlatformDevice {
        name: "s3c24xx_led",
        id: DeviceId::Instance(index),
        resources: &[],
        platform_data: Some(data),
    }
}

static SMDK_LED_DEVICES: [PlatformDevice; 4] = [
    led_device(0, &SMDK_LED4),
    led_device(1, &SMDK_LED5),
    led_device(2, &SMDK_LED6),
    led_device(3, &SMDK_LED7),
];

static SMDK_NAND_PARTITIONS: [MtdPartition; 8] = [
    MtdPartition {
        name: "Boot Agent",
        offset: 0,
        size: PartitionSize::Bytes(SZ_16K),
    },
    MtdPartition {
        name: "S3C2410 flash partition 1",
        offset: 0,
        size: PartitionSize::Bytes(SZ_2M),
    },
    MtdPartition {
        name: "S3C2410 flash partition 2",
        offset: SZ_4M,
        size: PartitionSize::Bytes(SZ_4M),
    },
    MtdPartition {
        name: "S3C2410 flash partition 3",
        offset: SZ_8M,
        size: PartitionSize::Bytes(SZ_2M),
    },
    MtdPartition {
        name: "S3C2410 flash partition 4",
        offset: SZ_1M * 10,
        size: PartitionSize::Bytes(SZ_4M),
    },
    MtdPartition {
        name: "S3C2410 flash partition 5",
        offset: SZ_1M * 14,
        size: PartitionSize::Bytes(SZ_1M * 10),
    },
    MtdPartition {
        name: "S3C2410 flash partition 6",
        offset: SZ_1M * 24,
        size: PartitionSize::Bytes(SZ_1M * 24),
    },
    MtdPartition {
        name: "S3C2410 flash partition 7",
        offset: SZ_1M * 48,
        size: PartitionSize::Remaining,
    },
];

static SMDK_NAND_SETS: [NandSet; 1] = [NandSet {
    name: "NAND",
    nr_chips: 1,
    partitions: &SMDK_NAND_PARTITIONS,
}];

pub static SMDK_NAND_INFO: NandPlatformData = NandPlatformData {
    tacls: 20,
    twrph0: 60,
    twrph1: 20,
    sets: &SMDK_NAND_SETS,
    ecc: NandEcc::Software,
};

/// Devices the SMDK setup enrolls, in order.
pub static SMDK_DEVICES: [&PlatformDevice; 5] = [
    &S3C_DEVICE_NAND,
    &SMDK_LED_DEVICES[0],
    &SMDK_LED_DEVICES[1],
    &SMDK_LED_DEVICES[2],
    &SMDK_LED_DEVICES[3],
];

/// The SMDK reference-board setup.
#[derive(Debug)]
pub struct SmdkCommon;

pub static SMDK_COMMON: SmdkCommon = SmdkCommon;

impl CommonBoardSetup for SmdkCommon {
    fn name(&self) -> &'static str {
        "smdk"
    }

    fn apply(&self, platform: &mut dyn Platform) -> Result<(), StageError> {
        // LEDs off even if no LED driver binds later. Failures are only
        // reported.
        let leds = SMDK_LED_DEVICES
            .iter()
            .filter_map(PlatformDevice::platform_data::<LedPlatformData>);
        for led in leds {
            if let Err(e) = platform.configure_gpio(led.gpio, GpioConfig::Output { high: true }) {
                warn!("smdk: cannot preset {}: {e}", led.name);
            }
        }

        platform.set_nand_platdata(&SMDK_NAND_INFO);
        DeviceRegistry::new(&SMDK_DEVICES).enroll_all(platform)?;
        platform.pm_init();

        info!("smdk: common setup done");
        Ok(())
    }
}
