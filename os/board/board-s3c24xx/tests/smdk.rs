use board_s3c24xx::S3C2440_NR_UARTS;
use board_s3c24xx::irqs::NR_IRQS;
use board_s3c24xx::smdk::{SMDK_COMMON, SMDK_DEVICES, SMDK_NAND_INFO};
use kernel_board::platform_data::{LedFlags, LedPlatformData, PartitionSize};
use kernel_board::recording::{Call, RecordingPlatform};
use kernel_board::{CommonBoardSetup, DeviceId, GpioBank, GpioConfig, GpioPin, check_devices};

#[test]
fn leds_are_preset_before_enrollment() {
    let mut p = RecordingPlatform::new(S3C2440_NR_UARTS, NR_IRQS);
    SMDK_COMMON.apply(&mut p).unwrap();

    for index in 4..8 {
        let pin = GpioPin::new(GpioBank::F, index);
        assert_eq!(p.gpio(pin), Some(GpioConfig::Output { high: true }));
    }

    let first_gpio = p
        .position(|c| matches!(c, Call::ConfigureGpio(..)))
        .unwrap();
    let nand = p
        .position(|c| *c == Call::SetNandPlatdata(&SMDK_NAND_INFO))
        .unwrap();
    let enroll = p
        .position(|c| matches!(c, Call::AddDevices(_)))
        .unwrap();
    let pm = p.position(|c| *c == Call::PmInit).unwrap();
    assert!(first_gpio < nand && nand < enroll && enroll < pm);
}

#[test]
fn led_devices_carry_their_pins() {
    let mut p = RecordingPlatform::new(S3C2440_NR_UARTS, NR_IRQS);
    SMDK_COMMON.apply(&mut p).unwrap();

    let leds: Vec<_> = p
        .devices()
        .iter()
        .filter(|d| d.name == "s3c24xx_led")
        .collect();
    assert_eq!(leds.len(), 4);
    for (n, dev) in leds.iter().enumerate() {
        assert_eq!(dev.id, DeviceId::Instance(u16::try_from(n).unwrap()));
        let data = dev.platform_data::<LedPlatformData>().unwrap();
        assert_eq!(data.gpio, GpioPin::new(GpioBank::F, 4 + u8::try_from(n).unwrap()));
        assert_eq!(data.flags, LedFlags::ACTIVE_LOW | LedFlags::TRISTATE);
    }
    assert_eq!(
        leds[0].platform_data::<LedPlatformData>().unwrap().default_trigger,
        Some("timer")
    );
}

#[test]
fn busy_led_pin_is_not_fatal() {
    let mut p = RecordingPlatform::new(S3C2440_NR_UARTS, NR_IRQS);
    p.reserve_gpio(GpioPin::new(GpioBank::F, 5));
    SMDK_COMMON.apply(&mut p).unwrap();
    assert_eq!(p.gpio(GpioPin::new(GpioBank::F, 5)), None);
    assert_eq!(p.devices().len(), SMDK_DEVICES.len());
}

#[test]
fn nand_timings_and_partitions() {
    assert_eq!(
        (SMDK_NAND_INFO.tacls, SMDK_NAND_INFO.twrph0, SMDK_NAND_INFO.twrph1),
        (20, 60, 20)
    );
    let parts = SMDK_NAND_INFO.sets[0].partitions;
    assert_eq!(parts.len(), 8);
    assert_eq!(parts[0].name, "Boot Agent");
    assert_eq!(parts[7].size, PartitionSize::Remaining);
}

#[test]
fn smdk_devices_do_not_collide() {
    assert_eq!(check_devices(&SMDK_DEVICES, NR_IRQS), Ok(()));
    assert_eq!(SMDK_COMMON.name(), "smdk");
}
