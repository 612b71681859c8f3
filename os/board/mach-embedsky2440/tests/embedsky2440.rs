use board_s3c24xx::S3C2440_NR_UARTS;
use board_s3c24xx::devs::S3C_DEVICE_WDT;
use board_s3c24xx::irqs::NR_IRQS;
use kernel_board::platform_data::{Dm9000Flags, Dm9000PlatformData};
use kernel_board::recording::{Call, RecordingPlatform};
use kernel_board::{
    BootError, DeviceId, DeviceSubsystem, EnrollError, IrqLine, IrqTrigger, MachineDesc,
    ResourceKind, SelectError, Stage, StageError, boot_machine,
};
use kernel_info::memory::PHYS_OFFSET;
use kernel_memory_addresses::{PhysicalAddress, SZ_4M, SZ_64K, VirtualAddress};
use mach_embedsky2440::tables::{
    EMBEDSKY2440_FB_INFO, EMBEDSKY2440_IODESC, EMBEDSKY2440_UARTCFGS, EMBEDSKY2440_UDC_INFO,
};
use mach_embedsky2440::{EMBEDSKY2440, MACH_TYPE_EMBEDSKY2440, boot, stages};

fn platform() -> RecordingPlatform {
    RecordingPlatform::new(S3C2440_NR_UARTS, NR_IRQS)
}

fn booted() -> RecordingPlatform {
    let mut p = platform();
    let report = boot(MACH_TYPE_EMBEDSKY2440, &mut p).unwrap();
    assert_eq!(report.board, "embedsky2440");
    assert_eq!(report.trace.stages(), Stage::ORDER);
    p
}

#[test]
fn descriptor() {
    assert_eq!(EMBEDSKY2440.name, "embedsky2440");
    assert_eq!(EMBEDSKY2440.atag_offset, 0x100);
    assert!(EMBEDSKY2440.is_complete());
    assert_eq!(
        EMBEDSKY2440.boot_params(PHYS_OFFSET),
        Some(PhysicalAddress::new(0x3000_0100))
    );
}

#[test]
fn subsystem_calls_in_stage_order() {
    let p = booted();
    let calls = p.calls();

    assert!(matches!(calls[0], Call::MapIo(_)));
    assert!(matches!(calls[1], Call::InitUarts(_)));
    assert_eq!(
        calls[2..9],
        [
            Call::SetTimerSource {
                event: kernel_board::PwmChannel::Pwm3,
                source: kernel_board::PwmChannel::Pwm4,
            },
            Call::InitIrq,
            Call::InitClocks(12_000_000),
            Call::TimerInit,
            Call::SetFbPlatdata(&EMBEDSKY2440_FB_INFO),
            Call::SetI2c0Platdata(None),
            Call::SetUdcPlatdata(&EMBEDSKY2440_UDC_INFO),
        ]
    );
    assert_eq!(
        calls[9],
        Call::AddDevices(vec![
            "s3c2410-ohci",
            "s3c2410-lcd",
            "s3c2410-wdt",
            "s3c2440-i2c",
            "s3c24xx-iis",
            "dm9000",
            "s3c2440-usbgadget",
        ])
    );
    // SMDK common setup comes last.
    assert!(matches!(calls[10], Call::ConfigureGpio(..)));
    assert_eq!(calls.last(), Some(&Call::PmInit));
}

#[test]
fn isa_windows_alias_the_same_frames() {
    let p = booted();
    let live = p.mappings();
    assert_eq!(live.len(), 4);

    let lengths: Vec<_> = live.iter().map(|m| m.length).collect();
    assert_eq!(lengths, [SZ_64K, SZ_4M, SZ_64K, SZ_4M]);

    for (i, a) in live.iter().enumerate() {
        for b in &live[i + 1..] {
            assert!(!a.virt_range().overlaps(&b.virt_range()));
        }
    }

    let word = VirtualAddress::new(0xF800_0000);
    let byte = VirtualAddress::new(0xF900_0000);
    assert_eq!(p.translate(word), Some(PhysicalAddress::new(0x1000_0000)));
    assert_eq!(p.translate(word), p.translate(byte));

    let word_ext = word + SZ_64K + 0x20;
    let byte_ext = byte + SZ_64K + 0x20;
    assert_eq!(p.translate(word_ext), Some(PhysicalAddress::new(0x1100_0020)));
    assert_eq!(p.translate(word_ext), p.translate(byte_ext));
    assert_eq!(p.translate(word + SZ_64K + SZ_4M), None);
}

#[test]
fn uart_table() {
    let p = booted();
    let uarts = p.uarts().unwrap();
    assert_eq!(uarts, EMBEDSKY2440_UARTCFGS);
    assert_eq!(uarts.len(), 3);

    for (port, cfg) in uarts.iter().enumerate() {
        assert_eq!(usize::from(cfg.hwport), port);
        assert_eq!(cfg.flags, 0);
        assert_eq!(cfg.ucon.into_bits(), 0x3c5);
        assert_eq!(cfg.ufcon.into_bits(), 0x51);
    }
    assert_eq!(
        (uarts[0].ucon, uarts[0].ulcon, uarts[0].ufcon),
        (uarts[1].ucon, uarts[1].ulcon, uarts[1].ufcon)
    );
    assert_eq!(uarts[0].ulcon.into_bits(), 0x03);
    assert_eq!(uarts[2].ulcon.into_bits(), 0x43);
    assert!(uarts[2].ulcon.infrared());
}

#[test]
fn dm9000_arrives_unmodified() {
    let p = booted();
    let dm9000 = p.device("dm9000").unwrap();
    assert_eq!(dm9000.id, DeviceId::Instance(0));
    assert_eq!(dm9000.resources.len(), 3);

    let names: Vec<_> = dm9000.resources.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        [Some("dm9000_addr"), Some("dm9000_data"), Some("dm9000_irq")]
    );

    let addr = dm9000.resources[0].window().unwrap();
    let data = dm9000.resources[1].window().unwrap();
    assert_eq!((addr.start, addr.end), (0x2000_0000, 0x2000_0004));
    assert_eq!((data.start, data.end), (0x2000_0004, 0x2000_0008));

    assert_eq!(
        dm9000.resources[2].kind,
        ResourceKind::Irq {
            line: IrqLine::new(51),
            trigger: IrqTrigger::LevelHigh,
            shared: false,
        }
    );
    assert_eq!(dm9000.resources[2].flags().bits(), 0x404);

    let prv = dm9000.platform_data::<Dm9000PlatformData>().unwrap();
    assert_eq!(prv.flags, Dm9000Flags::BUS_16BIT_ONLY);
    assert_eq!(prv.flags.bits(), 0x0002);
}

#[test]
fn i2c0_uses_controller_defaults() {
    let p = booted();
    let i2c = p.i2c0().unwrap();
    assert_eq!(i2c.slave_addr, 0x10);
    assert_eq!(i2c.frequency, 100_000);
}

#[test]
fn framebuffer_platform_data() {
    let info = &EMBEDSKY2440_FB_INFO;
    assert_eq!(info.lpcsel, 0xCF0);
    assert!(info.gpio.is_none());

    let lcd = info.default_panel().unwrap();
    assert_eq!(lcd.lcdcon5.into_bits(), 0xB09);
    assert_eq!(lcd.panel.lcdcon1_bits(), 0x60);
    assert_eq!((lcd.xres, lcd.yres, lcd.bpp), (240, 320, 16));
}

#[test]
fn udc_pullup() {
    let pin = EMBEDSKY2440_UDC_INFO.pullup_pin.unwrap();
    assert_eq!(pin.to_string(), "GPC5");
    assert!(EMBEDSKY2440_UDC_INFO.vbus_pin.is_none());
}

#[test]
fn all_devices_enrolled_once() {
    let p = booted();
    assert_eq!(p.devices().len(), 7 + 5);
    assert_eq!(p.devices()[0].name, "s3c2410-ohci");
    assert_eq!(p.devices()[6].name, "s3c2440-usbgadget");
    assert_eq!(p.devices()[7].name, "s3c2440-nand");
}

static NO_INIT_TIME: MachineDesc = MachineDesc {
    init_time: None,
    ..EMBEDSKY2440
};

#[test]
fn descriptor_without_init_time_never_starts() {
    let mut p = platform();
    let err = boot_machine(&[&NO_INIT_TIME], MACH_TYPE_EMBEDSKY2440, &mut p).unwrap_err();
    assert_eq!(
        err,
        BootError::Select(SelectError::MissingStage {
            board: "embedsky2440",
            stage: Stage::InitTime,
        })
    );
    assert!(p.calls().is_empty());
    assert!(p.mappings().is_empty());
}

#[test]
fn foreign_machine_id() {
    let mut p = platform();
    assert!(matches!(
        boot(kernel_info::boot::MachineId::new(362), &mut p),
        Err(BootError::Select(SelectError::UnknownMachine(_)))
    ));
}

#[test]
fn second_boot_on_live_platform_fails_in_map_io() {
    let mut p = booted();
    let err = boot(MACH_TYPE_EMBEDSKY2440, &mut p).unwrap_err();
    assert!(matches!(
        err,
        BootError::Stage {
            stage: Stage::MapIo,
            source: StageError::Map(_),
            ..
        }
    ));
    assert_eq!(p.mappings().len(), EMBEDSKY2440_IODESC.len());
}

#[test]
fn enrollment_failure_halts_in_machine_stage() {
    let mut p = platform();
    p.add_devices(&[&S3C_DEVICE_WDT]).unwrap();

    let err = boot(MACH_TYPE_EMBEDSKY2440, &mut p).unwrap_err();
    assert_eq!(
        err,
        BootError::Stage {
            board: "embedsky2440",
            stage: Stage::InitMachine,
            source: StageError::Enroll(EnrollError::Duplicate {
                name: "s3c2410-wdt",
                id: -1,
            }),
        }
    );

    // Devices ahead of the duplicate stay registered; the SMDK setup never runs.
    let names: Vec<_> = p.devices().iter().map(|d| d.name).collect();
    assert_eq!(names, ["s3c2410-wdt", "s3c2410-ohci", "s3c2410-lcd"]);
    assert_eq!(p.position(|c| *c == Call::PmInit), None);
    assert_eq!(
        p.position(|c| matches!(c, Call::ConfigureGpio(..) | Call::SetNandPlatdata(_))),
        None
    );
    assert!(p.device("s3c2440-nand").is_none());
}

#[test]
fn machine_stage_cannot_enroll_twice() {
    let mut p = booted();
    let devices = p.devices().len();

    assert_eq!(
        stages::init_machine(&mut p),
        Err(StageError::Enroll(EnrollError::Duplicate {
            name: "s3c2410-ohci",
            id: -1,
        }))
    );
    assert_eq!(p.devices().len(), devices);
}
