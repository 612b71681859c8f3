//! The board's configuration tables.

use board_s3c24xx::devs::{
    S3C_DEVICE_I2C0, S3C_DEVICE_IIS, S3C_DEVICE_LCD, S3C_DEVICE_OHCI, S3C_DEVICE_USBGADGET,
    S3C_DEVICE_WDT,
};
use board_s3c24xx::irqs::IRQ_EINT7;
use board_s3c24xx::map::{S3C24XX_VA_ISA_BYTE, S3C24XX_VA_ISA_WORD, S3C2410_CS2, S3C2410_CS4};
use kernel_board::platform_data::{Dm9000Flags, Dm9000PlatformData, UdcMachInfo};
use kernel_board::{
    DeviceId, FbDisplay, FbMachInfo, GpioBank, GpioPin, IrqTrigger, MapDesc, PlatformDevice,
    Resource, ResourceKind, UartConfig,
};
use kernel_memory_addresses::{PhysicalAddress, SZ_4M, SZ_64K};
use kernel_registers::lcd::{LcdCon5, PanelType};
use kernel_registers::uart::{Ucon, Ufcon, Ulcon};

/// Upper half of the `nGCS2` bank, selected by address line 24.
const ISA_EXT: PhysicalAddress = PhysicalAddress::new(S3C2410_CS2.as_u32() + (1 << 24));

/// ISA I/O space, once as word and once as byte accesses. Both views
/// reach the same physical frames.
pub static EMBEDSKY2440_IODESC: [MapDesc; 4] = [
    MapDesc::device(S3C24XX_VA_ISA_WORD, S3C2410_CS2, SZ_64K),
    MapDesc::device(S3C24XX_VA_ISA_WORD.offset(SZ_64K), ISA_EXT, SZ_4M),
    MapDesc::device(S3C24XX_VA_ISA_BYTE, S3C2410_CS2, SZ_64K),
    MapDesc::device(S3C24XX_VA_ISA_BYTE.offset(SZ_64K), ISA_EXT, SZ_4M),
];

const fn uart(hwport: u8, ulcon: Ulcon) -> UartConfig {
    UartConfig {
        hwport,
        flags: 0,
        ucon: Ucon::s3c2440_default(),
        ulcon,
        ufcon: Ufcon::rx8_tx16(),
    }
}

/// UART0 and UART1 are plain 8N1; UART2 drives the IrDA transceiver.
pub static EMBEDSKY2440_UARTCFGS: [UartConfig; 3] = [
    uart(0, Ulcon::cs8_pnone_1stop()),
    uart(1, Ulcon::cs8_pnone_1stop()),
    uart(2, Ulcon::cs8_pnone_1stop().with_infrared(true)),
];

/// 3.5" 240x320 TFT, RGB565.
pub static EMBEDSKY2440_LCD_CFG: [FbDisplay; 1] = [FbDisplay {
    lcdcon5: LcdCon5::new()
        .with_frm565(true)
        .with_invvline(true)
        .with_invvframe(true)
        .with_pwren(true)
        .with_hwswp(true),
    panel: PanelType::Tft,
    width: 240,
    height: 320,
    // HCLK 60 MHz, divisor 10
    pixclock: 166_667,
    xres: 240,
    yres: 320,
    bpp: 16,
    left_margin: 20,
    right_margin: 8,
    hsync_len: 4,
    upper_margin: 8,
    lower_margin: 7,
    vsync_len: 4,
}];

pub static EMBEDSKY2440_FB_INFO: FbMachInfo = FbMachInfo {
    displays: &EMBEDSKY2440_LCD_CFG,
    default_display: 0,
    // the bootloader sets up GPC/GPD
    gpio: None,
    lpcsel: (0xCE6 & !7) | (1 << 4),
};

pub static DM9000_RESOURCES: [Resource; 3] = [
    Resource::mem(S3C2410_CS4.as_u32(), 4).named("dm9000_addr"),
    Resource::mem(S3C2410_CS4.as_u32() + 4, 4).named("dm9000_data"),
    Resource {
        name: Some("dm9000_irq"),
        kind: ResourceKind::Irq {
            line: IRQ_EINT7,
            trigger: IrqTrigger::LevelHigh,
            shared: false,
        },
    },
];

pub static DM9000_PRVDATA: Dm9000PlatformData = Dm9000PlatformData {
    flags: Dm9000Flags::BUS_16BIT_ONLY,
    dev_addr: [0; 6],
};

pub static S3C_DEVICE_DM9000: PlatformDevice = PlatformDevice {
    name: "dm9000",
    id: DeviceId::Instance(0),
    resources: &DM9000_RESOURCES,
    platform_data: Some(&DM9000_PRVDATA),
};

/// D+ pull-up on GPC5; VBUS is not sensed.
pub static EMBEDSKY2440_UDC_INFO: UdcMachInfo = UdcMachInfo {
    pullup_pin: Some(GpioPin::new(GpioBank::C, 5)),
    pullup_pin_inverted: false,
    vbus_pin: None,
    vbus_pin_inverted: false,
};

/// Enrolled in this order by the machine stage.
pub static EMBEDSKY2440_DEVICES: [&PlatformDevice; 7] = [
    &S3C_DEVICE_OHCI,
    &S3C_DEVICE_LCD,
    &S3C_DEVICE_WDT,
    &S3C_DEVICE_I2C0,
    &S3C_DEVICE_IIS,
    &S3C_DEVICE_DM9000,
    &S3C_DEVICE_USBGADGET,
];
