//! On-chip peripherals that boards enroll as-is.
//!
//! Names are the S3C2440 variants the drivers bind to.

use crate::irqs::{IRQ_IIC, IRQ_LCD, IRQ_USBD, IRQ_USBH, IRQ_WDT};
use crate::map::{
    S3C24XX_SZ_IIC, S3C24XX_SZ_IIS, S3C24XX_SZ_LCD, S3C24XX_SZ_NAND, S3C24XX_SZ_USBDEV,
    S3C24XX_SZ_USBHOST, S3C24XX_SZ_WATCHDOG, S3C2410_PA_IIC, S3C2410_PA_IIS, S3C2410_PA_LCD,
    S3C2410_PA_NAND, S3C2410_PA_USBDEV, S3C2410_PA_USBHOST, S3C2410_PA_WATCHDOG,
};
use kernel_board::{DeviceId, PlatformDevice, Resource};

/// OHCI USB host controller.
pub static S3C_DEVICE_OHCI: PlatformDevice = PlatformDevice {
    name: "s3c2410-ohci",
    id: DeviceId::Single,
    resources: &[
        Resource::mem(S3C2410_PA_USBHOST, S3C24XX_SZ_USBHOST),
        Resource::irq(IRQ_USBH),
    ],
    platform_data: None,
};

/// LCD controller; configured through the framebuffer platform data.
pub static S3C_DEVICE_LCD: PlatformDevice = PlatformDevice {
    name: "s3c2410-lcd",
    id: DeviceId::Single,
    resources: &[
        Resource::mem(S3C2410_PA_LCD, S3C24XX_SZ_LCD),
        Resource::irq(IRQ_LCD),
    ],
    platform_data: None,
};

pub static S3C_DEVICE_WDT: PlatformDevice = PlatformDevice {
    name: "s3c2410-wdt",
    id: DeviceId::Single,
    resources: &[
        Resource::mem(S3C2410_PA_WATCHDOG, S3C24XX_SZ_WATCHDOG),
        Resource::irq(IRQ_WDT),
    ],
    platform_data: None,
};

/// I²C controller 0; configured through the I²C0 platform data setter.
pub static S3C_DEVICE_I2C0: PlatformDevice = PlatformDevice {
    name: "s3c2440-i2c",
    id: DeviceId::Single,
    resources: &[
        Resource::mem(S3C2410_PA_IIC, S3C24XX_SZ_IIC),
        Resource::irq(IRQ_IIC),
    ],
    platform_data: None,
};

/// I²S audio interface. Uses DMA only.
pub static S3C_DEVICE_IIS: PlatformDevice = PlatformDevice {
    name: "s3c24xx-iis",
    id: DeviceId::Single,
    resources: &[Resource::mem(S3C2410_PA_IIS, S3C24XX_SZ_IIS)],
    platform_data: None,
};

/// USB device controller; configured through the UDC platform data setter.
pub static S3C_DEVICE_USBGADGET: PlatformDevice = PlatformDevice {
    name: "s3c2440-usbgadget",
    id: DeviceId::Single,
    resources: &[
        Resource::mem(S3C2410_PA_USBDEV, S3C24XX_SZ_USBDEV),
        Resource::irq(IRQ_USBD),
    ],
    platform_data: None,
};

/// NAND flash controller; configured through the NAND platform data setter.
pub static S3C_DEVICE_NAND: PlatformDevice = PlatformDevice {
    name: "s3c2440-nand",
    id: DeviceId::Single,
    resources: &[Resource::mem(S3C2410_PA_NAND, S3C24XX_SZ_NAND)],
    platform_data: None,
};
