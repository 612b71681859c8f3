//! # EmbedSky 2440
//!
//! Board support for the EmbedSky TQ2440/SKY2440 family: an S3C2440 with
//! 64 MiB SDRAM, a DM9000 Ethernet controller on `nGCS4`, a 240x320 TFT and
//! the SMDK-style LEDs and NAND flash.
//!
//! The crate is nothing but tables and four short stage functions; all of
//! it is reachable through [`EMBEDSKY2440`], the board descriptor the boot
//! selector matches against [`MACH_TYPE_EMBEDSKY2440`].
//!
//! ```text
//! map_io        4 ISA windows, 3 UARTs, PWM3/PWM4 timer
//! init_irq      S3C2440 interrupt controller
//! init_time     12 MHz crystal, Samsung PWM timer
//! init_machine  fb, i2c0 (defaults), udc, 7 devices, SMDK common setup
//! ```
//!
//! ## Features
//!
//! * `earlycon`: on ARM targets, [`console::init`] routes `log` output to
//!   the polled UART0 writer before the first stage runs.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]

pub mod stages;
pub mod tables;

#[cfg(all(feature = "earlycon", target_arch = "arm"))]
pub mod console;

use board_s3c24xx::irqs::{NR_IRQS, s3c2440_init_irq};
use board_s3c24xx::smdk::SMDK_DEVICES;
use kernel_board::{
    BootError, BootReport, MachineDesc, Platform, PlatformDevice, boot_machine, check_uart_table,
    check_windows_unmapped, io_map_is_disjoint, resources_are_disjoint,
};
use kernel_info::boot::MachineId;
use tables::{
    EMBEDSKY2440_DEVICES, EMBEDSKY2440_FB_INFO, EMBEDSKY2440_IODESC, EMBEDSKY2440_UARTCFGS,
};

/// Machine type code the bootloader passes for this board.
pub const MACH_TYPE_EMBEDSKY2440: MachineId = MachineId::new(3520);

pub static EMBEDSKY2440: MachineDesc = MachineDesc {
    name: "embedsky2440",
    machine_id: MACH_TYPE_EMBEDSKY2440,
    atag_offset: 0x100,
    map_io: Some(stages::map_io),
    init_irq: Some(s3c2440_init_irq),
    init_time: Some(stages::init_time),
    init_machine: Some(stages::init_machine),
};

/// Boards this image can boot.
pub static MACHINES: [&MachineDesc; 1] = [&EMBEDSKY2440];

/// Every device the board ends up enrolling, its own list first.
static ALL_DEVICES: [&PlatformDevice; 12] = {
    let mut all = [EMBEDSKY2440_DEVICES[0]; 12];
    let mut i = 0;
    while i < EMBEDSKY2440_DEVICES.len() {
        all[i] = EMBEDSKY2440_DEVICES[i];
        i += 1;
    }
    let mut j = 0;
    while j < SMDK_DEVICES.len() {
        all[i + j] = SMDK_DEVICES[j];
        j += 1;
    }
    all
};

const _: () = {
    assert!(io_map_is_disjoint(&EMBEDSKY2440_IODESC));
    assert!(check_uart_table(&EMBEDSKY2440_UARTCFGS).is_ok());
    assert!(EMBEDSKY2440_FB_INFO.default_is_valid());
    assert!(resources_are_disjoint(&ALL_DEVICES, NR_IRQS));
    assert!(check_windows_unmapped(&ALL_DEVICES, &EMBEDSKY2440_IODESC).is_ok());
    assert!(EMBEDSKY2440.is_complete());
};

/// Brings up the board the bootloader reported in `machine_id`.
///
/// # Errors
/// Unknown machine id or the first failing stage. The caller must halt.
pub fn boot(machine_id: MachineId, platform: &mut dyn Platform) -> Result<BootReport, BootError> {
    boot_machine(&MACHINES, machine_id, platform)
}
