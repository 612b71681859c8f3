//! # Board Bring-Up
//!
//! Descriptor-driven, staged initialization of a Samsung S3C24xx board.
//!
//! ## Overview
//!
//! A board is described entirely by static tables plus four stage
//! functions. Each stage reads the tables and hands them to a platform
//! subsystem; nothing is discovered at runtime and no table is ever
//! modified.
//!
//! ```text
//! MachineDesc ──select_machine──► BringUp<Uninitialized>
//!                                    │ map_io        MapDesc[] ► IoMapper
//!                                    │               UartConfig[] ► SerialSubsystem
//!                                    │ init_irq      ► InterruptController
//!                                    │ init_time     xtal ► TimerSubsystem
//!                                    ▼ init_machine  FbMachInfo ► DisplaySubsystem
//!                                 BringUp<MachineReady>   DeviceRegistry ► DeviceSubsystem
//! ```
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`map`] | [`MapDesc`] static I/O mappings |
//! | [`serial`] | [`UartConfig`] per-port UART register values |
//! | [`display`] | [`FbDisplay`] panel timings, [`FbMachInfo`] |
//! | [`resource`] | [`Resource`] MMIO windows and interrupt lines |
//! | [`device`] | [`PlatformDevice`] records |
//! | [`platform_data`] | Typed driver configuration payloads |
//! | [`registry`] | [`DeviceRegistry`] and device list validation |
//! | [`subsystem`] | Collaborator traits, [`Platform`] |
//! | [`stage`] | [`BringUp`] typestate sequencer |
//! | [`machine`] | [`MachineDesc`], [`select_machine`], [`boot_machine`] |
//!
//! ## Table Validation
//!
//! Layout rules (disjoint virtual mappings, disjoint MMIO windows,
//! exclusive interrupt lines, a valid default display) are checked by
//! `const fn`s so board crates can assert them at build time:
//!
//! ```rust
//! use kernel_board::{MapDesc, io_map_is_disjoint};
//! use kernel_memory_addresses::{PhysicalAddress, SZ_64K, VirtualAddress};
//!
//! const TABLE: [MapDesc; 2] = [
//!     MapDesc::device(VirtualAddress::new(0xF800_0000), PhysicalAddress::new(0x1000_0000), SZ_64K),
//!     MapDesc::device(VirtualAddress::new(0xF900_0000), PhysicalAddress::new(0x1000_0000), SZ_64K),
//! ];
//! const _: () = assert!(io_map_is_disjoint(&TABLE));
//! ```
//!
//! ## Features
//!
//! * `recording`: [`recording::RecordingPlatform`], a host implementation of
//!   every subsystem that logs the calls it receives.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]
#![allow(clippy::cast_lossless)]

pub mod device;
pub mod display;
pub mod error;
pub mod gpio;
pub mod machine;
pub mod map;
pub mod platform_data;
pub mod registry;
pub mod resource;
pub mod serial;
pub mod stage;
pub mod subsystem;

#[cfg(feature = "recording")]
pub mod recording;

pub use device::{DeviceId, PlatformData, PlatformDevice};
pub use display::{FbDisplay, FbGpioSetup, FbMachInfo};
pub use error::{
    BootError, EnrollError, GpioError, LayoutError, MapError, SelectError, SerialError,
    StageError,
};
pub use gpio::{GpioBank, GpioConfig, GpioPin};
pub use machine::{BootReport, MachineDesc, boot_machine, select_machine};
pub use map::{MapDesc, MapType, check_io_map, io_map_is_disjoint};
pub use registry::{
    DeviceRegistry, check_devices, check_windows_unmapped, resources_are_disjoint,
};
pub use resource::{IrqLine, IrqTrigger, Resource, ResourceFlags, ResourceKind};
pub use serial::{UartConfig, check_uart_table};
pub use stage::{BoardStages, BringUp, Stage, StageFn, StageTrace};
pub use subsystem::{
    CommonBoardSetup, DeviceSubsystem, DisplaySubsystem, GpioController, InterruptController,
    IoMapper, Platform, PowerManagement, PwmChannel, SerialSubsystem, TimerSubsystem,
};
