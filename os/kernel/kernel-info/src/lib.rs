//! # Boot Protocol and Memory Layout
//!
//! Shared constants and boot-interface contracts between the bootloader
//! (U-Boot / vivi on the EmbedSky boards) and the board bring-up code.
//!
//! ## Boot Protocol
//!
//! The ARM boot protocol hands control to the kernel with:
//!
//! ```text
//! r0 = 0
//! r1 = machine type code   → matched against `MachineDesc::machine_id`
//! r2 = ATAG list address   → normally PHYS_OFFSET + MachineDesc::atag_offset
//! ```
//!
//! The [`boot`] module types the machine code ([`MachineId`](boot::MachineId))
//! and parses the tagged parameter list ([`AtagList`](boot::AtagList)).
//!
//! ## Memory Layout
//!
//! ```text
//! Physical                              Virtual
//! 0x1000_0000 ┌──────────────┐ nGCS2    0xC000_0000 ┌──────────────┐ PAGE_OFFSET
//!             │  ISA bank    │                      │ linear map   │
//! 0x2000_0000 ├──────────────┤ nGCS4                │ of SDRAM     │
//!             │  DM9000      │          0xF600_0000 ├──────────────┤ S3C_ADDR_BASE
//! 0x3000_0000 ├──────────────┤ nGCS6                │ static I/O   │
//!             │  SDRAM       │                      │ windows      │
//! 0x4800_0000 ├──────────────┤ SFRs                 └──────────────┘
//!             │ peripherals  │
//!             └──────────────┘
//! ```
//!
//! The [`memory`] module holds the corresponding constants.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]

pub mod boot;
pub mod memory;
