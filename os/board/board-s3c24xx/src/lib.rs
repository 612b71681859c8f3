//! # S3C24xx SoC Support
//!
//! Data shared by every S3C2410/S3C2440 board: the physical memory map,
//! interrupt numbering, the standard on-chip device records and the common
//! setup of SMDK-derived boards.
//!
//! Board crates build their tables from these items and pass
//! [`SMDK_COMMON`](smdk::SMDK_COMMON) as the last step of their machine
//! stage.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]
#![allow(clippy::cast_lossless)]

pub mod devs;
pub mod irqs;
pub mod map;
pub mod smdk;

/// UARTs on the S3C2440.
pub const S3C2440_NR_UARTS: u8 = 3;
