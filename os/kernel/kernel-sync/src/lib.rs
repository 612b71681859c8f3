//! # Kernel synchronization primitives
//!
//! Board bring-up runs on the single boot CPU before the scheduler exists,
//! so the only primitive it needs is one-time publication of early globals
//! (the console sink, the selected machine).

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod sync_once_cell;

pub use sync_once_cell::SyncOnceCell;
