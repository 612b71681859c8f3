use crate::gpio::GpioPin;
use crate::resource::IrqLine;
use crate::stage::Stage;
use kernel_info::boot::MachineId;
use kernel_memory_addresses::{PhysicalAddress, VirtualAddress};

/// A descriptor table that violates its own layout rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("I/O mappings {first} and {second} overlap in virtual space")]
    MappingOverlap { first: usize, second: usize },
    #[error("I/O mapping {0} is empty or not page aligned")]
    BadMapping(usize),
    #[error("UART entry {index} describes port {port}, expected port {index}")]
    UartPort { index: usize, port: u8 },
    #[error("device {device} resource {resource} ends before it starts")]
    InvertedWindow { device: &'static str, resource: usize },
    #[error("MMIO windows of {first} and {second} overlap")]
    WindowOverlap {
        first: &'static str,
        second: &'static str,
    },
    #[error("{first} and {second} both claim IRQ {line} without sharing it")]
    IrqConflict {
        first: &'static str,
        second: &'static str,
        line: IrqLine,
    },
    #[error("device {device} uses IRQ {line}, which the platform does not have")]
    IrqOutOfRange { device: &'static str, line: IrqLine },
    #[error("MMIO window of {device} lies behind static I/O mapping {mapping}")]
    WindowMapped { device: &'static str, mapping: usize },
    #[error("default display {default} out of range for {count} display(s)")]
    DefaultDisplay { default: usize, count: usize },
}

/// Mapping subsystem rejections.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("mapping at {virt} is empty or not page aligned")]
    Misaligned { virt: VirtualAddress },
    #[error("mapping at {virt} overlaps the live mapping at {existing}")]
    Overlap {
        virt: VirtualAddress,
        existing: VirtualAddress,
    },
}

/// Serial subsystem rejections.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum SerialError {
    #[error("UART port {0} does not exist on this SoC")]
    NoSuchPort(u8),
    #[error("UART ports must be numbered contiguously from 0, found {found} at entry {index}")]
    NotContiguous { index: usize, found: u8 },
    #[error("the UART table was already registered")]
    AlreadyRegistered,
}

/// Device enrollment rejections. All of them abort the boot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum EnrollError {
    #[error("device list was already enrolled")]
    AlreadyEnrolled,
    #[error("device {name}.{id} is already registered")]
    Duplicate { name: &'static str, id: i32 },
    #[error("MMIO window {start}..={end} of {device} is already claimed by {owner}")]
    Busy {
        device: &'static str,
        owner: &'static str,
        start: PhysicalAddress,
        end: PhysicalAddress,
    },
    #[error("IRQ {line} of {device} is already claimed by {owner}")]
    IrqBusy {
        device: &'static str,
        owner: &'static str,
        line: IrqLine,
    },
    #[error("device {device} has an invalid resource: {reason}")]
    InvalidResource {
        device: &'static str,
        reason: &'static str,
    },
}

/// GPIO request failures.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum GpioError {
    #[error("GPIO {0} is already requested")]
    Busy(GpioPin),
    #[error("GPIO {0} does not exist")]
    Invalid(GpioPin),
}

/// Failure of a single stage. Every variant is fatal for the boot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum StageError {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Serial(#[from] SerialError),
    #[error(transparent)]
    Enroll(#[from] EnrollError),
    #[error(transparent)]
    Gpio(#[from] GpioError),
}

/// The boot selector could not hand control to a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum SelectError {
    #[error("no board descriptor for machine id {0}")]
    UnknownMachine(MachineId),
    #[error("board {board} has no {stage} stage")]
    MissingStage { board: &'static str, stage: Stage },
}

/// Why the boot entry halted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum BootError {
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error("{board}: stage {stage} failed")]
    Stage {
        board: &'static str,
        stage: Stage,
        #[source]
        source: StageError,
    },
}
