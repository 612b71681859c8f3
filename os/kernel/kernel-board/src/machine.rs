//! Board descriptors and the boot-time machine selector.

use crate::error::{BootError, SelectError};
use crate::stage::{BoardStages, Stage, StageFn, StageTrace, run_all};
use crate::subsystem::Platform;
use kernel_info::boot::MachineId;
use kernel_memory_addresses::PhysicalAddress;
use log::{info, warn};

/// Everything the boot code needs to know about one supported board.
#[derive(Debug, Copy, Clone)]
pub struct MachineDesc {
    pub name: &'static str,
    pub machine_id: MachineId,
    /// Offset of the ATAG list from the start of SDRAM.
    pub atag_offset: u32,
    pub map_io: Option<StageFn>,
    pub init_irq: Option<StageFn>,
    pub init_time: Option<StageFn>,
    pub init_machine: Option<StageFn>,
}

impl MachineDesc {
    /// All four stage entry points.
    ///
    /// # Errors
    /// [`SelectError::MissingStage`] naming the first absent stage.
    pub const fn stages(&self) -> Result<BoardStages, SelectError> {
        let Some(map_io) = self.map_io else {
            return Err(self.missing(Stage::MapIo));
        };
        let Some(init_irq) = self.init_irq else {
            return Err(self.missing(Stage::InitIrq));
        };
        let Some(init_time) = self.init_time else {
            return Err(self.missing(Stage::InitTime));
        };
        let Some(init_machine) = self.init_machine else {
            return Err(self.missing(Stage::InitMachine));
        };
        Ok(BoardStages {
            map_io,
            init_irq,
            init_time,
            init_machine,
        })
    }

    /// `const` check that every stage is present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.stages().is_ok()
    }

    /// Where the bootloader is expected to leave the ATAG list, or `None`
    /// if the offset runs past the 32-bit physical address space.
    #[must_use]
    pub const fn boot_params(&self, phys_offset: PhysicalAddress) -> Option<PhysicalAddress> {
        match phys_offset.as_u32().checked_add(self.atag_offset) {
            Some(addr) => Some(PhysicalAddress::new(addr)),
            None => None,
        }
    }

    const fn missing(&self, stage: Stage) -> SelectError {
        SelectError::MissingStage {
            board: self.name,
            stage,
        }
    }
}

/// Summary of a successful bring-up.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BootReport {
    pub board: &'static str,
    pub machine_id: MachineId,
    pub trace: StageTrace,
}

/// Picks the descriptor matching the machine id the bootloader reported.
///
/// A board is only selected if all of its stages are present, so a
/// malformed descriptor never runs a single stage.
///
/// # Errors
/// [`SelectError::UnknownMachine`] or [`SelectError::MissingStage`].
pub fn select_machine(
    machines: &[&'static MachineDesc],
    id: MachineId,
) -> Result<(&'static MachineDesc, BoardStages), SelectError> {
    let Some(desc) = machines.iter().copied().find(|m| m.machine_id == id) else {
        warn!("unrecognized machine id {id}");
        return Err(SelectError::UnknownMachine(id));
    };
    let stages = desc.stages()?;
    info!("machine: {} (id {id})", desc.name);
    Ok((desc, stages))
}

/// Selects the board for `id` and runs its four stages.
///
/// # Errors
/// The selection failure, or the first stage that failed.
pub fn boot_machine(
    machines: &[&'static MachineDesc],
    id: MachineId,
    platform: &mut dyn Platform,
) -> Result<BootReport, BootError> {
    let (desc, stages) = select_machine(machines, id)?;
    let trace = run_all(desc.name, stages, platform)?;
    info!("{}: bring-up complete", desc.name);
    Ok(BootReport {
        board: desc.name,
        machine_id: desc.machine_id,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StageError;

    fn nop(_: &mut dyn Platform) -> Result<(), StageError> {
        Ok(())
    }

    const FULL: MachineDesc = MachineDesc {
        name: "board",
        machine_id: MachineId::new(7),
        atag_offset: 0x100,
        map_io: Some(nop),
        init_irq: Some(nop),
        init_time: Some(nop),
        init_machine: Some(nop),
    };

    #[test]
    fn complete_descriptor() {
        assert!(FULL.is_complete());
        assert_eq!(
            FULL.boot_params(PhysicalAddress::new(0x3000_0000)),
            Some(PhysicalAddress::new(0x3000_0100))
        );
        assert_eq!(FULL.boot_params(PhysicalAddress::new(0xFFFF_FF00)), None);
    }

    #[test]
    fn first_missing_stage_is_named() {
        let desc = MachineDesc {
            init_irq: None,
            init_machine: None,
            ..FULL
        };
        assert_eq!(
            desc.stages().err(),
            Some(SelectError::MissingStage {
                board: "board",
                stage: Stage::InitIrq
            })
        );
    }

    static BOARD: MachineDesc = FULL;

    #[test]
    fn unknown_machine() {
        assert_eq!(
            select_machine(&[&BOARD], MachineId::new(8)).err(),
            Some(SelectError::UnknownMachine(MachineId::new(8)))
        );
        assert!(select_machine(&[&BOARD], MachineId::new(7)).is_ok());
    }
}
