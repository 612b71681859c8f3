//! Board bring-up sequencing.
//!
//! The four board stages run exactly once each, in this order:
//!
//! ```text
//! Uninitialized ─map_io─► AddressMapped ─init_irq─► InterruptsReady
//!       ─init_time─► ClocksReady ─init_machine─► MachineReady
//! ```
//!
//! [`BringUp`] encodes the current state in its type. Each transition
//! consumes the previous value, so running a stage twice or out of order
//! does not compile.

use crate::error::{BootError, StageError};
use crate::subsystem::Platform;
use core::fmt;
use core::marker::PhantomData;
use log::{error, info};

/// Entry point of one board stage.
pub type StageFn = fn(&mut dyn Platform) -> Result<(), StageError>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    MapIo,
    InitIrq,
    InitTime,
    InitMachine,
}

impl Stage {
    /// All stages in execution order.
    pub const ORDER: [Self; 4] = [Self::MapIo, Self::InitIrq, Self::InitTime, Self::InitMachine];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MapIo => "map_io",
            Self::InitIrq => "init_irq",
            Self::InitTime => "init_time",
            Self::InitMachine => "init_machine",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The complete set of stage entry points of one board.
#[derive(Debug, Copy, Clone)]
pub struct BoardStages {
    pub map_io: StageFn,
    pub init_irq: StageFn,
    pub init_time: StageFn,
    pub init_machine: StageFn,
}

impl BoardStages {
    #[must_use]
    pub const fn get(&self, stage: Stage) -> StageFn {
        match stage {
            Stage::MapIo => self.map_io,
            Stage::InitIrq => self.init_irq,
            Stage::InitTime => self.init_time,
            Stage::InitMachine => self.init_machine,
        }
    }
}

/// Stages that completed, in the order they ran.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StageTrace {
    done: [Stage; 4],
    len: usize,
}

impl StageTrace {
    const fn new() -> Self {
        Self {
            done: Stage::ORDER,
            len: 0,
        }
    }

    fn push(&mut self, stage: Stage) {
        debug_assert_eq!(stage, Stage::ORDER[self.len]);
        self.done[self.len] = stage;
        self.len += 1;
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.done[..self.len]
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.len == Stage::ORDER.len()
    }
}

pub struct Uninitialized;
pub struct AddressMapped;
pub struct InterruptsReady;
pub struct ClocksReady;
pub struct MachineReady;

/// A board part way through bring-up; `S` is the last state reached.
pub struct BringUp<'p, S> {
    board: &'static str,
    stages: BoardStages,
    platform: &'p mut dyn Platform,
    trace: StageTrace,
    _state: PhantomData<S>,
}

impl<S> fmt::Debug for BringUp<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BringUp")
            .field("board", &self.board)
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}

impl<'p, S> BringUp<'p, S> {
    #[must_use]
    pub const fn board(&self) -> &'static str {
        self.board
    }

    #[must_use]
    pub const fn trace(&self) -> &StageTrace {
        &self.trace
    }

    fn advance<N>(mut self, stage: Stage) -> Result<BringUp<'p, N>, BootError> {
        info!("{}: {stage}", self.board);
        let run = self.stages.get(stage);
        if let Err(source) = run(self.platform) {
            error!("{}: {stage} failed: {source}", self.board);
            return Err(BootError::Stage {
                board: self.board,
                stage,
                source,
            });
        }
        self.trace.push(stage);
        Ok(BringUp {
            board: self.board,
            stages: self.stages,
            platform: self.platform,
            trace: self.trace,
            _state: PhantomData,
        })
    }
}

impl<'p> BringUp<'p, Uninitialized> {
    pub fn new(board: &'static str, stages: BoardStages, platform: &'p mut dyn Platform) -> Self {
        Self {
            board,
            stages,
            platform,
            trace: StageTrace::new(),
            _state: PhantomData,
        }
    }

    /// Installs the static I/O mappings, serial setup and timer selection.
    ///
    /// # Errors
    /// [`BootError::Stage`] if the stage failed.
    pub fn map_io(self) -> Result<BringUp<'p, AddressMapped>, BootError> {
        self.advance(Stage::MapIo)
    }
}

impl<'p> BringUp<'p, AddressMapped> {
    /// # Errors
    /// [`BootError::Stage`] if the stage failed.
    pub fn init_irq(self) -> Result<BringUp<'p, InterruptsReady>, BootError> {
        self.advance(Stage::InitIrq)
    }
}

impl<'p> BringUp<'p, InterruptsReady> {
    /// # Errors
    /// [`BootError::Stage`] if the stage failed.
    pub fn init_time(self) -> Result<BringUp<'p, ClocksReady>, BootError> {
        self.advance(Stage::InitTime)
    }
}

impl<'p> BringUp<'p, ClocksReady> {
    /// Hands over platform data and enrolls the device list.
    ///
    /// # Errors
    /// [`BootError::Stage`] if the stage failed.
    pub fn init_machine(self) -> Result<BringUp<'p, MachineReady>, BootError> {
        self.advance(Stage::InitMachine)
    }
}

impl BringUp<'_, MachineReady> {
    #[must_use]
    pub fn finish(self) -> StageTrace {
        self.trace
    }
}

/// Runs all four stages in order.
///
/// # Errors
/// The first failing stage; later stages do not run.
pub fn run_all(
    board: &'static str,
    stages: BoardStages,
    platform: &mut dyn Platform,
) -> Result<StageTrace, BootError> {
    let ready = BringUp::new(board, stages, platform)
        .map_io()?
        .init_irq()?
        .init_time()?
        .init_machine()?;
    Ok(ready.finish())
}
