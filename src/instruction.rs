//! The instruction set understood by the [`Interpreter`](crate::Interpreter).

use serde::{Deserialize, Serialize};

/// A top-level, ordered sequence of instructions.
pub type Program = Vec<Instruction>;

/// A single turtle instruction.
///
/// Every variant except [`Instruction::Repeat`] is atomic: executing it yields
/// exactly one new [`Pose`](crate::Pose).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Move along the current heading. Negative distances move backwards.
    Forward(f64),
    /// Turn counter-clockwise, in degrees.
    TurnLeft(f64),
    /// Turn clockwise, in degrees.
    TurnRight(f64),
    /// Change the width of subsequent lines. Must be strictly positive.
    SetPenSize(f64),
    /// Run `body` `count` times in sequence. Contributes no pose of its own.
    Repeat { count: i64, body: Vec<Instruction> },
}

impl Instruction {
    pub fn forward(distance: f64) -> Self {
        Self::Forward(distance)
    }

    pub fn left(angle: f64) -> Self {
        Self::TurnLeft(angle)
    }

    pub fn right(angle: f64) -> Self {
        Self::TurnRight(angle)
    }

    pub fn pen_size(size: f64) -> Self {
        Self::SetPenSize(size)
    }

    pub fn repeat(count: i64, body: impl Into<Vec<Instruction>>) -> Self {
        Self::Repeat {
            count,
            body: body.into(),
        }
    }

    /// Number of poses this instruction appends to a trace once fully expanded.
    ///
    /// Saturates at `u64::MAX`. Negative repeat counts count as zero; the
    /// interpreter rejects them separately.
    pub fn atomic_count(&self) -> u64 {
        match self {
            Self::Repeat { count, body } => {
                let per_run = atomic_count(body);
                per_run.saturating_mul((*count).max(0) as u64)
            }
            _ => 1,
        }
    }
}

/// Total number of atomic instructions executed by `program`.
pub fn atomic_count(program: &[Instruction]) -> u64 {
    program
        .iter()
        .fold(0u64, |acc, instr| acc.saturating_add(instr.atomic_count()))
}
