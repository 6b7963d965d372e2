//! Interpreter that folds a [`Program`](crate::Program) over a starting [`Pose`] into a [`Trace`].
//!
//! The entry points are [`run`] for the common case and [`Interpreter`] when the
//! starting pose comes from configuration.
//!
//! Evaluation uses an explicit frame stack instead of native recursion, so the
//! nesting depth of `Repeat` blocks is limited only by heap memory.

use crate::error::{Result, TurtleError};
use crate::instruction::Instruction;
use crate::path::Trace;
use crate::turtle::Pose;
use tracing::{debug, trace};

/// Configuration for program evaluation.
#[derive(Clone, Debug, Default)]
pub struct InterpreterConfig {
    /// Pose the turtle starts from. Evaluation fails if this is `None`.
    pub start: Option<Pose>,
}

/// Evaluates turtle programs.
///
/// The interpreter holds no mutable state, so one instance can be shared and
/// used from several threads at once.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
}

/// One level of `Repeat` expansion (the program itself is the outermost frame).
struct Frame<'a> {
    body: &'a [Instruction],
    next: usize,
    /// Runs of `body` still to finish, including the current one. Always >= 1.
    remaining: u64,
    /// Trace length when the current run of `body` began.
    run_start: usize,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    /// Sets the starting pose (builder pattern).
    pub fn with_start(mut self, start: Pose) -> Self {
        self.config.start = Some(start);
        self
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Runs `program` from the configured start pose.
    ///
    /// Fails with [`TurtleError::MissingInitialPose`] when none was configured.
    pub fn execute(&self, program: &[Instruction]) -> Result<Trace> {
        let start = self.config.start.ok_or(TurtleError::MissingInitialPose)?;
        self.execute_from(start, program)
    }

    /// Runs `program` from `start`, ignoring the configured start pose.
    ///
    /// # Semantics
    ///
    /// Instructions run strictly in order. Each atomic instruction turns the
    /// current pose into exactly one new pose, which is appended to the trace
    /// and becomes current. `Repeat { count, body }` runs `body` `count` times,
    /// each run continuing from the pose the previous one left; it adds no pose
    /// itself. A negative count is rejected when the repeat is reached.
    ///
    /// Cost is proportional to the poses produced: a repeat whose body yields
    /// no pose is run once, whatever its count.
    ///
    /// Any failure discards the poses gathered so far.
    pub fn execute_from(&self, start: Pose, program: &[Instruction]) -> Result<Trace> {
        debug!(
            instructions = program.len(),
            x = start.position.x,
            y = start.position.y,
            angle = start.angle,
            "evaluating turtle program"
        );

        let mut visited = Trace::new(start);
        let mut current = start;
        let mut stack = vec![Frame {
            body: program,
            next: 0,
            remaining: 1,
            run_start: 1,
        }];

        while let Some(frame) = stack.last_mut() {
            let body = frame.body;
            if frame.next == body.len() {
                frame.remaining -= 1;
                // A run that added no pose adds none the next time either.
                if frame.remaining == 0 || visited.len() == frame.run_start {
                    stack.pop();
                } else {
                    frame.next = 0;
                    frame.run_start = visited.len();
                }
                continue;
            }

            let instruction = &body[frame.next];
            frame.next += 1;

            let next = match instruction {
                Instruction::Forward(distance) => current.move_forward(*distance),
                Instruction::TurnLeft(angle) => current.turn(*angle),
                Instruction::TurnRight(angle) => current.turn_right(*angle),
                Instruction::SetPenSize(size) => current.set_pen_size(*size)?,
                Instruction::Repeat { count, body } => {
                    if *count < 0 {
                        return Err(TurtleError::InvalidRepeatCount { count: *count });
                    }
                    if *count > 0 && !body.is_empty() {
                        trace!(count = *count, depth = stack.len(), "expanding repeat");
                        stack.push(Frame {
                            body,
                            next: 0,
                            remaining: *count as u64,
                            run_start: visited.len(),
                        });
                    }
                    continue;
                }
            };

            visited.push(next);
            current = next;
        }

        debug!(poses = visited.len(), "turtle program finished");
        Ok(visited)
    }
}

/// Runs `program` from `initial` and returns every pose visited, `initial` first.
pub fn run(initial: Pose, program: &[Instruction]) -> Result<Trace> {
    Interpreter::default().execute_from(initial, program)
}
