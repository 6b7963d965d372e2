//! # turtle-trace
//!
//! A small turtle-graphics interpreter. A [`Program`] is a nested list of
//! [`Instruction`]s (move, turn, pen size and bounded repetition); running it from
//! a starting [`Pose`] yields a [`Trace`] of every pose visited.
//!
//! The trace can then be paired into [`Segment`]s and serialized to SVG or HTML:
//!
//! ```
//! use turtle_trace::{Instruction, Pose, SvgConfig, render_svg, run};
//!
//! let square = vec![Instruction::repeat(4, [Instruction::forward(50.0), Instruction::left(90.0)])];
//! let trace = run(Pose::new(250.0, 250.0, 0.0), &square).unwrap();
//! assert_eq!(trace.len(), 9);
//!
//! let svg = render_svg(&trace.segments(), &SvgConfig::default());
//! assert_eq!(svg.matches("<line").count(), 8);
//! ```

pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod output;
pub mod path;
pub mod render;
pub mod turtle;

pub use error::TurtleError;
pub use instruction::*;
pub use interpreter::*;
pub use output::*;
pub use path::*;
pub use render::*;
pub use turtle::*;
