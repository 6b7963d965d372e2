//! Turtle pose and its transition functions.

use crate::error::{Result, TurtleError};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Wraps any angle in degrees into `[0, 360)`.
///
/// Negative inputs wrap upwards, so `-90` becomes `270`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// The complete drawable state of the turtle.
///
/// A `Pose` is a plain value: every transition returns a new pose and leaves
/// the receiver untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Current position of the pen.
    pub position: DVec2,

    /// Heading in degrees, `0` pointing along `+X`, growing counter-clockwise.
    pub angle: f64,

    /// Width of the line drawn from this pose onwards.
    pub pen_size: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            angle: 0.0,
            pen_size: 1.0,
        }
    }
}

impl Pose {
    /// Builds a pose with the default pen size. The angle is normalized.
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            angle: normalize_angle(angle),
            ..Default::default()
        }
    }

    /// Returns a copy of this pose using `pen_size`, without validation.
    pub fn with_pen_size(self, pen_size: f64) -> Self {
        Self { pen_size, ..self }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Unit vector pointing along the current heading.
    pub fn heading(&self) -> DVec2 {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        DVec2::new(cos, sin)
    }

    /// Moves `distance` units along the heading. Negative distances move backwards.
    pub fn move_forward(self, distance: f64) -> Self {
        Self {
            position: self.position + self.heading() * distance,
            ..self
        }
    }

    /// Turns counter-clockwise by `delta` degrees.
    pub fn turn(self, delta: f64) -> Self {
        Self {
            angle: normalize_angle(self.angle + delta),
            ..self
        }
    }

    /// Turns clockwise by `delta` degrees; the same as `turn(-delta)`.
    pub fn turn_right(self, delta: f64) -> Self {
        self.turn(-delta)
    }

    /// Replaces the pen size. Fails unless `size` is strictly positive.
    pub fn set_pen_size(self, size: f64) -> Result<Self> {
        if size.is_nan() || size <= 0.0 {
            return Err(TurtleError::InvalidPenSize { size });
        }
        Ok(Self {
            pen_size: size,
            ..self
        })
    }

    /// Compares two poses within `tolerance` on every component.
    pub fn abs_diff_eq(&self, other: &Pose, tolerance: f64) -> bool {
        self.position.abs_diff_eq(other.position, tolerance)
            && angle_distance(self.angle, other.angle) <= tolerance
            && (self.pen_size - other.pen_size).abs() <= tolerance
    }
}

/// Shortest distance between two headings, so `359.9999999` and `0` compare as close.
fn angle_distance(a: f64, b: f64) -> f64 {
    let d = normalize_angle(a - b);
    d.min(360.0 - d)
}
