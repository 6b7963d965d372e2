//! Pose traces and the line segments derived from them.

use crate::turtle::Pose;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The ordered poses visited while evaluating a program.
///
/// A trace produced by the interpreter always starts with the initial pose and
/// holds one further pose per atomic instruction executed. Serialized as a plain
/// array of poses; an empty array is rejected when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pose>", into = "Vec<Pose>")]
pub struct Trace {
    poses: Vec<Pose>,
}

impl Trace {
    pub(crate) fn new(start: Pose) -> Self {
        Self { poses: vec![start] }
    }

    pub(crate) fn push(&mut self, pose: Pose) {
        self.poses.push(pose);
    }

    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn last(&self) -> Option<&Pose> {
        self.poses.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pose> {
        self.poses.iter()
    }

    /// Pairs consecutive poses into line segments.
    ///
    /// Yields `len() - 1` segments, or none for traces shorter than two poses.
    /// Each segment uses the pen size of its first pose.
    pub fn segments(&self) -> Vec<Segment> {
        self.poses
            .windows(2)
            .map(|pair| Segment {
                start: pair[0].position,
                end: pair[1].position,
                pen_size: pair[0].pen_size,
            })
            .collect()
    }
}

impl TryFrom<Vec<Pose>> for Trace {
    type Error = &'static str;

    fn try_from(poses: Vec<Pose>) -> Result<Self, Self::Error> {
        if poses.is_empty() {
            return Err("a trace holds at least its initial pose");
        }
        Ok(Self { poses })
    }
}

impl From<Trace> for Vec<Pose> {
    fn from(trace: Trace) -> Self {
        trace.poses
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Pose;
    type IntoIter = std::slice::Iter<'a, Pose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}

/// A straight line between two consecutive poses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
    /// Stroke width in effect when the segment was drawn.
    pub pen_size: f64,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// True when both endpoints coincide, e.g. for a segment produced by a turn.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
