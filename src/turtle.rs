//! Turtle state and drawing commands for path interpretation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A drawing operation bound to a grammar symbol.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleCommand {
    /// Advance the pen one step along the current heading, tracing a segment.
    DrawForward,

    /// Rotate the heading by the given angle in degrees without drawing.
    /// Positive angles turn counterclockwise.
    Turn(f32),
}

/// The state of the drawing turtle: where the pen is and which way it faces.
///
/// Owned by a single interpretation run and discarded afterwards.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current pen position.
    pub position: Vec2,

    /// Current heading in radians, measured counterclockwise from the +x axis.
    pub heading: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    /// Returns the unit vector the turtle is facing along.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Moves the pen `step` units along the current heading.
    pub fn advance(&mut self, step: f32) {
        self.position += self.direction() * step;
    }

    /// Rotates the heading by `angle` radians (counterclockwise positive).
    pub fn rotate(&mut self, angle: f32) {
        self.heading += angle;
    }
}
