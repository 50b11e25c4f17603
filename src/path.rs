//! Traced path geometry, the hand-off value between interpreter and renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, accumulated point by point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Componentwise minimum over the accumulated points.
    pub min: Vec2,

    /// Componentwise maximum over the accumulated points.
    pub max: Vec2,
}

impl Bounds {
    /// A box containing exactly `point`.
    pub fn at(point: Vec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the box to contain `point`.
    pub fn expand(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// The geometry produced by one interpretation run.
///
/// Renderer-agnostic: consumers stroke a connected polyline through `points`
/// in order and pick their output coordinate system from `bounds`. The point
/// list always starts at the origin, so it is never empty and the bounding
/// box always contains (0, 0) — even for input with no draw commands at all.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathTrace {
    /// The traced pen positions, in drawing order.
    pub points: Vec<Vec2>,

    /// Componentwise min/max over `points`.
    pub bounds: Bounds,
}

impl PathTrace {
    /// Number of drawn segments, one fewer than the number of points.
    pub fn segments(&self) -> usize {
        self.points.len() - 1
    }
}
