//! Connection points, beams, and bridge geometry queries

use glam::Vec2;

use super::catalog::Material;
use crate::consts::*;
use crate::horizontal_param;

/// Canvas coordinate of a connection point
pub type Point = Vec2;

/// The fixed anchors a beam can connect, left bank to right bank
pub const CONNECTION_POINTS: [Point; 6] = [
    Vec2::new(50.0, 250.0),
    Vec2::new(150.0, 200.0),
    Vec2::new(250.0, 180.0),
    Vec2::new(350.0, 180.0),
    Vec2::new(450.0, 200.0),
    Vec2::new(550.0, 250.0),
];

/// A placed beam. Never edited once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub start: Point,
    pub end: Point,
    pub material: Material,
}

impl Beam {
    pub fn new(start: Point, end: Point, material: Material) -> Self {
        Self {
            start,
            end,
            material,
        }
    }

    /// Horizontal extent as (min_x, max_x)
    pub fn x_range(&self) -> (f32, f32) {
        (self.start.x.min(self.end.x), self.start.x.max(self.end.x))
    }

    /// Height of the beam line at `x`, if `x` falls within the beam's span
    pub fn y_at(&self, x: f32) -> Option<f32> {
        let t = horizontal_param(self.start, self.end, x)?;
        if (0.0..=1.0).contains(&t) {
            Some(self.start.y + t * (self.end.y - self.start.y))
        } else {
            None
        }
    }
}

/// Sum of every beam's strength. Overlapping and duplicate beams all count.
pub fn total_strength(beams: &[Beam]) -> u32 {
    beams
        .iter()
        .fold(0u32, |sum, b| sum.saturating_add(b.material.strength))
}

/// Index of the first connection point within `radius` of `pos`
pub fn point_at(pos: Vec2, radius: f32) -> Option<usize> {
    CONNECTION_POINTS
        .iter()
        .position(|p| p.distance(pos) < radius)
}

/// Vertical resting position of a vehicle at `x` on the built structure.
///
/// Smaller y is higher on screen. Nearby connection points and every beam
/// spanning `x` can lift the vehicle; the highest wins.
pub fn deck_y_at(beams: &[Beam], x: f32) -> f32 {
    let mut y = DECK_Y;

    for point in CONNECTION_POINTS.iter() {
        if (point.x - x).abs() < POINT_SUPPORT_BAND {
            y = y.min(point.y);
        }
    }

    for beam in beams {
        if let Some(beam_y) = beam.y_at(x) {
            y = y.min(beam_y - BEAM_SEAT_OFFSET);
        }
    }

    y
}
