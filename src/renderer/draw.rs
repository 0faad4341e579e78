//! Display-list primitives for 2D rendering

use glam::Vec2;

use crate::sim::MaterialKind;

/// CSS color string
pub type Color = &'static str;

/// Axis-aligned rectangle in canvas or image pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Non-empty and finite
    pub fn has_area(&self) -> bool {
        self.w > 0.0 && self.h > 0.0 && self.x.is_finite() && self.y.is_finite()
    }

    /// Whether `self` lies inside a `width` x `height` image (with a little
    /// slack for float error at the edges)
    pub fn within(&self, width: f32, height: f32) -> bool {
        const SLACK: f32 = 0.5;
        self.x >= -SLACK
            && self.y >= -SLACK
            && self.x + self.w <= width + SLACK
            && self.y + self.h <= height + SLACK
    }
}

/// Vertical linear gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub y0: f32,
    pub y1: f32,
    pub stops: &'static [(f32, Color)],
}

/// How a filled shape is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    Vertical(Gradient),
}

/// Outline style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// One drawing operation. A frame is a full list of these, back to front.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Wipe the whole surface
    Clear,
    FillRect { rect: Rect, paint: Paint },
    /// Open polyline
    Polyline {
        points: Vec<Vec2>,
        stroke: Stroke,
        alpha: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Sub-rectangle of a material photo stretched onto the canvas
    Image {
        kind: MaterialKind,
        src: Rect,
        dst: Rect,
        alpha: f32,
    },
    /// Centered text (vehicle glyphs)
    Text {
        text: &'static str,
        pos: Vec2,
        font: &'static str,
    },
}

/// Colors for scene elements
pub mod colors {
    use super::{Color, Gradient};

    pub const SKY: Gradient = Gradient {
        y0: 0.0,
        y1: 250.0,
        stops: &[(0.0, "#5B9BD5"), (1.0, "#90C5E8")],
    };
    pub const RIVER: Gradient = Gradient {
        y0: 250.0,
        y1: 350.0,
        stops: &[(0.0, "#1E5F8C"), (0.5, "#164863"), (1.0, "#0B2F4A")],
    };
    pub const WAVE: Color = "rgba(255, 255, 255, 0.2)";
    pub const GROUND: Color = "#3A4D2F";
    pub const TRUNK: Color = "#5D4037";
    pub const CROWN: Color = "#2E7D32";
    pub const POINT: Color = "#0F172A";
    pub const POINT_SELECTED: Color = "#2563EB";
    pub const POINT_OUTLINE: Color = "#475569";
    pub const SELECTION_RING: Color = "#3B82F6";
    pub const IMPACT: Color = "rgba(255, 100, 0, 0.6)";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_area() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).has_area());
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).has_area());
        assert!(!Rect::new(f32::NAN, 0.0, 5.0, 10.0).has_area());
    }

    #[test]
    fn test_rect_within() {
        let r = Rect::new(100.0, 30.0, 200.0, 40.0);
        assert!(r.within(300.0, 100.0));
        assert!(!r.within(250.0, 100.0));
        assert!(!Rect::new(-10.0, 0.0, 5.0, 5.0).within(100.0, 100.0));
    }
}
