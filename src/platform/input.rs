//! Pointer input mapping

use glam::Vec2;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// On-page box of the canvas element in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Convert a client-space pointer position to logical canvas coordinates.
///
/// The canvas may be stretched by CSS; the offset into the element is scaled
/// by logical size / displayed size on each axis.
pub fn to_logical(client: Vec2, rect: DisplayRect) -> Vec2 {
    let scale_x = if rect.width > 0.0 { CANVAS_WIDTH / rect.width } else { 1.0 };
    let scale_y = if rect.height > 0.0 { CANVAS_HEIGHT / rect.height } else { 1.0 };
    Vec2::new(
        (client.x - rect.left) * scale_x,
        (client.y - rect.top) * scale_y,
    )
}
