//! Bridge Builder - a beam-placing bridge test game
//!
//! Core modules:
//! - `sim`: Pure game logic (catalogs, session state, evaluation, animation)
//! - `renderer`: Display-list scene builder and Canvas2D backend
//! - `platform`: Browser/native platform abstraction (time, input mapping)
//! - `tuning`: Data-driven economy balance
//! - `settings`: Per-page presentation settings
//! - `ui`: HUD view-model and DOM binding
//! - `audio`: Sound cues (Web Audio on wasm)

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 350.0;

    /// Horizontal extent of the span the vehicle travels
    pub const SPAN_START_X: f32 = 50.0;
    pub const SPAN_WIDTH: f32 = 500.0;

    /// Water line; the vehicle rests here when there is nothing to stand on
    pub const DECK_Y: f32 = 250.0;

    /// Points within this horizontal distance hold the vehicle up
    pub const POINT_SUPPORT_BAND: f32 = 50.0;
    /// Vehicle sits this far above a beam line
    pub const BEAM_SEAT_OFFSET: f32 = 18.0;

    /// Failing vehicle drops this many pixels per unit of progress past midspan
    pub const FALL_SCALE: f32 = 300.0;
    /// Position speed-up past midspan when the bridge gives way
    pub const FALL_OVERSHOOT: f32 = 1.5;

    /// Default click radius around a connection point
    pub const POINT_SNAP_RADIUS: f32 = 25.0;

    /// Default economy
    pub const STARTING_BUDGET: u32 = 50_000;
    pub const LEVEL_BUDGET_BONUS: u32 = 10_000;
}

/// Map a traversal fraction (0..1) to a canvas x coordinate on the span
#[inline]
pub fn span_x(position: f32) -> f32 {
    consts::SPAN_START_X + position * consts::SPAN_WIDTH
}

/// Linear interpolation parameter of `x` along the horizontal extent of `a`..`b`.
///
/// Returns `None` for vertical segments where the parameter is undefined.
#[inline]
pub fn horizontal_param(a: Vec2, b: Vec2, x: f32) -> Option<f32> {
    let dx = b.x - a.x;
    if dx == 0.0 {
        return None;
    }
    Some((x - a.x) / dx)
}
