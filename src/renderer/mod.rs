//! Scene rendering
//!
//! `scene` turns session state into a display list of `draw` primitives; the
//! Canvas 2D backend in `canvas` executes it in the browser.

pub mod draw;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw::{DrawCmd, Paint, Rect, Stroke};
pub use scene::{ImageSize, ImageTable, SceneInput, build_scene};

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasRenderer, ImageBank};
