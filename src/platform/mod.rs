//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (injected clocks)
//! - Input coordinate mapping

pub mod input;
pub mod time;

pub use input::{DisplayRect, to_logical};
pub use time::{Clock, ManualClock};

#[cfg(target_arch = "wasm32")]
pub use time::BrowserClock;

use thiserror::Error;

/// Failures while binding to the host page
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{0} has the wrong type")]
    WrongElement(&'static str),
    #[error("2D canvas context unavailable")]
    NoContext,
    #[error("JS error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PlatformError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::Js(format!("{:?}", value))
    }
}
