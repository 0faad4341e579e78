//! Data-driven economy balance
//!
//! The shipped table is embedded from `assets/tuning.json`. Missing keys fall
//! back to the built-in defaults.

use serde::Deserialize;
use thiserror::Error;

use crate::consts::{LEVEL_BUDGET_BONUS, POINT_SNAP_RADIUS, STARTING_BUDGET};

/// Embedded balance table
const EMBEDDED: &str = include_str!("../assets/tuning.json");

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snap radius must be positive, got {0}")]
    SnapRadius(f32),
}

/// Economy and interaction balance
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Budget after a reset
    pub starting_budget: u32,
    /// Extra budget per level above the first
    pub level_budget_bonus: u32,
    /// Click distance that still hits a connection point
    pub snap_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_budget: STARTING_BUDGET,
            level_budget_bonus: LEVEL_BUDGET_BONUS,
            snap_radius: POINT_SNAP_RADIUS,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning table
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        if !(tuning.snap_radius > 0.0) {
            return Err(TuningError::SnapRadius(tuning.snap_radius));
        }
        Ok(tuning)
    }

    /// The embedded table, or defaults if it does not parse
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED) {
            Ok(tuning) => {
                log::info!("Loaded tuning: starting budget {}", tuning.starting_budget);
                tuning
            }
            Err(e) => {
                log::warn!("Bad embedded tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
