//! Session state and core game types
//!
//! Everything the renderer and HUD read lives here. Mutation goes through the
//! action functions in `actions`.

use super::catalog::{self, LAST_VEHICLE, Material, Vehicle};
use super::notice::Notice;
use super::scene::Beam;
use super::test_run::TestRun;
use crate::tuning::Tuning;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Placing beams
    Building,
    /// A vehicle is crossing; edits are locked out
    Testing,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct Session {
    /// Money left to spend on beams
    pub budget: u32,
    /// Accumulated score (never decreases)
    pub score: u64,
    /// Level number, starting at 1
    pub level: u32,
    /// Active vehicle on the ladder (always a valid catalog index)
    pub vehicle_index: usize,
    /// Material used for the next beam (catalog index)
    pub material_index: usize,
    /// Built beams in placement order
    pub beams: Vec<Beam>,
    /// Connection point awaiting a second click
    pub selected_point: Option<usize>,
    /// Result banner contents
    pub message: Option<Notice>,
    /// In-flight load test
    pub test: Option<TestRun>,
    /// Vehicle position along the span while a test is drawn
    pub vehicle_position: Option<f32>,
    /// The running test is a collapse
    pub bridge_failed: bool,
    /// Economy balance
    pub tuning: Tuning,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl Session {
    /// Create a fresh level-1 session
    pub fn new(tuning: Tuning) -> Self {
        Self {
            budget: tuning.starting_budget,
            score: 0,
            level: 1,
            vehicle_index: 0,
            material_index: 0,
            beams: Vec::new(),
            selected_point: None,
            message: None,
            test: None,
            vehicle_position: None,
            bridge_failed: false,
            tuning,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.test.is_some() {
            GamePhase::Testing
        } else {
            GamePhase::Building
        }
    }

    pub fn is_testing(&self) -> bool {
        self.phase() == GamePhase::Testing
    }

    pub fn vehicle(&self) -> &'static Vehicle {
        catalog::vehicle(self.vehicle_index)
    }

    pub fn material(&self) -> &'static Material {
        catalog::material(self.material_index).unwrap_or(&catalog::MATERIALS[0])
    }

    /// Move one rung up the vehicle ladder, stopping at the last vehicle
    pub fn advance_vehicle(&mut self) {
        self.vehicle_index = (self.vehicle_index + 1).min(LAST_VEHICLE);
    }

    /// Clear the bridge and restart the vehicle ladder. Level is kept.
    pub fn reset(&mut self) {
        self.beams.clear();
        self.selected_point = None;
        self.message = None;
        self.budget = self.tuning.starting_budget;
        self.test = None;
        self.vehicle_position = None;
        self.bridge_failed = false;
        self.vehicle_index = 0;
    }

    /// Budget granted when entering `level`
    pub fn level_budget(&self, level: u32) -> u32 {
        let bonus_levels = level.saturating_sub(1);
        self.tuning
            .starting_budget
            .saturating_add(bonus_levels.saturating_mul(self.tuning.level_budget_bonus))
    }

    /// Advance to the next level with a fresh bridge and a larger budget
    pub fn next_level(&mut self) {
        self.level += 1;
        self.reset();
        self.budget = self.level_budget(self.level);
    }
}
