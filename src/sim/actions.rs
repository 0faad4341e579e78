//! Player actions and the per-frame test step
//!
//! Every state transition of a session happens through these functions.
//! Timestamps come from the caller's clock so runs are reproducible.

use glam::Vec2;

use super::catalog::{self, MATERIALS};
use super::evaluate::evaluate;
use super::notice::{Notice, Rejection};
use super::scene::{Beam, CONNECTION_POINTS, point_at};
use super::state::Session;
use super::test_run::{TestFrame, TestRun};

/// A player command, already mapped to logical canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Click on the canvas
    Click(Vec2),
    /// Pick a material from the catalog
    SelectMaterial(usize),
    /// Drive the current vehicle across
    Test,
    /// Clear the bridge
    Reset,
    /// Move to the next level
    NextLevel,
}

/// What a successful command did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// First point of a beam chosen
    PointSelected(usize),
    /// Pending point clicked again
    PointDeselected,
    /// Beam bought and placed
    BeamPlaced { cost: u32 },
    /// Click hit nothing
    Missed,
    MaterialSelected(usize),
    TestStarted { failing: bool },
    Reset,
    LevelAdvanced(u32),
}

/// Result of stepping the active test
#[derive(Debug, Clone, PartialEq)]
pub enum TestStep {
    /// No test running
    Idle,
    /// Vehicle still crossing
    Running(TestFrame),
    /// Crossing finished and the outcome applied
    Finished(Notice),
}

/// Apply a command at clock reading `now` (ms)
pub fn apply(session: &mut Session, command: Command, now: f64) -> Result<Outcome, Rejection> {
    match command {
        Command::Click(pos) => click(session, pos),
        Command::SelectMaterial(index) => select_material(session, index),
        Command::Test => start_test(session, now),
        Command::Reset => reset(session),
        Command::NextLevel => next_level(session),
    }
}

/// Two-click beam placement
pub fn click(session: &mut Session, pos: Vec2) -> Result<Outcome, Rejection> {
    if session.is_testing() {
        return Err(Rejection::Busy);
    }

    let Some(clicked) = point_at(pos, session.tuning.snap_radius) else {
        return Ok(Outcome::Missed);
    };

    let Some(selected) = session.selected_point.take() else {
        session.selected_point = Some(clicked);
        return Ok(Outcome::PointSelected(clicked));
    };

    if selected == clicked {
        return Ok(Outcome::PointDeselected);
    }

    let material = *session.material();
    if session.budget < material.cost {
        let rejection = Rejection::InsufficientBudget {
            cost: material.cost,
            budget: session.budget,
        };
        log::debug!(
            "Rejected {} beam: cost {} > budget {}",
            material.kind.as_str(),
            material.cost,
            session.budget
        );
        session.message = Some(rejection.clone().into());
        return Err(rejection);
    }

    session.beams.push(Beam::new(
        CONNECTION_POINTS[selected],
        CONNECTION_POINTS[clicked],
        material,
    ));
    session.budget -= material.cost;
    session.message = None;
    log::debug!(
        "Placed {} beam {} -> {} (budget {})",
        material.kind.as_str(),
        selected,
        clicked,
        session.budget
    );

    Ok(Outcome::BeamPlaced { cost: material.cost })
}

/// Choose the material for subsequent beams
pub fn select_material(session: &mut Session, index: usize) -> Result<Outcome, Rejection> {
    if session.is_testing() {
        return Err(Rejection::Busy);
    }
    if index >= MATERIALS.len() {
        return Err(Rejection::UnknownMaterial(index));
    }
    session.material_index = index;
    Ok(Outcome::MaterialSelected(index))
}

/// Begin a load test with the active vehicle
pub fn start_test(session: &mut Session, now: f64) -> Result<Outcome, Rejection> {
    if session.is_testing() {
        return Err(Rejection::Busy);
    }

    let vehicle = session.vehicle();
    let evaluation = match evaluate(&session.beams, vehicle) {
        Ok(evaluation) => evaluation,
        Err(rejection) => {
            session.message = Some(rejection.clone().into());
            return Err(rejection);
        }
    };

    let run = TestRun::new(evaluation, session.vehicle_index, now, vehicle.speed as f64);
    session.bridge_failed = run.failing();
    session.vehicle_position = Some(0.0);
    session.test = Some(run);

    log::info!(
        "Testing with {}: strength {} vs required {}",
        vehicle.name,
        evaluation.total_strength,
        evaluation.required_strength
    );

    Ok(Outcome::TestStarted {
        failing: run.failing(),
    })
}

/// Advance the active test to clock reading `now`, applying the outcome when
/// the crossing completes
pub fn advance_test(session: &mut Session, now: f64) -> TestStep {
    let Some(run) = session.test else {
        return TestStep::Idle;
    };

    let frame = run.sample(now);
    if !frame.finished {
        session.vehicle_position = Some(frame.position);
        return TestStep::Running(frame);
    }

    let evaluation = run.evaluation;
    let notice = if evaluation.passed() {
        let earned = evaluation.earned_score();
        session.score = session.score.saturating_add(earned);
        session.advance_vehicle();
        Notice::Crossed {
            vehicle: catalog::vehicle(run.vehicle_index).name,
            earned,
        }
    } else {
        Notice::Collapsed {
            required: evaluation.required_strength,
            actual: evaluation.total_strength,
        }
    };

    log::info!("Test finished: {}", notice);

    session.message = Some(notice.clone());
    session.bridge_failed = false;
    session.vehicle_position = None;
    session.test = None;

    TestStep::Finished(notice)
}

/// Clear the bridge (disabled while a test runs)
pub fn reset(session: &mut Session) -> Result<Outcome, Rejection> {
    if session.is_testing() {
        return Err(Rejection::Busy);
    }
    session.reset();
    log::debug!("Bridge reset");
    Ok(Outcome::Reset)
}

/// Move to the next level (disabled while a test runs)
pub fn next_level(session: &mut Session) -> Result<Outcome, Rejection> {
    if session.is_testing() {
        return Err(Rejection::Busy);
    }
    session.next_level();
    log::info!("Entering level {} with budget {}", session.level, session.budget);
    Ok(Outcome::LevelAdvanced(session.level))
}
