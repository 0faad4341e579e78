//! Load-test animation as a time-driven state machine
//!
//! A run is started once and sampled with absolute timestamps from an injected
//! clock. It always runs to completion; there is no cancellation.

use super::evaluate::Evaluation;
use crate::consts::FALL_OVERSHOOT;

/// An in-flight load test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestRun {
    pub evaluation: Evaluation,
    /// Vehicle being driven across (catalog index)
    pub vehicle_index: usize,
    /// Clock reading when the run began (ms)
    pub started_at: f64,
    /// Time to complete the crossing (ms)
    pub duration: f64,
}

/// One sampled animation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestFrame {
    /// Elapsed fraction of the run, clamped to [0, 1]
    pub progress: f32,
    /// Where along the span the vehicle is drawn. Overshoots 1 on collapse.
    pub position: f32,
    pub finished: bool,
}

impl TestRun {
    pub fn new(evaluation: Evaluation, vehicle_index: usize, started_at: f64, duration: f64) -> Self {
        Self {
            evaluation,
            vehicle_index,
            started_at,
            duration,
        }
    }

    pub fn failing(&self) -> bool {
        !self.evaluation.passed()
    }

    /// Sample the run at clock reading `now` (ms)
    pub fn sample(&self, now: f64) -> TestFrame {
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32
        };

        TestFrame {
            progress,
            position: travel_position(progress, self.failing()),
            finished: progress >= 1.0,
        }
    }
}

/// Map run progress to a traversal fraction.
///
/// A failing bridge holds for the first half, then the vehicle lurches past
/// midspan faster than it was moving.
pub fn travel_position(progress: f32, failing: bool) -> f32 {
    if failing && progress > 0.5 {
        0.5 + (progress - 0.5) * FALL_OVERSHOOT
    } else {
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(total: u32, required: u32) -> TestRun {
        let evaluation = Evaluation {
            total_strength: total,
            required_strength: required,
            beam_count: 1,
        };
        TestRun::new(evaluation, 0, 1000.0, 4000.0)
    }

    fn positions(run: &TestRun, samples: &[f64]) -> Vec<(f32, f32, bool)> {
        samples
            .iter()
            .map(|&t| {
                let f = run.sample(t);
                (f.progress, f.position, f.finished)
            })
            .collect()
    }

    #[test]
    fn test_passing_run_is_linear() {
        let r = run(20, 15);
        let got = positions(&r, &[1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 9000.0]);
        assert_eq!(
            got,
            vec![
                (0.0, 0.0, false),
                (0.25, 0.25, false),
                (0.5, 0.5, false),
                (0.75, 0.75, false),
                (1.0, 1.0, true),
                (1.0, 1.0, true),
            ]
        );
    }

    #[test]
    fn test_failing_run_overshoots_past_midspan() {
        let r = run(10, 15);
        let got = positions(&r, &[2000.0, 3000.0, 4000.0, 5000.0]);
        assert_eq!(
            got,
            vec![
                (0.25, 0.25, false),
                (0.5, 0.5, false),
                (0.75, 0.875, false),
                (1.0, 1.25, true),
            ]
        );
    }

    #[test]
    fn test_clock_before_start_clamps() {
        let r = run(20, 15);
        let f = r.sample(0.0);
        assert_eq!(f.progress, 0.0);
        assert!(!f.finished);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut r = run(20, 15);
        r.duration = 0.0;
        assert!(r.sample(1000.0).finished);
    }
}
