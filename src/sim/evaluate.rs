//! Pass/fail evaluation of a bridge against a vehicle
//!
//! There is no load path analysis: the bridge holds iff the summed strength of
//! its beams reaches the vehicle's requirement.

use super::catalog::Vehicle;
use super::notice::Rejection;
use super::scene::{Beam, total_strength};

/// Result of weighing a bridge against a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub total_strength: u32,
    pub required_strength: u32,
    pub beam_count: u64,
}

impl Evaluation {
    pub fn passed(&self) -> bool {
        self.total_strength >= self.required_strength
    }

    /// Points awarded for a successful crossing: average beam strength x 100
    pub fn earned_score(&self) -> u64 {
        if !self.passed() || self.beam_count == 0 {
            return 0;
        }
        // Integer division is floor for non-negative operands
        u64::from(self.total_strength) * 100 / self.beam_count
    }
}

/// Weigh `beams` against `vehicle`
pub fn evaluate(beams: &[Beam], vehicle: &Vehicle) -> Result<Evaluation, Rejection> {
    if beams.is_empty() {
        return Err(Rejection::NoBeams);
    }
    Ok(Evaluation {
        total_strength: total_strength(beams),
        required_strength: vehicle.required_strength,
        beam_count: beams.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::{MATERIALS, VEHICLES};
    use crate::sim::scene::CONNECTION_POINTS;

    fn beams_of(material: usize, n: usize) -> Vec<Beam> {
        (0..n)
            .map(|i| {
                Beam::new(
                    CONNECTION_POINTS[i % 5],
                    CONNECTION_POINTS[i % 5 + 1],
                    MATERIALS[material],
                )
            })
            .collect()
    }

    #[test]
    fn test_no_beams_rejected() {
        assert_eq!(evaluate(&[], &VEHICLES[0]), Err(Rejection::NoBeams));
    }

    #[test]
    fn test_five_steel_beams_carry_bicycle() {
        let eval = evaluate(&beams_of(0, 5), &VEHICLES[0]).unwrap();
        assert_eq!(eval.total_strength, 50);
        assert!(eval.passed());
        assert_eq!(eval.earned_score(), 1000);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // wood(4) x 2 + concrete(7) = 15, exactly the bicycle's requirement
        let mut beams = beams_of(2, 2);
        beams.extend(beams_of(1, 1));
        let eval = evaluate(&beams, &VEHICLES[0]).unwrap();
        assert_eq!(eval.total_strength, 15);
        assert!(eval.passed());
        assert_eq!(eval.earned_score(), 500);
    }

    #[test]
    fn test_failure_earns_nothing() {
        let eval = evaluate(&beams_of(2, 3), &VEHICLES[2]).unwrap();
        assert_eq!(eval.total_strength, 12);
        assert!(!eval.passed());
        assert_eq!(eval.earned_score(), 0);
    }

    #[test]
    fn test_earned_score_floors() {
        // steel(10) + concrete(7) = 17 over 2 beams
        let mut beams = beams_of(0, 1);
        beams.extend(beams_of(1, 1));
        let eval = evaluate(&beams, &VEHICLES[0]).unwrap();
        assert_eq!(eval.earned_score(), 850);

        // cable(8) + wood(4) x 2 = 16 over 3 beams = 533.33
        let mut beams = beams_of(3, 1);
        beams.extend(beams_of(2, 2));
        let eval = evaluate(&beams, &VEHICLES[0]).unwrap();
        assert_eq!(eval.total_strength, 16);
        assert_eq!(eval.earned_score(), 533);
    }

    #[test]
    fn test_earned_score_does_not_overflow() {
        let eval = Evaluation {
            total_strength: u32::MAX,
            required_strength: 15,
            beam_count: 1,
        };
        assert_eq!(eval.earned_score(), u64::from(u32::MAX) * 100);

        let eval = Evaluation {
            total_strength: u32::MAX,
            required_strength: 15,
            beam_count: u64::from(u32::MAX) + 1,
        };
        assert_eq!(eval.earned_score(), 99);
    }
}
