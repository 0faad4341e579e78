//! Audio cues using the Web Audio API
//!
//! Procedurally generated, no sound files.

use crate::sim::{Notice, Outcome, Rejection};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// First point of a beam picked
    Select,
    /// Beam bought
    BeamPlaced,
    /// Purchase or test refused
    Denied,
    /// Vehicle made it across
    Crossed,
    /// Bridge collapsed
    Collapse,
}

impl SoundEffect {
    /// Cue for the result of a player command
    pub fn for_command(result: &Result<Outcome, Rejection>) -> Option<Self> {
        match result {
            Ok(Outcome::PointSelected(_)) => Some(SoundEffect::Select),
            Ok(Outcome::BeamPlaced { .. }) => Some(SoundEffect::BeamPlaced),
            Ok(_) => None,
            Err(r) if r.is_reported() => Some(SoundEffect::Denied),
            Err(_) => None,
        }
    }

    /// Cue for a finished load test
    pub fn for_notice(notice: &Notice) -> Option<Self> {
        match notice {
            Notice::Crossed { .. } => Some(SoundEffect::Crossed),
            Notice::Collapsed { .. } => Some(SoundEffect::Collapse),
            Notice::Rejected(_) => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    /// Master level applied to every cue
    const VOLUME: f32 = 0.8;

    /// Audio manager for the game. Silent when there is no context.
    pub struct AudioManager {
        ctx: Option<AudioContext>,
    }

    impl AudioManager {
        /// No context is created when sound is switched off
        pub fn new(enabled: bool) -> Self {
            if !enabled {
                log::info!("Sound disabled by settings");
                return Self { ctx: None };
            }
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let vol = VOLUME;
            match effect {
                SoundEffect::Select => self.play_select(ctx, vol),
                SoundEffect::BeamPlaced => self.play_beam_placed(ctx, vol),
                SoundEffect::Denied => self.play_denied(ctx, vol),
                SoundEffect::Crossed => self.play_crossed(ctx, vol),
                SoundEffect::Collapse => self.play_collapse(ctx, vol),
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Single decaying tone
        fn blip(&self, ctx: &AudioContext, freq: f32, kind: OscillatorType, vol: f32, len: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, kind) else {
                return;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + len)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + len + 0.05).ok();
        }

        fn play_select(&self, ctx: &AudioContext, vol: f32) {
            self.blip(ctx, 520.0, OscillatorType::Sine, vol * 0.2, 0.06);
        }

        /// Hammer knock
        fn play_beam_placed(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 180.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.5, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(180.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(70.0, t + 0.12)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Low buzz
        fn play_denied(&self, ctx: &AudioContext, vol: f32) {
            self.blip(ctx, 110.0, OscillatorType::Square, vol * 0.15, 0.2);
        }

        /// Rising fanfare
        fn play_crossed(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [400.0, 500.0, 600.0, 800.0].iter().enumerate() {
                let delay = i as f64 * 0.1;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.5).ok();
                }
            }
        }

        /// Crash and a long falling groan
        fn play_collapse(&self, ctx: &AudioContext, vol: f32) {
            self.blip(ctx, 90.0, OscillatorType::Sawtooth, vol * 0.4, 0.25);

            let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.8)
                .ok();
            osc.frequency().set_value_at_time(300.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(20.0, t + 0.8)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 1.0).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_cues() {
        assert_eq!(
            SoundEffect::for_command(&Ok(Outcome::BeamPlaced { cost: 500 })),
            Some(SoundEffect::BeamPlaced)
        );
        assert_eq!(
            SoundEffect::for_command(&Ok(Outcome::PointSelected(2))),
            Some(SoundEffect::Select)
        );
        assert_eq!(SoundEffect::for_command(&Ok(Outcome::Missed)), None);
        assert_eq!(
            SoundEffect::for_command(&Err(Rejection::InsufficientBudget { cost: 500, budget: 0 })),
            Some(SoundEffect::Denied)
        );
        assert_eq!(SoundEffect::for_command(&Err(Rejection::Busy)), None);
    }

    #[test]
    fn test_notice_cues() {
        assert_eq!(
            SoundEffect::for_notice(&Notice::Crossed { vehicle: "x", earned: 1 }),
            Some(SoundEffect::Crossed)
        );
        assert_eq!(
            SoundEffect::for_notice(&Notice::Collapsed { required: 2, actual: 1 }),
            Some(SoundEffect::Collapse)
        );
    }
}
