// Sigil mesh transform and the animations that drive it.

use super::constants::*;
use super::phase::{Phase, PhaseMachine};
use super::timeline::{Ease, Timeline, Tween};
use glam::{Mat4, Vec3};

/// Animatable transform of the centerpiece mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SigilTransform {
    pub scale: Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl Default for SigilTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::splat(INTRO_SCALE),
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl SigilTransform {
    /// Linear spin around Y plus a slow sinusoidal wobble around X.
    pub fn apply_idle_rotation(&mut self, time: f32) {
        self.rotation_y = time * SPIN_Y_RATE;
        self.rotation_x = (time * WOBBLE_X_FREQ).sin() * WOBBLE_X_AMPLITUDE;
    }

    /// Object-to-world matrix; rotations compose in X then Y order.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_scale(self.scale)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IntroCue {
    Assemble,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PulseCue {
    Peak,
    Settled,
}

#[derive(Clone, Copy, Debug)]
enum ScaleTrack {
    Hold(f32),
    Tween(Tween),
}

impl ScaleTrack {
    fn value(&self, now: f32) -> f32 {
        match self {
            ScaleTrack::Hold(v) => *v,
            ScaleTrack::Tween(t) => t.value(now),
        }
    }
}

/// What happened during one `SigilAnimator::advance`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimatorEvents {
    pub entered: Vec<Phase>,
    pub click_completed: bool,
}

/// Drives the intro phases, the intro grow and click feedback from one clock.
#[derive(Clone, Debug)]
pub struct SigilAnimator {
    phases: PhaseMachine,
    intro: Timeline<IntroCue>,
    scale: ScaleTrack,
    pulse: Option<Timeline<PulseCue>>,
}

impl Default for SigilAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SigilAnimator {
    pub fn new() -> Self {
        let intro = Timeline::starting_at(0.0)
            .then(ASSEMBLE_DELAY_SEC, IntroCue::Assemble)
            .then(COMPLETE_DELAY_SEC, IntroCue::Complete);
        Self {
            phases: PhaseMachine::new(),
            intro,
            scale: ScaleTrack::Hold(INTRO_SCALE),
            pulse: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phases.current()
    }

    pub fn scale(&self, now: f32) -> f32 {
        self.scale.value(now)
    }

    pub fn pulse_active(&self) -> bool {
        self.pulse.is_some()
    }

    /// Start click feedback. Ignored while a pulse is already running.
    pub fn click(&mut self, now: f32) -> bool {
        if self.pulse.is_some() {
            return false;
        }
        let from = self.scale.value(now);
        self.scale = ScaleTrack::Tween(Tween::new(
            from,
            CLICK_SCALE,
            now,
            CLICK_GROW_SEC,
            Ease::QuadOut,
        ));
        self.pulse = Some(
            Timeline::starting_at(now)
                .then(CLICK_GROW_SEC, PulseCue::Peak)
                .then(CLICK_SETTLE_SEC, PulseCue::Settled),
        );
        true
    }

    pub fn advance(&mut self, now: f32) -> AnimatorEvents {
        let mut events = AnimatorEvents::default();

        for (at, cue) in self.intro.advance(now) {
            match cue {
                IntroCue::Assemble => {
                    if self.phases.enter(Phase::Assembling) {
                        events.entered.push(Phase::Assembling);
                    }
                    // a running pulse already settles at the display size; a
                    // finished one left the scale there, so grow from wherever it is
                    if self.pulse.is_none() {
                        self.scale = ScaleTrack::Tween(Tween::new(
                            self.scale.value(at),
                            DISPLAY_SCALE,
                            at,
                            GROW_DURATION_SEC,
                            Ease::CubicOut,
                        ));
                    }
                }
                IntroCue::Complete => {
                    if self.phases.enter(Phase::Complete) {
                        events.entered.push(Phase::Complete);
                    }
                }
            }
        }

        let mut settled = false;
        if let Some(pulse) = self.pulse.as_mut() {
            for (at, cue) in pulse.advance(now) {
                match cue {
                    PulseCue::Peak => {
                        events.click_completed = true;
                        self.scale = ScaleTrack::Tween(Tween::new(
                            CLICK_SCALE,
                            DISPLAY_SCALE,
                            at,
                            CLICK_SETTLE_SEC,
                            Ease::QuadOut,
                        ));
                    }
                    PulseCue::Settled => settled = true,
                }
            }
        }
        if settled {
            self.pulse = None;
        }

        events
    }
}
