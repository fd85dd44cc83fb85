// One mount's simulation state and the per-frame update contract.

use super::camera::{OrthoCamera, Viewport};
use super::constants::{
    DEFAULT_SEED, DISPLACEMENT_STRENGTH, PARTICLE_COUNT, SPRITE_COUNT, TIME_STEP_SEC,
};
use super::particles::ParticleField;
use super::phase::Phase;
use super::sigil::{SigilAnimator, SigilTransform};
use super::sprites::SpriteField;
use super::uniforms::{SigilUniforms, UniformSet};
use glam::Vec3;

/// Runtime knobs for a scene. The mount API always uses `Default`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    pub particle_count: usize,
    pub sprite_count: usize,
    pub displacement_strength: f32,
    /// Nominal clock advance per frame, in seconds.
    pub time_step: f32,
    pub seed: u64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            sprite_count: SPRITE_COUNT,
            displacement_strength: DISPLACEMENT_STRENGTH,
            time_step: TIME_STEP_SEC,
            seed: DEFAULT_SEED,
        }
    }
}

/// External input staged between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub audio_bass: f32,
    /// Normalized pointer, y up.
    pub pointer: [f32; 2],
    /// A click on the mount region that should start click feedback.
    pub click: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub entered: Vec<Phase>,
    /// The click pulse reached its peak this frame; the callback is due.
    pub click_completed: bool,
}

pub struct SceneState {
    params: SceneParams,
    time: f32,
    uniforms: UniformSet,
    camera: OrthoCamera,
    viewport: Viewport,
    animator: SigilAnimator,
    transform: SigilTransform,
    particles: ParticleField,
    sprites: SpriteField,
}

impl SceneState {
    pub fn new(params: SceneParams, viewport: Viewport) -> Self {
        // sprites get their own stream so changing the particle count keeps their layout
        let sprite_seed = params.seed.wrapping_add(1);
        Self {
            params,
            time: 0.0,
            uniforms: UniformSet::new(params.displacement_strength),
            camera: OrthoCamera::for_viewport(&viewport),
            viewport,
            animator: SigilAnimator::new(),
            transform: SigilTransform::default(),
            particles: ParticleField::new(params.particle_count, params.seed),
            sprites: SpriteField::new(params.sprite_count, sprite_seed),
        }
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }
    pub fn time(&self) -> f32 {
        self.time
    }
    pub fn phase(&self) -> Phase {
        self.animator.phase()
    }
    pub fn uniforms(&self) -> &UniformSet {
        &self.uniforms
    }
    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    pub fn transform(&self) -> &SigilTransform {
        &self.transform
    }
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }
    pub fn sprites(&self) -> &SpriteField {
        &self.sprites
    }
    pub fn pulse_active(&self) -> bool {
        self.animator.pulse_active()
    }

    /// Advance the simulation by one nominal step.
    pub fn step(&mut self, input: &FrameInput) -> FrameOutput {
        self.time += self.params.time_step;
        let t = self.time;

        self.uniforms.set_time(t);
        self.uniforms.set_audio_bass(input.audio_bass);
        self.uniforms.set_pointer(input.pointer);

        if input.click && self.animator.click(t) {
            log::debug!("[phase] click pulse at {t:.2}s");
        }
        let events = self.animator.advance(t);
        for phase in &events.entered {
            log::info!("[phase] {:?} at {t:.2}s", phase);
        }

        self.transform.scale = Vec3::splat(self.animator.scale(t));
        self.transform.apply_idle_rotation(t);
        self.particles.step();
        self.sprites.step(t);

        FrameOutput {
            entered: events.entered,
            click_completed: events.click_completed,
        }
    }

    /// Returns `true` when the viewport actually changed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.camera.resize(&viewport);
        true
    }

    pub fn gpu_uniforms(&self) -> SigilUniforms {
        self.uniforms
            .to_gpu(self.camera.view_projection(), self.transform.model_matrix())
    }
}
