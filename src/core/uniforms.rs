// Per-frame shader parameters.
//
// `UniformSet` is the coordinator-owned domain view; its setters enforce the
// declared ranges so every value reaching the GPU is finite and bounded.
// `SigilUniforms` is the std140-compatible block uploaded once per frame.

use super::constants::{AUDIO_BASS_MAX, DISPLACEMENT_STRENGTH};
use glam::{Mat4, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformSet {
    time: f32,
    audio_bass: f32,
    pointer: Vec2,
    displacement_strength: f32,
}

impl Default for UniformSet {
    fn default() -> Self {
        Self::new(DISPLACEMENT_STRENGTH)
    }
}

impl UniformSet {
    pub fn new(displacement_strength: f32) -> Self {
        Self {
            time: 0.0,
            audio_bass: 0.0,
            pointer: Vec2::splat(0.5),
            displacement_strength: finite_or(displacement_strength, DISPLACEMENT_STRENGTH),
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }
    pub fn audio_bass(&self) -> f32 {
        self.audio_bass
    }
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
    pub fn displacement_strength(&self) -> f32 {
        self.displacement_strength
    }

    pub fn set_time(&mut self, time: f32) {
        if time.is_finite() && time >= 0.0 {
            self.time = time;
        }
    }

    pub fn set_audio_bass(&mut self, bass: f32) {
        self.audio_bass = clamp_audio_bass(bass);
    }

    /// Non-finite components keep their previous value.
    pub fn set_pointer(&mut self, pointer: [f32; 2]) {
        let x = finite_or(pointer[0], self.pointer.x).clamp(0.0, 1.0);
        let y = finite_or(pointer[1], self.pointer.y).clamp(0.0, 1.0);
        self.pointer = Vec2::new(x, y);
    }

    pub fn to_gpu(&self, view_proj: Mat4, model: Mat4) -> SigilUniforms {
        SigilUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            time: self.time,
            audio_bass: self.audio_bass,
            pointer: self.pointer.to_array(),
            displacement_strength: self.displacement_strength,
            _pad: [0.0; 3],
        }
    }
}

pub fn clamp_audio_bass(bass: f32) -> f32 {
    if bass.is_finite() {
        bass.clamp(0.0, AUDIO_BASS_MAX)
    } else {
        0.0
    }
}

#[inline]
fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SigilUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub time: f32,
    pub audio_bass: f32,
    pub pointer: [f32; 2],
    pub displacement_strength: f32,
    pub _pad: [f32; 3],
}
