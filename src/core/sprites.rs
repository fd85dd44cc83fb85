// Drifting billboard sprites that sit behind and around the sigil.

use super::constants::{
    SCATTER_XY, SCATTER_Z, SPRITE_BOB_PER_TICK, SPRITE_ENTRANCE_DELAY_SEC, SPRITE_ENTRANCE_SCALE,
    SPRITE_ENTRANCE_SEC, SPRITE_REST_SCALE, SPRITE_SPIN_PER_TICK, SPRITE_STAGGER_SEC,
};
use super::timeline::{Ease, Tween};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub position: Vec3,
    pub rotation: f32,
    pub scale: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub rotation: f32,
    pub scale: f32,
    pub _pad: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct SpriteField {
    sprites: Vec<Sprite>,
    entrances: Vec<Tween>,
}

impl SpriteField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let sprites = (0..count)
            .map(|_| Sprite {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * SCATTER_XY,
                    (rng.gen::<f32>() - 0.5) * 2.0 * SCATTER_XY,
                    (rng.gen::<f32>() - 0.5) * 2.0 * SCATTER_Z,
                ),
                rotation: 0.0,
                scale: SPRITE_ENTRANCE_SCALE,
            })
            .collect();
        let entrances = (0..count)
            .map(|i| {
                Tween::new(
                    SPRITE_ENTRANCE_SCALE,
                    SPRITE_REST_SCALE,
                    SPRITE_ENTRANCE_DELAY_SEC + i as f32 * SPRITE_STAGGER_SEC,
                    SPRITE_ENTRANCE_SEC,
                    Ease::QuadOut,
                )
            })
            .collect();
        Self { sprites, entrances }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Spin every sprite, bob it on a per-index phase and apply the entrance.
    pub fn step(&mut self, time: f32) {
        for (i, (sprite, entrance)) in self.sprites.iter_mut().zip(&self.entrances).enumerate() {
            sprite.rotation += SPRITE_SPIN_PER_TICK;
            sprite.position.y += (time + i as f32).sin() * SPRITE_BOB_PER_TICK;
            sprite.scale = entrance.value(time);
        }
    }

    pub fn write_instances(&self, out: &mut Vec<SpriteInstance>) {
        out.clear();
        out.extend(self.sprites.iter().map(|s| SpriteInstance {
            position: s.position.to_array(),
            rotation: s.rotation,
            scale: s.scale,
            _pad: [0.0; 3],
        }));
    }
}
