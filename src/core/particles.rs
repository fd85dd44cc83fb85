// Coalescing particle field.
//
// A fixed-capacity point cloud. Each tick every particle moves a constant
// fraction of the way toward its assigned target, so it approaches the glyph
// asymptotically and never "arrives" as a discrete event.

use super::constants::{
    COALESCE_RATE, GLOW_RGB, PARTICLE_ARM_X, PARTICLE_COLUMN_SPAN, PARTICLE_SIZE_MIN,
    PARTICLE_SIZE_SPAN, SCATTER_XY, SCATTER_Z,
};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
    pub size: f32,
}

/// GPU instance layout for one particle.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Target in the glyph plane for particle `index`.
///
/// Indices are laid out in columns of `PARTICLE_COLUMN_SPAN`; the first half
/// of each column stacks on the left arm, the second half on the right arm.
pub fn target_xy(index: usize) -> Vec2 {
    let row = index % PARTICLE_COLUMN_SPAN;
    let x = if row < PARTICLE_COLUMN_SPAN / 2 {
        -PARTICLE_ARM_X
    } else {
        PARTICLE_ARM_X
    };
    let y = -0.5 + row as f32 / PARTICLE_COLUMN_SPAN as f32;
    Vec2::new(x, y)
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    targets: Vec<Vec3>,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = Vec::with_capacity(count);
        let mut targets = Vec::with_capacity(count);
        for i in 0..count {
            let position = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * SCATTER_XY,
                (rng.gen::<f32>() - 0.5) * 2.0 * SCATTER_XY,
                (rng.gen::<f32>() - 0.5) * 2.0 * SCATTER_Z,
            );
            let size = rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN;
            particles.push(Particle {
                position,
                color: GLOW_RGB,
                size,
            });
            // depth stays where it was scattered; only the glyph plane coalesces
            targets.push(target_xy(i).extend(position.z));
        }
        Self { particles, targets }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn target(&self, index: usize) -> Option<Vec3> {
        self.targets.get(index).copied()
    }

    /// One exponential-smoothing step toward every target.
    pub fn step(&mut self) {
        for (p, target) in self.particles.iter_mut().zip(&self.targets) {
            p.position += (*target - p.position) * COALESCE_RATE;
        }
    }

    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| ParticleInstance {
            position: p.position.to_array(),
            size: p.size,
            color: p.color,
            _pad: 0.0,
        }));
    }
}
