// Short-lived spark particles and speed-line layout for the particle overlay.
//
// Sparks are the only scene entity with a birth/death lifecycle: they are
// spawned stochastically by pointer movement near the overlay centre and
// removed in the same tick their life runs out.

use super::constants::{
    SPARK_DECAY_PER_TICK, SPARK_RADIUS_PX, SPARK_SPAWN_CHANCE, SPARK_SPEED_MIN, SPARK_SPEED_SPAN,
    SPEED_LINE_COUNT, SPEED_LINE_GAP_PX,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining life in (0, 1]; also the draw alpha.
    pub life: f32,
}

#[derive(Clone, Debug)]
pub struct SparkField {
    sparks: Vec<Spark>,
    rng: StdRng,
}

impl SparkField {
    pub fn new(seed: u64) -> Self {
        Self {
            sparks: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            sparks: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn live(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }

    /// React to one pointer-move event in overlay pixel coordinates.
    ///
    /// Only moves within `SPARK_RADIUS_PX` of the surface centre qualify, and
    /// a qualifying move spawns a spark with probability `SPARK_SPAWN_CHANCE`.
    /// Returns whether a spark was born.
    pub fn pointer_moved(&mut self, pointer: Vec2, surface: Vec2) -> bool {
        if !pointer.is_finite() {
            return false;
        }
        let center = surface * 0.5;
        if pointer.distance(center) >= SPARK_RADIUS_PX {
            return false;
        }
        if self.rng.gen::<f32>() >= SPARK_SPAWN_CHANCE {
            return false;
        }
        self.spawn(pointer);
        true
    }

    fn spawn(&mut self, at: Vec2) {
        let angle = self.rng.gen::<f32>() * TAU;
        let speed = self.rng.gen::<f32>() * SPARK_SPEED_SPAN + SPARK_SPEED_MIN;
        self.sparks.push(Spark {
            position: at,
            velocity: Vec2::from_angle(angle) * speed,
            life: 1.0,
        });
    }

    /// Move and age every spark, then drop the ones whose life ran out.
    pub fn tick(&mut self) {
        for s in &mut self.sparks {
            s.position += s.velocity;
            s.life -= SPARK_DECAY_PER_TICK;
        }
        self.sparks.retain(|s| s.life > 0.0);
    }
}

/// X positions of the speed-line fan starting at the pointer column.
pub fn speed_line_xs(pointer_x: f32) -> impl Iterator<Item = f32> {
    (0..SPEED_LINE_COUNT).map(move |i| pointer_x + i as f32 * SPEED_LINE_GAP_PX)
}
