// Host-side tests for the particle and sprite fields.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod sprites {
    include!("../src/core/sprites.rs");
}

use constants::*;
use particles::{target_xy, ParticleField, ParticleInstance};
use sprites::{SpriteField, SpriteInstance};

#[test]
fn targets_split_each_column_across_the_arms() {
    assert_eq!(target_xy(0).x, -PARTICLE_ARM_X);
    assert_eq!(target_xy(PARTICLE_COLUMN_SPAN / 2 - 1).x, -PARTICLE_ARM_X);
    assert_eq!(target_xy(PARTICLE_COLUMN_SPAN / 2).x, PARTICLE_ARM_X);
    assert_eq!(target_xy(0).y, -0.5);
    // wraps every column
    assert_eq!(target_xy(PARTICLE_COLUMN_SPAN), target_xy(0));
    for i in 0..PARTICLE_COUNT {
        let t = target_xy(i);
        assert!((-0.5..0.5).contains(&t.y));
    }
}

#[test]
fn scatter_stays_inside_the_volume() {
    let field = ParticleField::new(PARTICLE_COUNT, DEFAULT_SEED);
    assert_eq!(field.len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert!(p.position.x.abs() <= SCATTER_XY);
        assert!(p.position.y.abs() <= SCATTER_XY);
        assert!(p.position.z.abs() <= SCATTER_Z);
        assert!(p.size >= PARTICLE_SIZE_MIN && p.size <= PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN);
        assert_eq!(p.color, GLOW_RGB);
    }
}

#[test]
fn every_step_shrinks_the_distance_to_target() {
    let mut field = ParticleField::new(300, 7);
    let dist = |f: &ParticleField, i: usize| {
        f.particles()[i].position.distance(f.target(i).expect("target"))
    };
    let before: Vec<f32> = (0..field.len()).map(|i| dist(&field, i)).collect();
    field.step();
    for (i, d0) in before.iter().enumerate() {
        let d1 = dist(&field, i);
        let expected = d0 * (1.0 - COALESCE_RATE);
        assert!((d1 - expected).abs() < 1e-4, "particle {i}: {d1} vs {expected}");
    }
}

#[test]
fn particles_converge_without_arriving() {
    let mut field = ParticleField::new(100, 3);
    for _ in 0..1000 {
        field.step();
    }
    for (i, p) in field.particles().iter().enumerate() {
        let d = p.position.distance(field.target(i).expect("target"));
        assert!(d < 1e-3);
    }
    assert!(field.target(100).is_none());
}

#[test]
fn particle_instances_mirror_the_field() {
    assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
    let field = ParticleField::new(5, 1);
    let mut out = vec![bytemuck::Zeroable::zeroed(); 9];
    field.write_instances(&mut out);
    assert_eq!(out.len(), 5);
    assert_eq!(out[2].position, field.particles()[2].position.to_array());
    assert_eq!(out[2].size, field.particles()[2].size);
}

#[test]
fn empty_fields_are_fine() {
    let mut particles = ParticleField::new(0, 1);
    particles.step();
    assert!(particles.is_empty());
    let mut sprites = SpriteField::new(0, 1);
    sprites.step(1.0);
    assert!(sprites.is_empty());
}

#[test]
fn sprites_enter_with_a_stagger_and_rest_small() {
    let mut field = SpriteField::new(SPRITE_COUNT, DEFAULT_SEED);
    field.step(0.5);
    assert!(field
        .sprites()
        .iter()
        .all(|s| (s.scale - SPRITE_ENTRANCE_SCALE).abs() < 1e-6));

    field.step(SPRITE_ENTRANCE_DELAY_SEC + 0.5);
    let first = field.sprites()[0].scale;
    let last = field.sprites()[SPRITE_COUNT - 1].scale;
    assert!(first < last, "earlier sprites shrink first");

    let done = SPRITE_ENTRANCE_DELAY_SEC + SPRITE_COUNT as f32 * SPRITE_STAGGER_SEC + SPRITE_ENTRANCE_SEC;
    field.step(done);
    assert!(field
        .sprites()
        .iter()
        .all(|s| (s.scale - SPRITE_REST_SCALE).abs() < 1e-5));
}

#[test]
fn sprites_spin_a_fixed_amount_per_tick() {
    let mut field = SpriteField::new(4, 11);
    for k in 1..=10 {
        field.step(k as f32 * TIME_STEP_SEC);
    }
    for s in field.sprites() {
        assert!((s.rotation - 10.0 * SPRITE_SPIN_PER_TICK).abs() < 1e-5);
    }
    let mut out: Vec<SpriteInstance> = Vec::new();
    field.write_instances(&mut out);
    assert_eq!(out.len(), 4);
    assert_eq!(out[3].rotation, field.sprites()[3].rotation);
}
