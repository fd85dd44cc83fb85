// Host-side tests for pointer normalization and staged input.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn region() -> Bounds {
    Bounds::new(100.0, 50.0, 400.0, 200.0)
}

#[test]
fn normalize_flips_the_vertical_axis() {
    let b = region();
    assert_eq!(normalize_pointer(100.0, 50.0, &b), [0.0, 1.0]);
    assert_eq!(normalize_pointer(500.0, 250.0, &b), [1.0, 0.0]);
    assert_eq!(normalize_pointer(300.0, 150.0, &b), [0.5, 0.5]);
}

#[test]
fn normalize_clamps_outside_the_region() {
    let b = region();
    assert_eq!(normalize_pointer(0.0, 0.0, &b), [0.0, 1.0]);
    assert_eq!(normalize_pointer(9000.0, 9000.0, &b), [1.0, 0.0]);
}

#[test]
fn degenerate_input_maps_to_centre() {
    let b = region();
    assert_eq!(normalize_pointer(f64::NAN, 10.0, &b), [0.5, 0.5]);
    assert_eq!(normalize_pointer(10.0, f64::INFINITY, &b), [0.5, 0.5]);
    let zero = Bounds::new(0.0, 0.0, 0.0, 100.0);
    assert_eq!(normalize_pointer(10.0, 10.0, &zero), [0.5, 0.5]);
}

#[test]
fn bounds_contain_their_edges() {
    let b = region();
    assert!(b.contains(100.0, 50.0));
    assert!(b.contains(500.0, 250.0));
    assert!(!b.contains(99.0, 60.0));
    assert_eq!(local_px(150.0, 70.0, &b), Vec2::new(50.0, 20.0));
}

#[test]
fn snapshot_reflects_the_latest_move() {
    let mut p = PointerState::new();
    assert_eq!(p.snapshot(), InputSnapshot::default());
    p.set_hovered(true);
    p.record_move(300.0, 150.0, &region());
    p.record_move(500.0, 50.0, &region());
    let s = p.snapshot();
    assert!(s.hovered);
    assert_eq!(s.uv, [1.0, 1.0]);
    assert_eq!(s.px, Vec2::new(400.0, 0.0));
}

#[test]
fn clicks_are_taken_once() {
    let mut p = PointerState::new();
    p.record_click();
    p.record_click();
    assert_eq!(p.take_clicks(), 2);
    assert_eq!(p.take_clicks(), 0);
}

#[test]
fn staged_moves_keep_the_newest() {
    let mut p = PointerState::new();
    let b = Bounds::new(0.0, 0.0, 1000.0, 1000.0);
    for i in 0..(MAX_STAGED_MOVES + 4) {
        p.record_move(i as f64, 0.0, &b);
    }
    let moves = p.drain_moves();
    assert_eq!(moves.len(), MAX_STAGED_MOVES);
    assert_eq!(moves[0], Vec2::new(4.0, 0.0));
    assert_eq!(*moves.last().expect("moves"), Vec2::new((MAX_STAGED_MOVES + 3) as f32, 0.0));
    // evicted moves never affect the live position
    assert_eq!(p.snapshot().px, Vec2::new((MAX_STAGED_MOVES + 3) as f32, 0.0));
    assert!(p.drain_moves().is_empty());
}

#[test]
fn non_finite_moves_are_not_staged() {
    let mut p = PointerState::new();
    p.record_move(f64::NAN, 0.0, &region());
    assert!(p.drain_moves().is_empty());
    assert_eq!(p.snapshot().uv, [0.5, 0.5]);
}
