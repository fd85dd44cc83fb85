// Host-side tests for the tween/timeline primitives and the phase machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod timeline {
    include!("../src/core/timeline.rs");
}
mod phase {
    include!("../src/core/phase.rs");
}

use phase::{Phase, PhaseMachine};
use timeline::{Ease, Timeline, Tween};

#[test]
fn eases_hit_both_endpoints() {
    for ease in [Ease::Linear, Ease::QuadOut, Ease::CubicOut] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        // clamped outside [0, 1]
        assert_eq!(ease.apply(-3.0), 0.0);
        assert!((ease.apply(7.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn ease_out_leads_linear() {
    let t = 0.3;
    assert!(Ease::QuadOut.apply(t) > Ease::Linear.apply(t));
    assert!(Ease::CubicOut.apply(t) > Ease::QuadOut.apply(t));
}

#[test]
fn tween_holds_before_start_and_after_end() {
    let tw = Tween::new(0.1, 1.5, 1.0, 2.0, Ease::CubicOut);
    assert_eq!(tw.value(0.0), 0.1);
    assert_eq!(tw.value(1.0), 0.1);
    assert!((tw.value(3.0) - 1.5).abs() < 1e-6);
    assert!((tw.value(10.0) - 1.5).abs() < 1e-6);
    assert!(!tw.is_finished(2.99));
    assert!(tw.is_finished(3.0));
}

#[test]
fn tween_is_monotonic_while_running() {
    let tw = Tween::new(0.1, 1.5, 0.0, 2.0, Ease::CubicOut);
    let mut last = tw.value(0.0);
    for i in 1..=100 {
        let v = tw.value(i as f32 * 0.02);
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn zero_length_tween_jumps_at_start() {
    let tw = Tween::new(0.0, 1.0, 2.0, 0.0, Ease::Linear);
    assert_eq!(tw.value(1.9), 0.0);
    assert_eq!(tw.value(2.0), 1.0);
}

#[test]
fn timeline_fires_each_cue_once_in_order() {
    let mut tl = Timeline::starting_at(0.0).then(1.0, "a").then(1.0, "b");
    assert_eq!(tl.next_at(), Some(1.0));
    assert!(tl.advance(0.5).is_empty());

    let fired = tl.advance(1.0);
    assert_eq!(fired, vec![(1.0, "a")]);
    assert!(tl.advance(1.5).is_empty());

    assert_eq!(tl.advance(2.5), vec![(2.0, "b")]);
    assert!(tl.is_done());
    assert!(tl.advance(100.0).is_empty());
    assert_eq!(tl.next_at(), None);
}

#[test]
fn timeline_catches_up_after_a_long_gap() {
    let mut tl = Timeline::starting_at(5.0)
        .then(1.0, 1)
        .then(1.0, 2)
        .then(0.5, 3);
    let fired: Vec<i32> = tl.advance(20.0).into_iter().map(|(_, e)| e).collect();
    assert_eq!(fired, vec![1, 2, 3]);
}

#[test]
fn phases_only_step_forward() {
    let mut m = PhaseMachine::new();
    assert_eq!(m.current(), Phase::Loading);

    assert!(!m.enter(Phase::Complete), "skip rejected");
    assert!(!m.enter(Phase::Loading), "repeat rejected");
    assert!(m.enter(Phase::Assembling));
    assert!(!m.enter(Phase::Assembling));
    assert!(!m.enter(Phase::Loading), "regression rejected");
    assert!(m.enter(Phase::Complete));
    assert!(!m.enter(Phase::Complete));
    assert_eq!(m.current(), Phase::Complete);
}

#[test]
fn status_text_per_phase() {
    assert_eq!(Phase::Loading.status_text(), "loading…");
    assert_eq!(Phase::Assembling.status_text(), "assembling sigil layers…");
    assert_eq!(Phase::Complete.status_text(), "ready");
    assert!(Phase::Loading < Phase::Assembling && Phase::Assembling < Phase::Complete);
}
