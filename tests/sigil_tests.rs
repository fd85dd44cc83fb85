// Host-side tests for the sigil animator: intro phases, grow and click pulse.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}
mod phase {
    include!("../src/core/phase.rs");
}
mod sigil {
    include!("../src/core/sigil.rs");
}

use constants::*;
use phase::Phase;
use sigil::{SigilAnimator, SigilTransform};

const DT: f32 = 0.016;

/// Drive the animator at a fixed step, returning every phase entered.
fn run_until(anim: &mut SigilAnimator, from: f32, to: f32) -> Vec<(f32, Phase)> {
    let mut entered = Vec::new();
    let mut t = from;
    while t < to {
        t += DT;
        for p in anim.advance(t).entered {
            entered.push((t, p));
        }
    }
    entered
}

#[test]
fn intro_phases_fire_once_in_order() {
    let mut anim = SigilAnimator::new();
    assert_eq!(anim.phase(), Phase::Loading);
    let entered = run_until(&mut anim, 0.0, 3.0);
    let phases: Vec<Phase> = entered.iter().map(|(_, p)| *p).collect();
    assert_eq!(phases, vec![Phase::Assembling, Phase::Complete]);

    let (t_assemble, _) = entered[0];
    let (t_complete, _) = entered[1];
    assert!((t_assemble - 1.0).abs() <= DT);
    assert!((t_complete - 2.0).abs() <= DT);
    assert_eq!(anim.phase(), Phase::Complete);
}

#[test]
fn scale_holds_then_grows_to_display_size() {
    let mut anim = SigilAnimator::new();
    anim.advance(0.5);
    assert_eq!(anim.scale(0.5), INTRO_SCALE);

    anim.advance(1.0);
    let mid = anim.scale(2.0);
    assert!(mid > INTRO_SCALE && mid < DISPLAY_SCALE);

    anim.advance(3.0);
    assert!((anim.scale(3.0) - DISPLAY_SCALE).abs() < 1e-5);
    assert!((anim.scale(10.0) - DISPLAY_SCALE).abs() < 1e-5);
}

#[test]
fn click_pulse_peaks_then_settles() {
    let mut anim = SigilAnimator::new();
    run_until(&mut anim, 0.0, 4.0);
    let t0 = 4.0;
    assert!(anim.click(t0));
    assert!(anim.pulse_active());

    // grows toward the peak
    let ev = anim.advance(t0 + 0.25);
    assert!(!ev.click_completed);
    let s = anim.scale(t0 + 0.25);
    assert!(s > DISPLAY_SCALE && s < CLICK_SCALE);

    let ev = anim.advance(t0 + CLICK_GROW_SEC);
    assert!(ev.click_completed);
    assert!((anim.scale(t0 + CLICK_GROW_SEC) - CLICK_SCALE).abs() < 1e-5);

    let end = t0 + CLICK_GROW_SEC + CLICK_SETTLE_SEC;
    let ev = anim.advance(end);
    assert!(!ev.click_completed);
    assert!(!anim.pulse_active());
    assert!((anim.scale(end) - DISPLAY_SCALE).abs() < 1e-5);
}

#[test]
fn click_completes_exactly_once() {
    let mut anim = SigilAnimator::new();
    anim.advance(3.0);
    assert!(anim.click(3.0));
    let mut completions = 0;
    let mut t = 3.0;
    while t < 5.0 {
        t += DT;
        if anim.advance(t).click_completed {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
}

#[test]
fn clicks_during_a_pulse_are_ignored() {
    let mut anim = SigilAnimator::new();
    anim.advance(3.0);
    assert!(anim.click(3.0));
    assert!(!anim.click(3.1));
    anim.advance(3.0 + CLICK_GROW_SEC + CLICK_SETTLE_SEC);
    assert!(anim.click(4.0), "a new pulse may start once settled");
}

#[test]
fn click_during_intro_does_not_restart_the_grow() {
    let mut anim = SigilAnimator::new();
    assert!(anim.click(0.5));
    // the Assemble cue lands while the pulse runs
    anim.advance(1.0);
    assert!(anim.advance(1.5).entered.is_empty());
    assert_eq!(anim.phase(), Phase::Assembling);
    anim.advance(2.0);
    assert!((anim.scale(2.0) - DISPLAY_SCALE).abs() < 1e-5);
}

#[test]
fn idle_rotation_follows_the_clock() {
    let mut tr = SigilTransform::default();
    assert_eq!(tr.scale, glam::Vec3::splat(INTRO_SCALE));
    tr.apply_idle_rotation(10.0);
    assert!((tr.rotation_y - 10.0 * SPIN_Y_RATE).abs() < 1e-6);
    assert!(tr.rotation_x.abs() <= WOBBLE_X_AMPLITUDE);

    let m = tr.model_matrix();
    let (scale, _, translation) = m.to_scale_rotation_translation();
    assert!((scale - glam::Vec3::splat(INTRO_SCALE)).length() < 1e-4);
    assert!(translation.length() < 1e-6);
}

#[test]
fn early_click_never_snaps_back_to_intro_scale() {
    let mut anim = SigilAnimator::new();
    assert!(anim.click(DT));
    let mut last = anim.scale(DT);
    let mut t = DT;
    for _ in 0..200 {
        t += DT;
        anim.advance(t);
        let s = anim.scale(t);
        assert!((s - last).abs() < 0.2, "scale jumped {last} -> {s} at t={t}");
        last = s;
    }
    assert_eq!(anim.phase(), Phase::Complete);
    assert!((last - DISPLAY_SCALE).abs() < 1e-5);
}
