// Host-side tests for the terminal status line and the bass reducer.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod phase {
    include!("../src/core/phase.rs");
}
mod terminal {
    include!("../src/core/terminal.rs");
}
mod bass {
    include!("../src/core/bass.rs");
}

use bass::bass_energy;
use constants::*;
use phase::Phase;
use terminal::{TerminalState, CARET, PROMPT};

#[test]
fn first_line_shows_loading_with_caret() {
    let mut term = TerminalState::new();
    let line = term.tick(Phase::Loading, 0.0);
    assert_eq!(line, format!("{PROMPT}loading…{CARET}"));
}

#[test]
fn caret_toggles_every_thirty_frames() {
    let mut term = TerminalState::new();
    let mut visible = Vec::new();
    for f in 0..(CARET_TOGGLE_FRAMES * 4) {
        let line = term.tick(Phase::Complete, f as f64 / 60.0);
        visible.push(line.ends_with(CARET));
    }
    let n = CARET_TOGGLE_FRAMES as usize;
    assert!(visible[..n].iter().all(|v| *v));
    assert!(visible[n..2 * n].iter().all(|v| !*v));
    assert!(visible[2 * n..3 * n].iter().all(|v| *v));
    assert!(visible[3 * n..].iter().all(|v| !*v));
}

#[test]
fn status_refreshes_on_its_own_tick() {
    let mut term = TerminalState::new();
    term.tick(Phase::Loading, 0.0);
    assert_eq!(term.status(), "loading…");

    // phase changed, but the refresh is not due yet
    let line = term.tick(Phase::Assembling, 0.5);
    assert!(line.contains("loading…"));

    let line = term.tick(Phase::Assembling, STATUS_REFRESH_SEC);
    assert!(line.contains("assembling sigil layers…"));

    term.tick(Phase::Complete, STATUS_REFRESH_SEC + 0.9);
    assert_eq!(term.status(), "assembling sigil layers…");
    term.tick(Phase::Complete, 2.0 * STATUS_REFRESH_SEC);
    assert_eq!(term.status(), "ready");
}

#[test]
fn status_reads_the_phase_at_refresh_time_only() {
    // a phase visited entirely between refreshes is never shown
    let mut term = TerminalState::new();
    term.tick(Phase::Loading, 0.0);
    term.tick(Phase::Assembling, 0.3);
    term.tick(Phase::Complete, 1.0);
    assert_eq!(term.status(), "ready");
}

#[test]
fn silent_or_missing_spectrum_is_zero() {
    assert_eq!(bass_energy(&[]), 0.0);
    assert_eq!(bass_energy(&[0; 128]), 0.0);
}

#[test]
fn full_bass_maps_to_the_ceiling() {
    let mut bins = [0u8; 128];
    bins[..BASS_BIN_COUNT].fill(255);
    assert!((bass_energy(&bins) - AUDIO_BASS_MAX).abs() < 1e-6);
}

#[test]
fn only_the_lowest_bins_count() {
    let mut bins = [255u8; 128];
    bins[..BASS_BIN_COUNT].fill(0);
    assert_eq!(bass_energy(&bins), 0.0);

    let mut half = [0u8; 128];
    half[..BASS_BIN_COUNT / 2].fill(255);
    assert!((bass_energy(&half) - AUDIO_BASS_MAX * 0.5).abs() < 1e-6);
}

#[test]
fn short_spectra_average_what_is_there() {
    assert!((bass_energy(&[255, 255, 255]) - AUDIO_BASS_MAX).abs() < 1e-6);
    let e = bass_energy(&[51]);
    assert!((e - 0.2 * AUDIO_BASS_MAX).abs() < 1e-6);
}
