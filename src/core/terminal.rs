// Terminal status line state: phase text, caret blink and refresh tick.

use super::constants::{CARET_TOGGLE_FRAMES, STATUS_REFRESH_SEC};
use super::phase::Phase;

pub const PROMPT: &str = "> ";
pub const CARET: char = '_';

/// The status text is only re-read from the phase on a fixed wall-clock tick,
/// while the caret toggles on a frame count; the two cadences are independent.
#[derive(Clone, Debug)]
pub struct TerminalState {
    status: &'static str,
    caret_visible: bool,
    frame: u64,
    next_refresh: Option<f64>,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self {
            status: Phase::Loading.status_text(),
            caret_visible: true,
            frame: 0,
            next_refresh: None,
        }
    }
}

impl TerminalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &'static str {
        self.status
    }

    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Advance one frame and return the line to draw for it.
    pub fn tick(&mut self, phase: Phase, now_sec: f64) -> String {
        let due = self.next_refresh.map_or(true, |at| now_sec >= at);
        if due {
            self.status = phase.status_text();
            self.next_refresh = Some(now_sec + STATUS_REFRESH_SEC);
        }
        let line = self.line();
        self.frame += 1;
        if self.frame % CARET_TOGGLE_FRAMES == 0 {
            self.caret_visible = !self.caret_visible;
        }
        line
    }

    pub fn line(&self) -> String {
        let mut s = String::with_capacity(PROMPT.len() + self.status.len() + 1);
        s.push_str(PROMPT);
        s.push_str(self.status);
        if self.caret_visible {
            s.push(CARET);
        }
        s
    }
}
