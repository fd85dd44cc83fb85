// Pointer normalization and the staged input shared between frame loops.
//
// Listeners only write into `PointerState`; each loop reads a copied
// `InputSnapshot` at the start of its tick, so nothing mutates mid-frame.

use glam::Vec2;
use smallvec::SmallVec;

/// Upper bound on move events staged between two particle-overlay ticks.
/// Past it the oldest staged move is dropped; the overlay only needs the
/// recent trail, and `current` always holds the latest position.
pub const MAX_STAGED_MOVES: usize = 16;

/// Client-space rectangle of the mount region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }
}

/// Pointer position relative to the mount region, in CSS pixels.
#[inline]
pub fn local_px(client_x: f64, client_y: f64, bounds: &Bounds) -> Vec2 {
    Vec2::new(
        (client_x - bounds.left) as f32,
        (client_y - bounds.top) as f32,
    )
}

/// Map client coordinates into `[0,1]²` with the vertical axis flipped
/// (region top = 1). Degenerate bounds or non-finite input give the centre.
#[inline]
pub fn normalize_pointer(client_x: f64, client_y: f64, bounds: &Bounds) -> [f32; 2] {
    let w = bounds.width;
    let h = bounds.height;
    if !(w > 0.0 && h > 0.0) || !client_x.is_finite() || !client_y.is_finite() {
        return [0.5, 0.5];
    }
    let u = ((client_x - bounds.left) / w).clamp(0.0, 1.0);
    let v = 1.0 - ((client_y - bounds.top) / h).clamp(0.0, 1.0);
    [u as f32, v as f32]
}

/// Copy of the pointer state taken once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSnapshot {
    pub uv: [f32; 2],
    pub px: Vec2,
    pub hovered: bool,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            uv: [0.5, 0.5],
            px: Vec2::ZERO,
            hovered: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PointerState {
    current: InputSnapshot,
    pending_clicks: u32,
    pending_moves: SmallVec<[Vec2; MAX_STAGED_MOVES]>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the live pointer and stage the move for the particle overlay,
    /// evicting the oldest staged move once `MAX_STAGED_MOVES` are queued.
    pub fn record_move(&mut self, client_x: f64, client_y: f64, bounds: &Bounds) {
        self.current.uv = normalize_pointer(client_x, client_y, bounds);
        let px = local_px(client_x, client_y, bounds);
        if !px.is_finite() {
            return;
        }
        self.current.px = px;
        if self.pending_moves.len() >= MAX_STAGED_MOVES {
            self.pending_moves.remove(0);
        }
        self.pending_moves.push(px);
    }

    pub fn record_click(&mut self) {
        self.pending_clicks = self.pending_clicks.saturating_add(1);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.current.hovered = hovered;
    }

    pub fn snapshot(&self) -> InputSnapshot {
        self.current
    }

    pub fn take_clicks(&mut self) -> u32 {
        std::mem::take(&mut self.pending_clicks)
    }

    pub fn drain_moves(&mut self) -> SmallVec<[Vec2; MAX_STAGED_MOVES]> {
        std::mem::take(&mut self.pending_moves)
    }
}
