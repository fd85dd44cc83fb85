// Easing, scalar tweens and an explicit cue timeline.
//
// Every animation in the scene is evaluated against one monotonic clock
// (seconds since the render loop started), so tests can drive time forward
// deterministically instead of waiting on timers.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    QuadOut,
    /// Cubic ease-out.
    CubicOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t).powi(2),
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A scalar interpolation anchored at an absolute start time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    /// Normalized progress in [0, 1]; zero-length tweens complete at `start`.
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return if now >= self.start { 1.0 } else { 0.0 };
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self, now: f32) -> f32 {
        let k = self.ease.apply(self.progress(now));
        self.from + (self.to - self.from) * k
    }

    pub fn end(&self) -> f32 {
        self.start + self.duration.max(0.0)
    }

    pub fn is_finished(&self, now: f32) -> bool {
        now >= self.end()
    }
}

#[derive(Clone, Debug)]
struct Cue<E> {
    at: f32,
    effect: E,
}

/// Ordered `(duration, effect)` steps laid out on one clock.
///
/// Each `then` places its effect `duration` seconds after the previous step.
/// `advance` hands back every effect whose time has been reached, in order,
/// exactly once, paired with the time it was scheduled for.
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    origin: f32,
    cues: Vec<Cue<E>>,
    cursor: usize,
}

impl<E: Clone> Timeline<E> {
    pub fn starting_at(origin: f32) -> Self {
        Self {
            origin,
            cues: Vec::new(),
            cursor: 0,
        }
    }

    pub fn then(mut self, duration: f32, effect: E) -> Self {
        let last = self.cues.last().map(|c| c.at).unwrap_or(self.origin);
        self.cues.push(Cue {
            at: last + duration.max(0.0),
            effect,
        });
        self
    }

    pub fn advance(&mut self, now: f32) -> Vec<(f32, E)> {
        let mut fired = Vec::new();
        while let Some(cue) = self.cues.get(self.cursor) {
            if cue.at > now {
                break;
            }
            fired.push((cue.at, cue.effect.clone()));
            self.cursor += 1;
        }
        fired
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.cues.len()
    }

    /// Absolute time of the next pending cue.
    pub fn next_at(&self) -> Option<f32> {
        self.cues.get(self.cursor).map(|c| c.at)
    }
}
