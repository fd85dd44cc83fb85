/// Intro-animation stage shown by the terminal overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    #[default]
    Loading,
    Assembling,
    Complete,
}

impl Phase {
    pub fn status_text(self) -> &'static str {
        match self {
            Phase::Loading => "loading…",
            Phase::Assembling => "assembling sigil layers…",
            Phase::Complete => "ready",
        }
    }

    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Loading => Some(Phase::Assembling),
            Phase::Assembling => Some(Phase::Complete),
            Phase::Complete => None,
        }
    }
}

/// Single-writer phase holder that only ever steps forward by one.
#[derive(Clone, Debug, Default)]
pub struct PhaseMachine {
    current: Phase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    /// Move to `target` if it is exactly the successor of the current phase.
    ///
    /// Returns `false` (and leaves the state untouched) for repeats,
    /// regressions and skips.
    pub fn enter(&mut self, target: Phase) -> bool {
        if self.current.next() == Some(target) {
            self.current = target;
            true
        } else {
            log::warn!(
                "[phase] rejected transition {:?} -> {:?}",
                self.current,
                target
            );
            false
        }
    }
}
