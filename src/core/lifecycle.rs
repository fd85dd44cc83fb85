// Frame-loop bookkeeping and the ordered teardown list for one mount session.

use std::cell::RefCell;
use std::rc::Rc;

/// Scheduling state of one display-refresh loop.
///
/// The id is whatever the host scheduler returned for the pending callback.
/// Once cancelled a slot never accepts another schedule, so a tick that is
/// already running cannot bring its loop back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopSlot {
    #[default]
    Idle,
    Pending(i32),
    Cancelled,
}

impl LoopSlot {
    pub fn schedule(&mut self, id: i32) -> bool {
        match self {
            LoopSlot::Cancelled => false,
            _ => {
                *self = LoopSlot::Pending(id);
                true
            }
        }
    }

    /// The pending callback ran. Returns `false` if the loop was cancelled.
    pub fn fired(&mut self) -> bool {
        match self {
            LoopSlot::Cancelled => false,
            _ => {
                *self = LoopSlot::Idle;
                true
            }
        }
    }

    /// Stop the loop for good, yielding the id still waiting to run.
    pub fn cancel(&mut self) -> Option<i32> {
        let pending = match *self {
            LoopSlot::Pending(id) => Some(id),
            _ => None,
        };
        *self = LoopSlot::Cancelled;
        pending
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoopSlot::Pending(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoopSlot::Cancelled)
    }
}

pub type SharedSlot = Rc<RefCell<LoopSlot>>;

/// Every loop started by a mount, cancellable in one sweep.
#[derive(Default)]
pub struct LoopRegistry {
    slots: Vec<(&'static str, SharedSlot)>,
}

impl LoopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &'static str) -> SharedSlot {
        let slot = Rc::new(RefCell::new(LoopSlot::Idle));
        self.slots.push((name, slot.clone()));
        slot
    }

    /// Cancel all loops and return the host ids that must be cancelled.
    pub fn cancel_all(&mut self) -> Vec<i32> {
        let mut ids = Vec::new();
        for (name, slot) in &self.slots {
            if let Some(id) = slot.borrow_mut().cancel() {
                log::debug!("[teardown] cancel {name} loop (id {id})");
                ids.push(id);
            }
        }
        ids
    }

    pub fn pending_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.borrow().is_pending())
            .count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

type Step = Box<dyn FnOnce() -> anyhow::Result<()>>;

/// Named release steps run in registration order, each at most once.
///
/// A failing step is logged and the remaining steps still run; running the
/// list again afterwards does nothing.
#[derive(Default)]
pub struct Teardown {
    steps: Vec<(&'static str, Step)>,
    done: bool,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, step: impl FnOnce() -> anyhow::Result<()> + 'static) {
        self.steps.push((name, Box::new(step)));
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the names of the steps that failed.
    pub fn run(&mut self) -> Vec<&'static str> {
        if self.done {
            return Vec::new();
        }
        self.done = true;
        let mut failed = Vec::new();
        for (name, step) in self.steps.drain(..) {
            if let Err(e) = step() {
                log::warn!("[teardown] {name} failed: {e:#}");
                failed.push(name);
            }
        }
        log::info!("[teardown] complete ({} failed)", failed.len());
        failed
    }
}

/// Create one item per spec, in order. If any creation fails, the items made
/// so far are undone newest first before the error is returned.
pub fn create_or_unwind<S, T, E>(
    specs: impl IntoIterator<Item = S>,
    mut create: impl FnMut(S) -> Result<T, E>,
    mut undo: impl FnMut(&T),
) -> Result<Vec<T>, E> {
    let mut made = Vec::new();
    for spec in specs {
        match create(spec) {
            Ok(item) => made.push(item),
            Err(e) => {
                for item in made.iter().rev() {
                    undo(item);
                }
                return Err(e);
            }
        }
    }
    Ok(made)
}

/// Apply `f` to every item, continuing past failures; the error lists them all.
pub fn attempt_all<T: Copy + std::fmt::Debug>(
    items: &[T],
    mut f: impl FnMut(T) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let failed: Vec<String> = items
        .iter()
        .filter_map(|&item| f(item).err().map(|e| format!("{item:?}: {e:#}")))
        .collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("{} failed: {}", failed.len(), failed.join("; ")))
    }
}
