use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod pointer;
pub mod viewport;

pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use viewport::wire_resize;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Every DOM listener a mount installed, so teardown can remove them all.
///
/// Closures stay owned here instead of being leaked with `forget`.
#[derive(Default)]
pub struct Listeners {
    entries: SmallVec<[Listener; 6]>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow::anyhow!("add {kind} listener: {e:?}"))?;
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every listener; keeps going past individual failures.
    pub fn clear(&mut self) -> anyhow::Result<()> {
        let mut failed = Vec::new();
        for l in self.entries.drain(..) {
            if l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref())
                .is_err()
            {
                failed.push(l.kind);
            }
        }
        if failed.is_empty() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("could not remove listeners: {failed:?}"))
        }
    }
}
