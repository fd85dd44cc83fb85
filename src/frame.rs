use crate::core::lifecycle::{attempt_all, SharedSlot};
use crate::core::{FrameInput, Phase, SceneState, Viewport};
use crate::input::PointerState;
use crate::render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop whose scheduling state lives in a shared slot.
///
/// The closure reschedules itself after each tick unless its slot was
/// cancelled in the meantime. Dropping the loop drops the closure.
pub struct FrameLoop {
    name: &'static str,
    tick: TickClosure,
}

impl FrameLoop {
    pub fn start(name: &'static str, slot: SharedSlot, mut body: impl FnMut() + 'static) -> Self {
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let tick_weak = Rc::downgrade(&tick);
        let slot_tick = slot.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !slot_tick.borrow_mut().fired() {
                return;
            }
            body();
            if let Some(tick) = tick_weak.upgrade() {
                schedule(name, &slot_tick, &tick);
            }
        }) as Box<dyn FnMut()>));
        schedule(name, &slot, &tick);
        log::debug!("[mount] {name} loop started");
        Self { name, tick }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.tick.borrow_mut().take();
        log::debug!("[teardown] {} loop dropped", self.name);
    }
}

fn schedule(name: &'static str, slot: &SharedSlot, tick: &TickClosure) {
    if slot.borrow().is_cancelled() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    let cb = tick.borrow();
    let Some(cb) = cb.as_ref() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => {
            slot.borrow_mut().schedule(id);
        }
        Err(e) => log::error!("[mount] {name} loop could not schedule: {e:?}"),
    }
}

pub fn cancel_frames(ids: &[i32]) -> anyhow::Result<()> {
    let w = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    attempt_all(ids, |id| {
        w.cancel_animation_frame(id)
            .map_err(|e| anyhow::anyhow!("cancel frame: {e:?}"))
    })
}

/// State shared read-mostly between the loops and the listeners.
#[derive(Clone)]
pub struct SharedInput {
    pub pointer: Rc<RefCell<PointerState>>,
    pub phase: Rc<Cell<Phase>>,
    pub bass: Rc<Cell<f32>>,
    pub viewport: Rc<Cell<Viewport>>,
}

/// Render coordinator: one simulation step and one GPU draw per refresh.
pub struct FrameContext {
    pub scene: SceneState,
    pub gpu: Option<GpuState>,
    pub shared: SharedInput,
    pub on_click: Option<js_sys::Function>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (clicks, snapshot) = {
            let mut p = self.shared.pointer.borrow_mut();
            (p.take_clicks(), p.snapshot())
        };
        let input = FrameInput {
            audio_bass: self.shared.bass.get(),
            pointer: snapshot.uv,
            // no callback, no click feedback
            click: clicks > 0 && self.on_click.is_some(),
        };
        let out = self.scene.step(&input);
        self.shared.phase.set(self.scene.phase());
        if out.click_completed {
            if let Some(cb) = &self.on_click {
                invoke_deferred(cb.clone());
            }
        }

        let viewport = self.shared.viewport.get();
        self.scene.resize(viewport);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(viewport.gpu_width, viewport.gpu_height);
            match g.render(&self.scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }

    pub fn release_gpu(&mut self) {
        if let Some(g) = self.gpu.take() {
            g.release();
        }
    }
}

/// Run the caller's callback outside the current frame callback.
fn invoke_deferred(cb: js_sys::Function) {
    spawn_local(async move {
        if let Err(e) = cb.call0(&JsValue::NULL) {
            log::warn!("[phase] click callback threw: {e:?}");
        }
    });
}
