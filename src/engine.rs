// One mount session: canvases, loops, listeners, audio and GPU state.

use crate::audio::BassAnalyser;
use crate::constants::{GPU_CANVAS_Z, PARTICLE_CANVAS_Z, TERMINAL_CANVAS_Z};
use crate::core::lifecycle::{create_or_unwind, LoopRegistry, SharedSlot, Teardown};
use crate::core::{Phase, SceneParams, SceneState};
use crate::dom;
use crate::error::MountError;
use crate::events::{self, Listeners, PointerWiring};
use crate::frame::{self, FrameContext, FrameLoop, SharedInput};
use crate::input::PointerState;
use crate::overlay::{ParticleOverlay, TerminalOverlay};
use crate::render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct Canvases {
    gpu: web::HtmlCanvasElement,
    terminal: web::HtmlCanvasElement,
    particles: web::HtmlCanvasElement,
}

pub struct MountOptions {
    pub audio_source: Option<web::AudioNode>,
    pub audio_context: Option<web::AudioContext>,
    pub on_click: Option<js_sys::Function>,
}

pub struct Mount {
    container: web::HtmlElement,
    canvases: Rc<Canvases>,
    shared: SharedInput,
    loops: Rc<RefCell<LoopRegistry>>,
    alive: Rc<Cell<bool>>,
    teardown: Teardown,
}

impl Mount {
    pub fn new(container: web::HtmlElement, opts: MountOptions) -> Result<Self, MountError> {
        let (window, document) = dom::window_document()?;
        log::info!("[mount] mounting sigil engine");

        let layers = [
            (GPU_CANVAS_Z, "gpu"),
            (TERMINAL_CANVAS_Z, "terminal"),
            (PARTICLE_CANVAS_Z, "particles"),
        ];
        let made = create_or_unwind(
            layers,
            |(z, name)| dom::create_layer_canvas(&document, &container, z, name),
            |canvas| {
                if let Err(e) = dom::remove_canvas(canvas) {
                    log::warn!("[mount] could not remove partial canvas: {e:#}");
                }
            },
        )?;
        let [gpu, terminal, particles]: [web::HtmlCanvasElement; 3] = made
            .try_into()
            .map_err(|_| MountError::Dom("layer canvas count".into()))?;
        let canvases = Rc::new(Canvases {
            gpu,
            terminal,
            particles,
        });

        let viewport = dom::measure_viewport(&container);
        dom::apply_viewport(
            &viewport,
            &canvases.gpu,
            &[&canvases.terminal, &canvases.particles],
        );
        let shared = SharedInput {
            pointer: Rc::new(RefCell::new(PointerState::new())),
            phase: Rc::new(Cell::new(Phase::Loading)),
            bass: Rc::new(Cell::new(0.0)),
            viewport: Rc::new(Cell::new(viewport)),
        };

        let loops = Rc::new(RefCell::new(LoopRegistry::new()));
        let frames: Rc<RefCell<Vec<FrameLoop>>> = Rc::new(RefCell::new(Vec::new()));
        let listeners = Rc::new(RefCell::new(Listeners::new()));
        let render: Rc<RefCell<Option<FrameContext>>> = Rc::new(RefCell::new(None));
        let alive = Rc::new(Cell::new(true));

        // Canvases already unwind themselves on a partial failure; from here on
        // teardown owns everything created.
        let mut teardown = Teardown::new();
        {
            let alive = alive.clone();
            let loops = loops.clone();
            let frames = frames.clone();
            teardown.push("cancel frame loops", move || {
                alive.set(false);
                let ids = loops.borrow_mut().cancel_all();
                frames.borrow_mut().clear();
                frame::cancel_frames(&ids)
            });
        }
        {
            let listeners = listeners.clone();
            teardown.push("remove listeners", move || {
                listeners
                    .try_borrow_mut()
                    .map_err(|_| anyhow::anyhow!("listener registry busy"))?
                    .clear()
            });
        }
        let analyser: Rc<RefCell<Option<BassAnalyser>>> = Rc::new(RefCell::new(None));
        {
            let analyser = analyser.clone();
            teardown.push("disconnect audio", move || match analyser.borrow_mut().take() {
                Some(mut a) => a.disconnect(),
                None => Ok(()),
            });
        }
        {
            let render = render.clone();
            teardown.push("release gpu", move || {
                let ctx = render
                    .try_borrow_mut()
                    .map_err(|_| anyhow::anyhow!("render context busy"))?
                    .take();
                if let Some(mut ctx) = ctx {
                    ctx.release_gpu();
                }
                Ok(())
            });
        }
        {
            let canvases = canvases.clone();
            teardown.push("remove canvases", move || {
                let results = [
                    dom::remove_canvas(&canvases.gpu),
                    dom::remove_canvas(&canvases.terminal),
                    dom::remove_canvas(&canvases.particles),
                ];
                results.into_iter().collect::<anyhow::Result<Vec<()>>>().map(|_| ())
            });
        }

        let mut mount = Self {
            container,
            canvases,
            shared,
            loops,
            alive,
            teardown,
        };

        if let Err(e) = mount.start(&window, opts, &frames, &listeners, &analyser, &render) {
            mount.teardown.run();
            return Err(e);
        }
        Ok(mount)
    }

    fn start(
        &mut self,
        window: &web::Window,
        opts: MountOptions,
        frames: &Rc<RefCell<Vec<FrameLoop>>>,
        listeners: &Rc<RefCell<Listeners>>,
        analyser: &Rc<RefCell<Option<BassAnalyser>>>,
        render: &Rc<RefCell<Option<FrameContext>>>,
    ) -> Result<(), MountError> {
        let mut terminal = TerminalOverlay::new(self.canvases.terminal.clone())?;
        let mut particles = ParticleOverlay::new(self.canvases.particles.clone())?;

        // every loop gets a slot now so teardown can cancel the render loop
        // even before the GPU is ready
        let (terminal_slot, particle_slot, audio_slot, render_slot) = {
            let mut loops = self.loops.borrow_mut();
            (
                loops.register("terminal"),
                loops.register("particles"),
                loops.register("audio"),
                loops.register("render"),
            )
        };

        {
            let phase = self.shared.phase.clone();
            let pointer = self.shared.pointer.clone();
            let lp = FrameLoop::start("terminal", terminal_slot, move || {
                let hovered = pointer.borrow().snapshot().hovered;
                terminal.draw(phase.get(), hovered);
            });
            frames.borrow_mut().push(lp);
        }
        {
            let pointer = self.shared.pointer.clone();
            let lp = FrameLoop::start("particles", particle_slot, move || {
                let (snapshot, moves) = {
                    let mut p = pointer.borrow_mut();
                    (p.snapshot(), p.drain_moves())
                };
                particles.draw(&snapshot, &moves);
            });
            frames.borrow_mut().push(lp);
        }

        *analyser.borrow_mut() =
            BassAnalyser::connect(opts.audio_source.as_ref(), opts.audio_context.as_ref());
        if analyser.borrow().is_some() {
            let analyser = analyser.clone();
            let bass = self.shared.bass.clone();
            let lp = FrameLoop::start("audio", audio_slot, move || {
                let level = analyser
                    .borrow_mut()
                    .as_mut()
                    .map(|a| a.sample())
                    .unwrap_or(0.0);
                bass.set(level);
            });
            frames.borrow_mut().push(lp);
        }

        {
            let mut listeners = listeners.borrow_mut();
            let wiring = PointerWiring {
                window: window.clone(),
                container: self.container.clone(),
                pointer: self.shared.pointer.clone(),
            };
            events::wire_pointer_handlers(&wiring, &mut listeners)
                .map_err(|e| MountError::Dom(format!("{e:#}")))?;
            let container = self.container.clone();
            let canvases = self.canvases.clone();
            let viewport = self.shared.viewport.clone();
            events::wire_resize(window, &mut listeners, move || {
                sync_viewport(&container, &canvases, &viewport);
            })
            .map_err(|e| MountError::Dom(format!("{e:#}")))?;
            log::info!("[mount] {} listeners attached", listeners.len());
        }

        self.spawn_gpu_init(opts.on_click, render.clone(), frames.clone(), render_slot);
        Ok(())
    }

    fn spawn_gpu_init(
        &self,
        on_click: Option<js_sys::Function>,
        render: Rc<RefCell<Option<FrameContext>>>,
        frames: Rc<RefCell<Vec<FrameLoop>>>,
        slot: SharedSlot,
    ) {
        let canvas = self.canvases.gpu.clone();
        let shared = self.shared.clone();
        let alive = self.alive.clone();
        spawn_local(async move {
            let scene = SceneState::new(SceneParams::default(), shared.viewport.get());
            let gpu = match GpuState::new(&canvas, &scene).await {
                Ok(g) => g,
                Err(e) => {
                    log::error!("[gpu] init error: {e:#}");
                    return;
                }
            };
            if !alive.get() {
                log::info!("[gpu] ready after unmount, releasing");
                gpu.release();
                return;
            }
            let (w, h) = gpu.size();
            log::info!("[gpu] ready ({w}x{h}), starting render loop");
            // clicks made while loading do not count
            shared.pointer.borrow_mut().take_clicks();
            *render.borrow_mut() = Some(FrameContext {
                scene,
                gpu: Some(gpu),
                shared,
                on_click,
            });
            let ctx = render.clone();
            let lp = FrameLoop::start("render", slot, move || {
                if let Ok(mut c) = ctx.try_borrow_mut() {
                    if let Some(c) = c.as_mut() {
                        c.frame();
                    }
                }
            });
            frames.borrow_mut().push(lp);
        });
    }

    pub fn resize(&self) {
        sync_viewport(&self.container, &self.canvases, &self.shared.viewport);
    }

    pub fn phase(&self) -> Phase {
        self.shared.phase.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.get()
    }

    pub fn pending_frames(&self) -> usize {
        self.loops.borrow().pending_count()
    }

    pub fn unmount(&mut self) {
        if self.teardown.is_done() {
            return;
        }
        log::info!("[teardown] unmounting sigil engine");
        self.teardown.run();
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Recompute sizes from the container; equal sizes leave everything untouched.
fn sync_viewport(
    container: &web::HtmlElement,
    canvases: &Canvases,
    viewport: &Cell<crate::core::Viewport>,
) {
    let next = dom::measure_viewport(container);
    if next == viewport.get() {
        return;
    }
    viewport.set(next);
    dom::apply_viewport(&next, &canvases.gpu, &[&canvases.terminal, &canvases.particles]);
    log::debug!(
        "[mount] resized to {}x{} (gpu {}x{})",
        next.overlay_width,
        next.overlay_height,
        next.gpu_width,
        next.gpu_height
    );
}
