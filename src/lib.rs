#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod engine;
mod error;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use engine::{Mount, MountOptions};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sigil-web loaded");
    Ok(())
}

/// Handle to one mounted sigil. Dropping it (or calling `unmount`) releases
/// every canvas, listener, loop and GPU object it created.
#[wasm_bindgen]
pub struct SigilEngine {
    mount: Mount,
}

#[wasm_bindgen]
impl SigilEngine {
    /// Mount into `container`. Audio is optional and best effort; `on_click`
    /// is invoked once per completed click pulse.
    #[wasm_bindgen(constructor)]
    pub fn mount(
        container: web::HtmlElement,
        audio_source: Option<web::AudioNode>,
        audio_context: Option<web::AudioContext>,
        on_click: Option<js_sys::Function>,
    ) -> Result<SigilEngine, JsValue> {
        let mount = Mount::new(
            container,
            MountOptions {
                audio_source,
                audio_context,
                on_click,
            },
        )?;
        Ok(SigilEngine { mount })
    }

    /// Resize the canvases to the container now; the camera projection picks
    /// up the new aspect on the next frame.
    pub fn resize(&self) {
        self.mount.resize();
    }

    pub fn unmount(&mut self) {
        self.mount.unmount();
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        format!("{:?}", self.mount.phase()).to_lowercase()
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    #[wasm_bindgen(getter, js_name = pendingFrames)]
    pub fn pending_frames(&self) -> usize {
        self.mount.pending_frames()
    }
}
