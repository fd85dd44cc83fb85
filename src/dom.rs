use crate::core::Viewport;
use crate::error::MountError;
use crate::input::Bounds;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), MountError> {
    let window = web::window().ok_or(MountError::MissingWindow)?;
    let document = window.document().ok_or(MountError::MissingDocument)?;
    Ok((window, document))
}

/// Absolutely positioned canvas filling the container at the given stack level.
pub fn create_layer_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
    z_index: &str,
    label: &str,
) -> Result<web::HtmlCanvasElement, MountError> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(MountError::dom)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::Dom("created element is not a canvas".into()))?;
    let style = canvas.style();
    for (prop, value) in [
        ("position", "absolute"),
        ("inset", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", z_index),
    ] {
        style.set_property(prop, value).map_err(MountError::dom)?;
    }
    // only the container receives pointer events
    style
        .set_property("pointer-events", "none")
        .map_err(MountError::dom)?;
    canvas
        .set_attribute("data-sigil-layer", label)
        .map_err(MountError::dom)?;
    container
        .append_child(&canvas)
        .map_err(MountError::dom)?;
    Ok(canvas)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, MountError> {
    canvas
        .get_context("2d")
        .map_err(MountError::dom)?
        .ok_or(MountError::ContextUnavailable("2d"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| MountError::ContextUnavailable("2d"))
}

pub fn container_bounds(container: &web::HtmlElement) -> Bounds {
    let rect = container.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Viewport for the container's current CSS box and the window pixel ratio.
pub fn measure_viewport(container: &web::HtmlElement) -> Viewport {
    let rect = container.get_bounding_client_rect();
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    Viewport::from_css(rect.width(), rect.height(), dpr)
}

/// Sets backing-store sizes; untouched canvases keep their current contents.
pub fn apply_viewport(
    viewport: &Viewport,
    gpu: &web::HtmlCanvasElement,
    overlays: &[&web::HtmlCanvasElement],
) {
    set_size(gpu, viewport.gpu_width, viewport.gpu_height);
    for canvas in overlays {
        set_size(canvas, viewport.overlay_width, viewport.overlay_height);
    }
}

#[inline]
fn set_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
}

pub fn remove_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    canvas.remove();
    if canvas.is_connected() {
        anyhow::bail!("canvas still attached after remove");
    }
    Ok(())
}
