// The two 2D canvases drawn above the GPU surface.

pub mod particles;
pub mod terminal;

pub use particles::ParticleOverlay;
pub use terminal::TerminalOverlay;

use web_sys as web;

#[inline]
fn surface_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    (canvas.width() as f64, canvas.height() as f64)
}
