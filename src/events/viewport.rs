use super::Listeners;
use web_sys as web;

/// Re-run `on_resize` whenever the window size changes.
pub fn wire_resize(
    window: &web::Window,
    listeners: &mut Listeners,
    on_resize: impl Fn() + 'static,
) -> anyhow::Result<()> {
    listeners.listen(window.as_ref(), "resize", true, move |_| on_resize())
}
