use super::Listeners;
use crate::dom;
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub container: web::HtmlElement,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// Pointer listeners only stage input; frame loops consume it on their next tick.
pub fn wire_pointer_handlers(w: &PointerWiring, listeners: &mut Listeners) -> anyhow::Result<()> {
    wire_pointermove(w, listeners)?;
    wire_click(w, listeners)?;
    wire_hover(w, listeners)?;
    Ok(())
}

fn wire_pointermove(w: &PointerWiring, listeners: &mut Listeners) -> anyhow::Result<()> {
    let container = w.container.clone();
    let pointer = w.pointer.clone();
    listeners.listen(w.window.as_ref(), "pointermove", true, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let bounds = dom::container_bounds(&container);
        pointer
            .borrow_mut()
            .record_move(ev.client_x() as f64, ev.client_y() as f64, &bounds);
    })
}

fn wire_click(w: &PointerWiring, listeners: &mut Listeners) -> anyhow::Result<()> {
    let pointer = w.pointer.clone();
    listeners.listen(w.container.as_ref(), "click", false, move |_| {
        pointer.borrow_mut().record_click();
    })
}

fn wire_hover(w: &PointerWiring, listeners: &mut Listeners) -> anyhow::Result<()> {
    let enter = w.pointer.clone();
    listeners.listen(w.container.as_ref(), "mouseenter", true, move |_| {
        enter.borrow_mut().set_hovered(true);
    })?;
    let leave = w.pointer.clone();
    listeners.listen(w.container.as_ref(), "mouseleave", true, move |_| {
        leave.borrow_mut().set_hovered(false);
    })
}
