use crate::core::{CarouselState, DragTracker};
use crate::events::apply_navigation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub carousel: Rc<RefCell<CarouselState>>,
    pub tracker: Rc<RefCell<DragTracker>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
}

/// True when the pointer went down on an interactive control (the nav
/// buttons handle their own clicks) rather than the scene surface.
fn is_control_target(ev: &web::PointerEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.tag_name() == "BUTTON")
        .unwrap_or(false)
}

fn set_cursor(canvas: &web::HtmlCanvasElement, grabbing: bool) {
    let cursor = if grabbing { "grabbing" } else { "grab" };
    _ = canvas.style().set_property("cursor", cursor);
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if is_control_target(&ev) {
            return;
        }
        w.tracker.borrow_mut().pointer_down(ev.client_x() as f32);
        set_cursor(&w.canvas, true);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.tracker.borrow_mut().pointer_move(ev.client_x() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_dragging = w.tracker.borrow().is_dragging();
        if let Some(cmd) = w.tracker.borrow_mut().pointer_up() {
            log::info!("[drag] released past threshold: {:?}", cmd);
            apply_navigation(&w.carousel, cmd);
        }
        if was_dragging {
            set_cursor(&w.canvas, false);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        // Leaving mid-drag resolves like a release; otherwise a no-op.
        if let Some(cmd) = w.tracker.borrow_mut().pointer_leave() {
            log::info!("[drag] left surface past threshold: {:?}", cmd);
            apply_navigation(&w.carousel, cmd);
        }
        set_cursor(&w.canvas, false);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
