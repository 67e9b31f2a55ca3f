use crate::core::{CarouselState, NavCommand};
use crate::events::apply_navigation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Map a key name to a navigation command. Arrow keys mirror the nav
/// buttons: right advances, left retreats.
#[inline]
pub fn nav_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowRight" => Some(NavCommand::Advance),
        "ArrowLeft" => Some(NavCommand::Retreat),
        _ => None,
    }
}

pub fn wire_global_keydown(carousel: Rc<RefCell<CarouselState>>, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let key = ev.key();
                if let Some(cmd) = nav_for_key(&key) {
                    apply_navigation(&carousel, cmd);
                    ev.prevent_default();
                    return;
                }
                match key.as_str() {
                    "Enter" => {
                        if let Some(win) = web::window() {
                            if let Some(doc) = win.document() {
                                if doc.fullscreen_element().is_some() {
                                    _ = doc.exit_fullscreen();
                                } else {
                                    _ = canvas.request_fullscreen();
                                }
                            }
                        }
                        ev.prevent_default();
                    }
                    "Escape" => {
                        if let Some(win) = web::window() {
                            if let Some(doc) = win.document() {
                                _ = doc.exit_fullscreen();
                            }
                        }
                    }
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
