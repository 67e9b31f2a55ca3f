pub mod keyboard;
pub mod pointer;

use crate::core::{CarouselState, NavCommand, PLANETS};
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;

/// Apply a navigation command to the carousel and refresh the overlay.
/// Shared by drag resolution, the nav buttons, and the arrow keys.
pub fn apply_navigation(carousel: &Rc<RefCell<CarouselState>>, cmd: NavCommand) {
    {
        let mut state = carousel.borrow_mut();
        match cmd {
            NavCommand::Advance => state.advance(),
            NavCommand::Retreat => state.retreat(),
        }
    }
    let index = carousel.borrow().index();
    let planet = &PLANETS[index];
    log::info!("[nav] {:?} -> {} ({})", cmd, index, planet.id);
    if let Some(doc) = dom::window_document() {
        overlay::update_focus(&doc, planet);
    }
}
