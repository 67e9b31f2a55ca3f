#![cfg(target_arch = "wasm32")]
use crate::core::{CarouselState, DragTracker, NavCommand, PlanetTransform, PLANETS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_nav_buttons(document: &web::Document, carousel: &Rc<RefCell<CarouselState>>) {
    // Buttons bypass gesture interpretation and navigate directly.
    let c = carousel.clone();
    dom::add_click_listener(document, constants::PREV_BUTTON_ID, move || {
        events::apply_navigation(&c, NavCommand::Retreat);
    });
    let c = carousel.clone();
    dom::add_click_listener(document, constants::NEXT_BUTTON_ID, move || {
        events::apply_navigation(&c, NavCommand::Advance);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("planet-carousel starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Model loading stays delegated; the renderer draws tinted impostors.
    for planet in PLANETS {
        log::info!(
            "[assets] {} -> {} (size factor {}, procedural impostor)",
            planet.id,
            planet.model_path,
            planet.size
        );
    }

    let carousel = Rc::new(RefCell::new(CarouselState::new(PLANETS.len())));
    // All items start at the origin and converge on their slots.
    let transforms = Rc::new(RefCell::new(vec![
        PlanetTransform::default();
        PLANETS.len()
    ]));
    let tracker = Rc::new(RefCell::new(DragTracker::default()));

    overlay::update_focus(&document, &PLANETS[carousel.borrow().index()]);
    wire_nav_buttons(&document, &carousel);

    events::pointer::wire_pointer_handlers(events::pointer::PointerWiring {
        canvas: canvas.clone(),
        carousel: carousel.clone(),
        tracker: tracker.clone(),
    });
    events::keyboard::wire_global_keydown(carousel.clone(), canvas.clone());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        carousel,
        transforms,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
