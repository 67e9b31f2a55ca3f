use crate::core::{
    layout, step_transforms, CarouselState, PlanetTransform, TargetTransform, CAMERA_FOV_DEGREES,
    FOCUS_PLANE_DISTANCE, PLANETS,
};
use crate::render::{self, PlanetInstance};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub carousel: Rc<RefCell<CarouselState>>,
    pub transforms: Rc<RefCell<Vec<PlanetTransform>>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    /// One rendering tick: recompute targets from the carousel state, step
    /// every transform toward them, and draw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let focused = self.carousel.borrow().index();
        let total = PLANETS.len();

        // Targets are cheap pure functions of (offset, total); recompute
        // rather than cache.
        let targets: Vec<TargetTransform> = PLANETS
            .iter()
            .enumerate()
            .map(|(i, planet)| {
                let raw = i as i32 - focused as i32;
                let (position, scale) = layout(
                    raw,
                    total,
                    planet.visual_radius,
                    FOCUS_PLANE_DISTANCE,
                    CAMERA_FOV_DEGREES,
                );
                TargetTransform { position, scale }
            })
            .collect();

        let mut instances: Vec<PlanetInstance> = {
            let mut transforms = self.transforms.borrow_mut();
            step_transforms(&mut transforms, &targets, focused);
            transforms
                .iter()
                .zip(PLANETS.iter())
                .map(|(t, planet)| PlanetInstance {
                    pos: t.position.to_array(),
                    // drawn diameter: uniform scale applied to the nominal model size
                    scale: t.scale * planet.visual_radius * 2.0,
                    color: [
                        planet.color_rgb[0],
                        planet.color_rgb[1],
                        planet.color_rgb[2],
                        1.0,
                    ],
                    spin: t.rotation_y,
                })
                .collect()
        };
        // Back-to-front: alpha blended planets, no depth buffer.
        instances.sort_by(|a, b| {
            a.pos[2]
                .partial_cmp(&b.pos[2])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(dt_sec, &instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
