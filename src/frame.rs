use crate::core::{map_progress, Glitch, IdleSpin, PerspectiveCamera, VisualState};
use crate::dom::{self, PageElements};
use crate::render::{self, FrameInputs};
use crate::scroll::ScrollDriver;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the frame loop and the scroll/resize listeners share.
pub struct FrameContext {
    pub elements: PageElements,
    pub scroll: ScrollDriver,
    pub visual: VisualState,
    pub spin: IdleSpin,
    pub camera: PerspectiveCamera,
    pub glitch: Glitch,
    pub rng: StdRng,
    pub gpu: Option<render::GpuState>,

    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(elements: PageElements, rng: StdRng) -> Self {
        let (w, h) = dom::sync_canvas_backing_size(&elements.canvas);
        let mut camera = PerspectiveCamera::new(1.0);
        camera.set_viewport(w, h);
        let scroll = ScrollDriver::new(elements.track.clone());
        let now = Instant::now();
        let mut ctx = Self {
            elements,
            scroll,
            visual: VisualState::default(),
            spin: IdleSpin::default(),
            camera,
            glitch: Glitch::new(0.0),
            rng,
            gpu: None,
            started: now,
            last_instant: now,
        };
        let p = ctx.scroll.setup();
        ctx.apply_progress(p);
        ctx
    }

    /// Map progress and apply scene, styles and pointer gate together.
    pub fn apply_progress(&mut self, progress: f64) {
        let next = map_progress(progress);
        if next.passed_portal != self.visual.passed_portal {
            log::info!(
                "[portal] {} at progress {:.3}",
                if next.passed_portal { "entered" } else { "left" },
                progress
            );
        }
        self.camera.z = next.scene.camera_z as f32;
        self.elements.apply_visual(&next);
        self.visual = next;
    }

    pub fn on_scroll(&mut self) {
        if let Some(p) = self.scroll.on_scroll() {
            self.apply_progress(p);
        }
    }

    /// Viewport changed: raster size, camera aspect, and the scroll range all move.
    pub fn on_resize(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.elements.canvas);
        self.camera.set_viewport(w, h);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
        }
        self.on_scroll();
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        if let Some(p) = self.scroll.advance(dt_sec) {
            self.apply_progress(p);
        }
        self.spin.step();

        let elapsed_ms = (now - self.started).as_secs_f64() * 1000.0;
        if let Some(offset) = self.glitch.advance(elapsed_ms, &mut self.rng) {
            self.elements.apply_glitch(offset);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.elements.canvas.width(), self.elements.canvas.height());
            let inputs = FrameInputs {
                camera: &self.camera,
                knot_model: self.visual.scene.knot_model(&self.spin),
                knot_opacity: self.visual.scene.object_opacity as f32,
                particles_model: self.spin.particles_model(),
            };
            if let Err(e) = g.render(&inputs) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

impl Drop for FrameContext {
    fn drop(&mut self) {
        if let Some(g) = self.gpu.take() {
            g.dispose();
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Closure<dyn FnMut()>;

/// A running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and frees the self-scheduling closure.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<TickClosure>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            match frame_ctx.try_borrow_mut() {
                Ok(mut ctx) => ctx.frame(),
                Err(_) => log::debug!("[frame] context busy, skipping frame"),
            }
            if let Some(id) = request_frame(&tick_clone) {
                handle_tick.set(Some(id));
            }
        }) as Box<dyn FnMut()>));
        handle.set(request_frame(&tick));
        log::debug!("[frame] loop started");
        Self { tick, handle }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<TickClosure>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    // None once the loop has been dropped
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure -> Rc -> closure cycle
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop cancelled");
    }
}
