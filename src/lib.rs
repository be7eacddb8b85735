#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod scroll;

/// A mounted page: frame loop, viewport listeners and the shared context.
///
/// Field order is teardown order: stop the loop, release listeners, then drop
/// the context (which disposes the GPU renderer).
struct PortalPage {
    _frame_loop: frame::FrameLoop,
    _listeners: Vec<events::ListenerGuard>,
    _ctx: Rc<RefCell<frame::FrameContext>>,
}

type PageSlot = crate::core::MountSlot<PortalPage, events::ListenerGuard>;

thread_local! {
    static MOUNTED: RefCell<PageSlot> = RefCell::new(PageSlot::Empty);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("neon-portal starting");

    mount();
    Ok(())
}

/// Mount onto the current document, replacing any page mounted earlier.
/// Missing surfaces skip setup; a still-loading document retries once it is parsed.
#[wasm_bindgen]
pub fn mount() {
    unmount();
    let Some(document) = dom::window_document() else {
        log::warn!("[mount] no document; skipping setup");
        return;
    };
    match build_page(&document) {
        Ok(Some(page)) => {
            MOUNTED.with(|m| *m.borrow_mut() = PageSlot::Mounted(page));
            log::info!("[mount] mounted");
        }
        Ok(None) if document.ready_state() == "loading" => match wait_until_parsed(&document) {
            Ok(wait) => {
                MOUNTED.with(|m| *m.borrow_mut() = PageSlot::Pending(wait));
                log::info!("[mount] surfaces not attached yet; waiting for DOMContentLoaded");
            }
            Err(e) => log::error!("[mount] could not wait for DOMContentLoaded: {:?}", e),
        },
        Ok(None) => log::warn!("[mount] required elements missing; skipping setup"),
        Err(e) => log::error!("[mount] setup error: {:?}", e),
    }
}

/// Tear down the mounted page, or cancel a mount still waiting on the parser.
#[wasm_bindgen]
pub fn unmount() {
    let previous = MOUNTED.with(|m| m.borrow_mut().take());
    match previous {
        PageSlot::Mounted(page) => {
            drop(page);
            log::info!("[mount] unmounted");
        }
        PageSlot::Pending(wait) => {
            drop(wait);
            log::info!("[mount] pending mount cancelled");
        }
        PageSlot::Empty => {}
    }
}

fn wait_until_parsed(document: &web::Document) -> anyhow::Result<events::ListenerGuard> {
    events::ListenerGuard::once(document, "DOMContentLoaded", |_| {
        // the guard owning this handler is dropped by mount(), so run after it returns
        spawn_local(async { resume_pending_mount() });
    })
}

fn resume_pending_mount() {
    if MOUNTED.with(|m| m.borrow().is_pending()) {
        mount();
    } else {
        log::debug!("[mount] DOMContentLoaded after unmount; ignoring");
    }
}

fn build_page(document: &web::Document) -> anyhow::Result<Option<PortalPage>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let Some(elements) = dom::PageElements::find(document) else {
        return Ok(None);
    };
    let canvas = elements.canvas.clone();

    let rng = StdRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64);
    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(elements, rng)));
    let listeners = events::wire_viewport_listeners(&window, &ctx)?;
    let frame_loop = frame::FrameLoop::start(ctx.clone());

    // DOM styles track scroll right away; drawing starts once the GPU is up
    let weak: Weak<RefCell<frame::FrameContext>> = Rc::downgrade(&ctx);
    spawn_local(async move {
        let Some(gpu) = frame::init_gpu(&canvas).await else {
            return;
        };
        match weak.upgrade() {
            Some(ctx) => ctx.borrow_mut().gpu = Some(gpu),
            None => {
                log::info!("[gpu] page unmounted during init; discarding renderer");
                gpu.dispose();
            }
        }
    });

    Ok(Some(PortalPage {
        _frame_loop: frame_loop,
        _listeners: listeners,
        _ctx: ctx,
    }))
}
