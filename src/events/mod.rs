mod listener;

pub use listener::ListenerGuard;

use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Bind scroll and resize on the window to the frame context.
/// The returned guards own the bindings; drop them to release.
pub fn wire_viewport_listeners(
    window: &web::Window,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let ctx_scroll = frame_ctx.clone();
    let scroll = ListenerGuard::new(window, "scroll", true, move |_| {
        match ctx_scroll.try_borrow_mut() {
            Ok(mut ctx) => ctx.on_scroll(),
            Err(_) => log::debug!("[events] scroll while context busy"),
        }
    })?;

    let ctx_resize = frame_ctx.clone();
    let resize = ListenerGuard::new(window, "resize", true, move |_| {
        match ctx_resize.try_borrow_mut() {
            Ok(mut ctx) => ctx.on_resize(),
            Err(_) => log::debug!("[events] resize while context busy"),
        }
    })?;

    Ok(vec![scroll, resize])
}
