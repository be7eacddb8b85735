use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that is removed again when the guard is dropped.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        Self::register(target, event, &opts, handler)
    }

    /// Fires at most once; dropping the guard before then cancels it.
    pub fn once(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        Self::register(target, event, &opts, handler)
    }

    fn register(
        target: &web::EventTarget,
        event: &'static str,
        opts: &web::AddEventListenerOptions,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                opts,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref::<js_sys::Function>(),
        );
        log::debug!("[events] released {} listener", self.event);
    }
}
