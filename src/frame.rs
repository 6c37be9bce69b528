use crate::core::{FrameScheduler, FrameToken, MotionEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebEngine = MotionEngine<web::HtmlElement, RafScheduler>;

/// Shared slot for the frame callback, filled once the engine exists.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn callback_slot(&self) -> FrameCallback {
        self.callback.clone()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameToken> {
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
            .map(FrameToken)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        _ = self.window.cancel_animation_frame(token.0);
    }
}

/// Route fired frames to `engine.frame()`. Must run before the engine starts,
/// otherwise the first frame request finds no callback.
pub fn bind_loop(slot: &FrameCallback, engine: Rc<RefCell<WebEngine>>) {
    let tick = Closure::wrap(Box::new(move || {
        if let Ok(mut e) = engine.try_borrow_mut() {
            e.frame();
        }
    }) as Box<dyn FnMut()>);
    *slot.borrow_mut() = Some(tick);
}
