pub mod pointer;
pub mod viewport;

use crate::constants::{MOUSEMOVE_EVENT, RESIZE_EVENT, SCROLL_EVENT, TEARDOWN_EVENT};
use crate::frame::WebEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Input listeners kept alive until teardown so they can be removed again.
pub struct Listeners {
    window: web::Window,
    scroll: Closure<dyn FnMut()>,
    mousemove: Closure<dyn FnMut(web::MouseEvent)>,
    resize: Closure<dyn FnMut()>,
}

impl Listeners {
    pub fn attach(window: &web::Window, engine: &Rc<RefCell<WebEngine>>) -> Self {
        let listeners = Self {
            window: window.clone(),
            scroll: viewport::scroll_handler(window, engine.clone()),
            mousemove: pointer::mousemove_handler(engine.clone()),
            resize: viewport::resize_handler(window, engine.clone()),
        };
        add_passive(window, SCROLL_EVENT, listeners.scroll.as_ref().unchecked_ref());
        add_passive(window, MOUSEMOVE_EVENT, listeners.mousemove.as_ref().unchecked_ref());
        add_passive(window, RESIZE_EVENT, listeners.resize.as_ref().unchecked_ref());
        listeners
    }

    pub fn detach(&self) {
        let w = &self.window;
        _ = w.remove_event_listener_with_callback(SCROLL_EVENT, self.scroll.as_ref().unchecked_ref());
        _ = w.remove_event_listener_with_callback(
            MOUSEMOVE_EVENT,
            self.mousemove.as_ref().unchecked_ref(),
        );
        _ = w.remove_event_listener_with_callback(RESIZE_EVENT, self.resize.as_ref().unchecked_ref());
    }
}

fn add_passive(window: &web::Window, event: &str, callback: &js_sys::Function) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        event, callback, &opts,
    );
}

/// On unload: detach input listeners, then stop the engine (cancels the pending frame).
pub fn wire_teardown(window: &web::Window, engine: Rc<RefCell<WebEngine>>, listeners: Listeners) {
    let listeners = RefCell::new(Some(listeners));
    let closure = Closure::wrap(Box::new(move || {
        if let Some(l) = listeners.borrow_mut().take() {
            l.detach();
        }
        if let Ok(mut e) = engine.try_borrow_mut() {
            e.stop();
        }
        log::info!("effects stopped");
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback(TEARDOWN_EVENT, closure.as_ref().unchecked_ref());
    closure.forget();
}
