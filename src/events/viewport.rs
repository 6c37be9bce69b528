use crate::dom;
use crate::frame::WebEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub fn scroll_handler(window: &web::Window, engine: Rc<RefCell<WebEngine>>) -> Closure<dyn FnMut()> {
    let window = window.clone();
    Closure::wrap(Box::new(move || {
        let y = dom::scroll_y(&window);
        if let Ok(mut e) = engine.try_borrow_mut() {
            e.on_scroll(y);
        }
    }) as Box<dyn FnMut()>)
}

pub fn resize_handler(window: &web::Window, engine: Rc<RefCell<WebEngine>>) -> Closure<dyn FnMut()> {
    let window = window.clone();
    Closure::wrap(Box::new(move || {
        let Some((w, h)) = dom::viewport_size(&window) else {
            return;
        };
        if let Ok(mut e) = engine.try_borrow_mut() {
            e.on_resize(w, h);
        }
    }) as Box<dyn FnMut()>)
}
