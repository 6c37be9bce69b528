use crate::frame::WebEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub fn mousemove_handler(engine: Rc<RefCell<WebEngine>>) -> Closure<dyn FnMut(web::MouseEvent)> {
    Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Ok(mut e) = engine.try_borrow_mut() {
            e.on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>)
}
