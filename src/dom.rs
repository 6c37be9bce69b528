use crate::constants::*;
use crate::core::{Surface, SurfaceSet, Transform};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Look up every surface role once; the set is fixed for the page lifetime.
pub fn discover_surfaces(document: &web::Document) -> SurfaceSet<web::HtmlElement> {
    SurfaceSet {
        hero_visual: query_one(document, HERO_VISUAL_SELECTOR),
        abstract_shape: query_one(document, ABSTRACT_SHAPE_SELECTOR),
        shape_layers: query_all(document, SHAPE_LAYER_SELECTOR),
        accents: query_all(document, FLOATING_CIRCLE_SELECTOR),
        headline: query_one(document, HEADLINE_SELECTOR),
        scroll_indicator: query_one(document, SCROLL_INDICATOR_SELECTOR),
    }
}

pub fn viewport_size(window: &web::Window) -> Option<(f32, f32)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w as f32, h as f32))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Missing `matchMedia` counts as a reduced-motion request.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => mql.matches(),
        _ => {
            log::warn!("matchMedia unavailable; treating as reduced motion");
            true
        }
    }
}

/// Resolves once the DOM is parsed (immediately if it already is).
pub async fn document_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != web::DocumentReadyState::Loading {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_ready = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = document.add_event_listener_with_callback(DOM_READY_EVENT, on_ready.unchecked_ref());
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn reveal_body(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("opacity", "1");
    }
    if let Some(perf) = web::window().and_then(|w| w.performance()) {
        log::info!("page loaded in {:.0}ms", perf.now());
    }
}

/// Fade the body in once the page has loaded. Independent of motion settings.
pub fn wire_load_reveal(window: &web::Window, document: &web::Document) {
    if document.ready_state() == web::DocumentReadyState::Complete {
        reveal_body(document);
        return;
    }
    let closure = Closure::wrap(Box::new(move || {
        if let Some(doc) = window_document() {
            reveal_body(&doc);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback(LOAD_EVENT, closure.as_ref().unchecked_ref());
    closure.forget();
}

impl Surface for web::HtmlElement {
    fn set_transform(&mut self, transform: &Transform) {
        _ = self.style().set_property("transform", &transform.to_string());
    }

    fn set_opacity(&mut self, opacity: f32) {
        _ = self.style().set_property("opacity", &opacity.to_string());
    }

    fn set_custom_px(&mut self, name: &str, px: f32) {
        _ = self.style().set_property(name, &format!("{}px", px));
    }
}
