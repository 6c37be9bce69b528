#![cfg(target_arch = "wasm32")]
use crate::core::{MotionConfig, MotionEngine, Phase, ViewportState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::wire_load_reveal(&window, &document);
    dom::document_ready(&document).await?;

    log::info!("initializing landing page effects");
    let started = Instant::now();

    let config = MotionConfig::default();
    let mut reduced_motion = dom::prefers_reduced_motion(&window);
    if let Err(e) = config.validate() {
        log::error!("invalid motion config: {}", e);
        reduced_motion = true;
    }

    let (width, height) = dom::viewport_size(&window).unwrap_or((0.0, 0.0));
    let surfaces = dom::discover_surfaces(&document);
    let scheduler = frame::RafScheduler::new(window.clone());
    let slot = scheduler.callback_slot();
    let engine = Rc::new(RefCell::new(MotionEngine::new(
        config,
        ViewportState::new(width, height),
        surfaces,
        scheduler,
    )));
    frame::bind_loop(&slot, engine.clone());

    let phase = engine
        .borrow_mut()
        .start(reduced_motion, dom::scroll_y(&window));
    if phase != Phase::Running {
        log::info!("motion effects disabled");
        return Ok(());
    }

    let listeners = events::Listeners::attach(&window, &engine);
    events::wire_teardown(&window, engine, listeners);

    log::info!("effects initialized in {:?}", started.elapsed());
    Ok(())
}
