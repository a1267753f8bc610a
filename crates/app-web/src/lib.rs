#![cfg(target_arch = "wasm32")]
mod dom;
mod frame;
mod mode;
mod render;

use app_core::CubeAnimator;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

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

    dom::mount_greeting(&document)?;

    let canvas_el = document
        .get_element_by_id("canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Match the canvas backing store to CSS size * devicePixelRatio now and
    // on every window resize; the renderer picks up the new size per frame.
    dom::sync_canvas_backing_size(&canvas);
    dom::wire_canvas_resize(&canvas);

    let query = window.location().search().unwrap_or_default();
    let mode = mode::mode_from_query(&query);
    log::info!("animation mode: {:?}", mode);

    let gpu = frame::init_gpu(&canvas).await;

    let seed = js_sys::Date::now() as u64;
    let ctx = frame::FrameContext {
        animator: CubeAnimator::new(mode, seed),
        canvas,
        gpu,
        started_at: Instant::now(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
