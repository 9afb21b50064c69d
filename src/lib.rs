#![cfg(target_arch = "wasm32")]
use backdrop_core::{LayoutEngine, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    if let Err(e) = mount() {
        // Pages without a backdrop layer only use the exported functions.
        log::warn!("backdrop not mounted: {:?}", e);
    }
    Ok(())
}

/// Layout for a viewport as a plain JS object (camelCase fields).
#[wasm_bindgen(js_name = computeDecorationLayout)]
pub fn compute_decoration_layout(width: i32, height: i32) -> Result<JsValue, JsValue> {
    let layout = LayoutEngine::default().layout(Viewport::new(width, height));
    let json = serde_json::to_string(&layout).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Narrow-layout layer opacity for a scroll offset; 1 for wide viewports.
#[wasm_bindgen(js_name = scrollFadeOpacity)]
pub fn scroll_fade_opacity(width: i32, scroll_y: f64) -> f64 {
    let engine = LayoutEngine::default();
    let mode = backdrop_core::LayoutMode::for_width(width, engine.policy());
    backdrop_core::scroll_fade_opacity(mode, scroll_y, engine.policy())
}

fn mount() -> anyhow::Result<()> {
    static MOUNTED: AtomicBool = AtomicBool::new(false);
    if MOUNTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let layer = render::find_layer(&document)?;

    let ctx = Rc::new(RefCell::new(frame::BackdropContext::new(
        LayoutEngine::default(),
        document,
        layer,
    )));
    ctx.borrow_mut().relayout();
    {
        let c = ctx.borrow();
        log::info!(
            "[backdrop] mounted mode={:?} seed={}",
            c.mode,
            c.engine.policy().seed
        );
    }

    events::wire_resize(&window, ctx.clone());
    events::wire_scroll(&window, ctx);
    Ok(())
}
