use crate::dom;
use crate::render;
use backdrop_core::{scroll_fade_opacity, LayoutEngine, LayoutMode};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct BackdropContext {
    pub engine: LayoutEngine,
    pub document: web::Document,
    pub layer: web::HtmlElement,
    pub mode: LayoutMode,
    relayout_pending: bool,
}

impl BackdropContext {
    pub fn new(engine: LayoutEngine, document: web::Document, layer: web::HtmlElement) -> Self {
        Self {
            engine,
            document,
            layer,
            mode: LayoutMode::Wide,
            relayout_pending: false,
        }
    }

    /// Recompute the layout for the current window size and redraw it.
    pub fn relayout(&mut self) {
        self.relayout_pending = false;
        let Some(window) = web::window() else {
            return;
        };
        let viewport = dom::viewport_size(&window);
        let started = Instant::now();
        let layout = self.engine.layout(viewport);
        let elapsed = started.elapsed();
        self.mode = layout.mode;
        if let Err(e) = render::render_layout(&self.document, &self.layer, &layout) {
            log::error!("render error: {:?}", e);
            return;
        }
        log::debug!(
            "[backdrop] {}x{} {:?} items={} in {:.2}ms",
            viewport.width,
            viewport.height,
            layout.mode,
            layout.items.len(),
            elapsed.as_secs_f64() * 1000.0
        );
        self.refresh_fade();
    }

    /// Apply the scroll fade for the current scroll offset.
    pub fn refresh_fade(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let opacity =
            scroll_fade_opacity(self.mode, dom::scroll_y(&window), self.engine.policy());
        render::set_layer_opacity(&self.layer, opacity);
    }
}

/// Coalesce bursts of resize events into one relayout on the next frame.
pub fn schedule_relayout(ctx: Rc<RefCell<BackdropContext>>) {
    {
        let mut c = ctx.borrow_mut();
        if c.relayout_pending {
            return;
        }
        c.relayout_pending = true;
    }
    let Some(window) = web::window() else {
        return;
    };
    let ctx_frame = ctx.clone();
    let callback = Closure::once_into_js(move || {
        ctx_frame.borrow_mut().relayout();
    });
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        log::warn!("requestAnimationFrame failed, relayout now: {:?}", e);
        ctx.borrow_mut().relayout();
    }
}
