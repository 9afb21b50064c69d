use crate::dom;
use crate::frame::{self, BackdropContext};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-run the layout whenever the window size changes.
pub fn wire_resize(window: &web::Window, ctx: Rc<RefCell<BackdropContext>>) {
    dom::add_window_listener(window, "resize", move || {
        frame::schedule_relayout(ctx.clone());
    });
}

/// Keep the narrow-layout scroll fade in step with the page.
pub fn wire_scroll(window: &web::Window, ctx: Rc<RefCell<BackdropContext>>) {
    dom::add_window_listener(window, "scroll", move || {
        if let Ok(c) = ctx.try_borrow() {
            c.refresh_fade();
        }
    });
}
