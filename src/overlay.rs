use crate::constants::{HINT_TEXT, HINT_VISIBLE_CLASS};
use reveal_core::{HintCommand, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The "tap a title" banner plus its pending dismissal timeout.
pub struct HintBanner {
    el: web::Element,
    timeout: RefCell<Option<i32>>,
}

impl HintBanner {
    pub fn new(el: web::Element) -> Self {
        el.set_text_content(Some(HINT_TEXT));
        Self {
            el,
            timeout: RefCell::new(None),
        }
    }

    #[inline]
    pub fn show(&self) {
        let _ = self.el.class_list().add_1(HINT_VISIBLE_CLASS);
    }

    #[inline]
    pub fn hide(&self) {
        let _ = self.el.class_list().remove_1(HINT_VISIBLE_CLASS);
    }

    fn clear_timeout(&self) {
        if let Some(handle) = self.timeout.borrow_mut().take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(handle);
            }
        }
    }
}

/// Apply queued hint commands. A show schedules its own dismissal; a hide
/// clears any pending timeout so it cannot fire against a later hint.
pub fn apply_hint_commands(banner: &Rc<HintBanner>, stage: &Rc<RefCell<Stage>>) {
    let commands = stage.borrow_mut().take_hint_commands();
    for cmd in commands {
        match cmd {
            HintCommand::Show {
                token,
                duration_sec,
            } => {
                banner.clear_timeout();
                banner.show();
                let banner_cb = banner.clone();
                let stage_cb = stage.clone();
                let cb = Closure::once_into_js(move || {
                    banner_cb.timeout.borrow_mut().take();
                    if stage_cb.borrow_mut().hint_fired(token) {
                        banner_cb.hide();
                        log::info!("[hint] dismissed");
                    }
                });
                if let Some(w) = web::window() {
                    match w.set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.unchecked_ref::<js_sys::Function>(),
                        (duration_sec * 1000.0) as i32,
                    ) {
                        Ok(handle) => *banner.timeout.borrow_mut() = Some(handle),
                        Err(e) => log::warn!("[hint] setTimeout failed: {:?}", e),
                    }
                }
            }
            HintCommand::Hide => {
                banner.clear_timeout();
                banner.hide();
            }
        }
    }
}
