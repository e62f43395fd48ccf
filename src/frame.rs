use crate::clock::Clock;
use crate::overlay::{self, HintBanner};
use crate::render::PreviewLayer;
use reveal_core::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub stage: Rc<RefCell<Stage>>,
    pub layer: PreviewLayer,
    pub hint: Rc<HintBanner>,
    pub clock: Clock,
}

impl FrameContext {
    /// Step timed transitions, then draw the resulting snapshot.
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let frames = {
            let mut stage = self.stage.borrow_mut();
            stage.advance(now);
            stage.frame(now)
        };
        overlay::apply_hint_commands(&self.hint, &self.stage);
        self.layer.apply(&frames);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
