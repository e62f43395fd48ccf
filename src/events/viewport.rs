use super::InputWiring;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(viewport) = dom::viewport() else {
            return;
        };
        let now = w.clock.now();
        w.stage.borrow_mut().resize(viewport, &*w.geometry, now);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
