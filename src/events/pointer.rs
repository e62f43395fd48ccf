use super::InputWiring;
use crate::dom;
use glam::Vec2;
use reveal_core::{PointerSample, SelectionEvent};
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

fn passive() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    opts
}

/// Client coordinates of every active touch, in order.
fn touch_contacts(ev: &web::TouchEvent) -> SmallVec<[Vec2; 2]> {
    let touches = ev.touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

/// Window-wide pointer and touch tracking. Listeners are passive and never
/// call `preventDefault`, so scrolling keeps working.
pub fn wire_pointer_tracking(w: &InputWiring) {
    let Some(wnd) = web::window() else {
        return;
    };

    {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            w.stage
                .borrow_mut()
                .pointer_moved(&PointerSample::Mouse { client });
        }) as Box<dyn FnMut(_)>);
        let _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "mousemove",
            closure.as_ref().unchecked_ref(),
            &passive(),
        );
        closure.forget();
    }

    {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let contacts = touch_contacts(&ev);
            w.stage.borrow_mut().pointer_moved(&PointerSample::Touch {
                contacts: &contacts,
            });
        }) as Box<dyn FnMut(_)>);
        let _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &passive(),
        );
        closure.forget();
    }
}

/// Touches that land outside the title list close the open previews.
pub fn wire_outside_tap(w: &InputWiring, titles_container: web::Element) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if w.stage.borrow().selection().active_id().is_none() {
            return;
        }
        if dom::is_outside(&titles_container, &ev) {
            w.select(SelectionEvent::TapOutside);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        closure.as_ref().unchecked_ref(),
        &passive(),
    );
    closure.forget();
}
