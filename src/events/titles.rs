use super::InputWiring;
use reveal_core::SelectionEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

fn listen_mouse(el: &web::Element, kind: &str, mut handler: impl FnMut() + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |_: web::MouseEvent| handler()) as Box<dyn FnMut(_)>
    );
    let _ = el.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Hover and tap handlers for each title. The stage decides which of them
/// count for the current layout.
pub fn wire_title_handlers(w: &InputWiring, titles: &[(String, web::Element)]) {
    for (id, el) in titles {
        {
            let (w, id) = (w.clone(), id.clone());
            listen_mouse(el, "mouseenter", move || {
                w.select(SelectionEvent::PointerEnter(id.clone()));
            });
        }
        {
            let (w, id) = (w.clone(), id.clone());
            listen_mouse(el, "mousemove", move || {
                w.select(SelectionEvent::PointerMove(id.clone()));
            });
        }
        {
            let (w, id) = (w.clone(), id.clone());
            listen_mouse(el, "mouseleave", move || {
                w.select(SelectionEvent::PointerLeave(id.clone()));
            });
        }
        {
            let (w, id) = (w.clone(), id.clone());
            let closure =
                wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
                    // keep the document-level outside-tap listener from seeing it
                    ev.stop_propagation();
                    w.select(SelectionEvent::Tap(id.clone()));
                }) as Box<dyn FnMut(_)>);
            let _ = el
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
