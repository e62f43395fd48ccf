#![cfg(target_arch = "wasm32")]
use reveal_core::{Catalog, EngineParams, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod clock;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod style;

use constants::{HINT_ID, NORMALIZER_ATTR, PREVIEW_LAYER_ID, ROOT_ID, TITLES_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reveal-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn engine_params(root: &web::Element) -> EngineParams {
    let mut params = EngineParams::default();
    if let Some(raw) = root.get_attribute(NORMALIZER_ATTR) {
        match style::parse_normalizer(&raw) {
            Some(n) => params.normalizer = n,
            None => log::warn!("[init] ignoring {}={:?}", NORMALIZER_ATTR, raw),
        }
    }
    params
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = dom::element_by_id(&document, ROOT_ID)?;
    let titles_container = dom::element_by_id(&document, TITLES_ID)?;
    let layer_root = dom::element_by_id(&document, PREVIEW_LAYER_ID)?;
    let hint_el = dom::element_by_id(&document, HINT_ID)?;
    let viewport = dom::viewport().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;

    let clock = clock::Clock::start();
    let catalog = Catalog::builtin();
    let params = engine_params(&root);

    let mut geometry = dom::DomGeometry::default();
    let mounted = render::mount_titles(&document, &titles_container, &catalog, &mut geometry)?;

    let stage = Rc::new(RefCell::new(Stage::new(
        catalog,
        params,
        viewport,
        clock.now(),
    )));
    {
        let s = stage.borrow();
        log::info!(
            "[init] viewport {:.0}x{:.0} breakpoint={:?} layout={:?}",
            viewport.width,
            viewport.height,
            s.breakpoint(),
            s.layout_mode()
        );
    }

    let wiring = events::InputWiring {
        stage: stage.clone(),
        geometry: Rc::new(geometry),
        clock,
    };
    events::wire_pointer_tracking(&wiring);
    events::wire_title_handlers(&wiring, &mounted);
    events::wire_outside_tap(&wiring, titles_container);
    events::wire_resize(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        stage,
        layer: render::PreviewLayer::new(document, layer_root),
        hint: Rc::new(overlay::HintBanner::new(hint_el)),
        clock,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
