use fnv::FnvHashMap;
use reveal_core::{TitleGeometry, TitleRect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current layout viewport in CSS pixels.
pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

pub fn create_element(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    Ok(el)
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

/// True if the event target lies outside `container`.
pub fn is_outside(container: &web::Element, ev: &web::Event) -> bool {
    match ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) {
        Some(node) => !container.contains(Some(&node)),
        None => true,
    }
}

/// Rendered title elements keyed by title id.
#[derive(Default)]
pub struct DomGeometry {
    titles: FnvHashMap<String, web::Element>,
}

impl DomGeometry {
    pub fn insert(&mut self, id: &str, el: web::Element) {
        self.titles.insert(id.to_string(), el);
    }

    /// Mark the active title so CSS can highlight it.
    pub fn mark_active(&self, active: Option<&str>) {
        for (id, el) in &self.titles {
            let cl = el.class_list();
            if Some(id.as_str()) == active {
                let _ = cl.add_1(crate::constants::TITLE_ACTIVE_CLASS);
            } else {
                let _ = cl.remove_1(crate::constants::TITLE_ACTIVE_CLASS);
            }
        }
    }
}

impl TitleGeometry for DomGeometry {
    fn title_rect(&self, title_id: &str) -> Option<TitleRect> {
        let el = self.titles.get(title_id)?;
        if !el.is_connected() {
            return None;
        }
        let r = el.get_bounding_client_rect();
        Some(TitleRect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        ))
    }
}
