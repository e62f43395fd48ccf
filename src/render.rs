//! Presentation pass: title list markup and preview elements.

use crate::constants::{PREVIEW_CLASS, TITLE_CLASS, TITLE_ID_ATTR, TITLE_TEXT_CLASS};
use crate::dom::{self, DomGeometry};
use crate::style;
use fnv::FnvHashMap;
use reveal_core::{Catalog, PreviewFrame};
use web_sys as web;

/// Append one element per title to `container` and return them for event
/// wiring and geometry lookups.
pub fn mount_titles(
    document: &web::Document,
    container: &web::Element,
    catalog: &Catalog,
    geometry: &mut DomGeometry,
) -> anyhow::Result<Vec<(String, web::Element)>> {
    let mut mounted = Vec::with_capacity(catalog.titles().len());
    for title in catalog.titles() {
        let el = dom::create_element(document, "div", TITLE_CLASS)?;
        let _ = el.set_attribute(TITLE_ID_ATTR, &title.id);
        let text = dom::create_element(document, "span", TITLE_TEXT_CLASS)?;
        text.set_text_content(Some(&title.display_name));
        let _ = el.append_child(&text);
        let _ = container.append_child(&el);
        geometry.insert(&title.id, el.clone());
        mounted.push((title.id.clone(), el));
    }
    log::info!("[init] mounted {} titles", mounted.len());
    Ok(mounted)
}

/// Keeps one DOM node per live preview and syncs them to each frame.
pub struct PreviewLayer {
    document: web::Document,
    root: web::Element,
    nodes: FnvHashMap<u64, web::Element>,
}

impl PreviewLayer {
    pub fn new(document: web::Document, root: web::Element) -> Self {
        Self {
            document,
            root,
            nodes: FnvHashMap::default(),
        }
    }

    pub fn apply(&mut self, frames: &[PreviewFrame]) {
        for f in frames {
            if !self.nodes.contains_key(&f.key) {
                match self.create_node(f) {
                    Ok(el) => {
                        self.nodes.insert(f.key, el);
                    }
                    Err(e) => {
                        log::error!("[render] preview {}#{}: {:?}", f.title_id, f.index, e);
                        continue;
                    }
                }
            }
            if let Some(el) = self.nodes.get(&f.key) {
                let _ = el.set_attribute("style", &style::preview_style(f));
            }
        }
        self.nodes.retain(|key, el| {
            let live = frames.iter().any(|f| f.key == *key);
            if !live {
                el.remove();
            }
            live
        });
    }

    fn create_node(&self, f: &PreviewFrame) -> anyhow::Result<web::Element> {
        let el = dom::create_element(&self.document, "div", PREVIEW_CLASS)?;
        let img = dom::create_element(&self.document, "img", "")?;
        let _ = img.set_attribute("src", &f.image_ref);
        let _ = img.set_attribute("alt", &style::preview_alt(&f.title_id, f.index));
        let _ = img.set_attribute("loading", "lazy");
        let _ = el.append_child(&img);
        let _ = self.root.append_child(&el);
        Ok(el)
    }
}
