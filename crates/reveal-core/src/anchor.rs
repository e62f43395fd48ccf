//! Screen anchor of the selected title on touch layouts.

use crate::breakpoint::{LayoutMode, Viewport};
use glam::Vec2;

/// Bounding box of a rendered title, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl TitleRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Lookup of rendered title geometry. `None` means the element is not
/// mounted (yet).
pub trait TitleGeometry {
    fn title_rect(&self, title_id: &str) -> Option<TitleRect>;
}

/// Geometry source with nothing mounted.
pub struct NoGeometry;

impl TitleGeometry for NoGeometry {
    fn title_rect(&self, _title_id: &str) -> Option<TitleRect> {
        None
    }
}

impl<F> TitleGeometry for F
where
    F: Fn(&str) -> Option<TitleRect>,
{
    fn title_rect(&self, title_id: &str) -> Option<TitleRect> {
        self(title_id)
    }
}

/// Center of the active title relative to the viewport center, or `None`
/// when nothing is active, the layout is not touch, or the element is
/// missing.
pub fn resolve_anchor(
    active: Option<&str>,
    mode: LayoutMode,
    viewport: &Viewport,
    geometry: &dyn TitleGeometry,
) -> Option<Vec2> {
    if !mode.is_touch() {
        return None;
    }
    let id = active?;
    let anchor = geometry.title_rect(id).map(|r| r.center() - viewport.center());
    if anchor.is_none() {
        log::debug!("[anchor] no geometry for '{}', falling back", id);
    }
    anchor.filter(|a| a.is_finite())
}
