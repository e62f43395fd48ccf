//! Coordinating component.
//!
//! `Stage` owns every piece of mutable UI state (viewport, pointer,
//! selection, anchor, live previews, hint timer). Event handlers mutate it
//! synchronously; the presentation pass reads an immutable frame produced by
//! [`Stage::frame`], which has no side effects.

use crate::anchor::{resolve_anchor, TitleGeometry};
use crate::breakpoint::{self, BreakpointClass, LayoutMode, ResponsiveSize, Viewport};
use crate::catalog::{Catalog, SceneEntry};
use crate::constants::{DEFAULT_NORMALIZER, HINT_DURATION_SEC};
use crate::hint::{HintCommand, HintTimer, HintToken};
use crate::lifecycle::{Phase, PreviewLifecycle, Timing, Visual};
use crate::placement::{base_placement, place, Placement, PlacementInputs};
use crate::pointer::{PointerSample, PointerTracker};
use crate::selection::{Selection, SelectionController, SelectionEvent, Transition};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct EngineParams {
    pub normalizer: f32,
    pub hint_duration_sec: f64,
    pub timing: Timing,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            normalizer: DEFAULT_NORMALIZER,
            hint_duration_sec: HINT_DURATION_SEC,
            timing: Timing::default(),
        }
    }
}

/// Transform record handed to the renderer, relative to the viewport center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewTransform {
    pub x: f32,
    pub y: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl From<Visual> for PreviewTransform {
    fn from(v: Visual) -> Self {
        Self {
            x: v.placement.offset.x,
            y: v.placement.offset.y,
            rotation_deg: v.placement.rotation_deg,
            scale: v.scale,
            opacity: v.opacity,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewFrame {
    /// Unique per spawned preview; a title selected twice gets new keys.
    pub key: u64,
    pub title_id: String,
    pub index: usize,
    pub image_ref: String,
    pub width_px: f32,
    pub phase: Phase,
    pub transform: PreviewTransform,
    pub z_index: i32,
}

#[derive(Clone, Debug)]
struct LivePreview {
    key: u64,
    title_id: String,
    index: usize,
    lifecycle: PreviewLifecycle,
}

pub type Frame = SmallVec<[PreviewFrame; 6]>;

const HIDDEN: Visual = Visual {
    placement: Placement {
        offset: Vec2::ZERO,
        rotation_deg: 0.0,
    },
    scale: 0.0,
    opacity: 0.0,
};

pub struct Stage {
    catalog: Catalog,
    params: EngineParams,
    viewport: Viewport,
    breakpoint: BreakpointClass,
    size: ResponsiveSize,
    mode: LayoutMode,
    pointer: PointerTracker,
    selection: SelectionController,
    anchor: Option<Vec2>,
    previews: Vec<LivePreview>,
    next_key: u64,
    hint: HintTimer,
    hint_commands: SmallVec<[HintCommand; 2]>,
}

impl Stage {
    pub fn new(catalog: Catalog, params: EngineParams, viewport: Viewport, now: f64) -> Self {
        let (breakpoint, size) = breakpoint::resolve(viewport.width);
        let mut stage = Self {
            catalog,
            pointer: PointerTracker::new(params.normalizer),
            hint: HintTimer::new(params.hint_duration_sec),
            params,
            viewport,
            breakpoint,
            size,
            mode: viewport.layout_mode(),
            selection: SelectionController::new(),
            anchor: None,
            previews: Vec::new(),
            next_key: 0,
            hint_commands: SmallVec::new(),
        };
        stage.sync_hint(now);
        stage
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn breakpoint(&self) -> BreakpointClass {
        self.breakpoint
    }

    pub fn size(&self) -> ResponsiveSize {
        self.size
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.vector()
    }

    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }

    pub fn selection(&self) -> &Selection {
        self.selection.state()
    }

    pub fn hint_visible(&self) -> bool {
        self.hint.is_visible()
    }

    /// Viewport resize. Breakpoint and layout mode update together; the
    /// anchor is re-resolved since the title may have moved.
    pub fn resize(&mut self, viewport: Viewport, geometry: &dyn TitleGeometry, now: f64) {
        let (breakpoint, size) = breakpoint::resolve(viewport.width);
        let mode = viewport.layout_mode();
        if breakpoint != self.breakpoint || mode != self.mode {
            log::info!(
                "[resize] {:.0}x{:.0} -> {:?} ({:?})",
                viewport.width,
                viewport.height,
                breakpoint,
                mode
            );
        }
        self.viewport = viewport;
        self.breakpoint = breakpoint;
        self.size = size;
        self.mode = mode;
        self.refresh_anchor(geometry);
        self.sync_hint(now);
    }

    /// Pointer or touch move. Returns false if the sample was ignored.
    pub fn pointer_moved(&mut self, sample: &PointerSample<'_>) -> bool {
        self.pointer.record(sample, &self.viewport)
    }

    /// Hover, tap or outside-tap. Starts exits for the previous title's
    /// previews and entries for the new one.
    pub fn selection_event(
        &mut self,
        event: SelectionEvent,
        geometry: &dyn TitleGeometry,
        now: f64,
    ) -> Option<Transition> {
        let transition = self.selection.apply(event, self.mode)?;

        let inputs = self.inputs();
        for p in &mut self.previews {
            if p.lifecycle.is_exiting() {
                continue;
            }
            let shown = entry_for(&self.catalog, p)
                .and_then(|e| shown_visual(e, p, &inputs, now))
                .unwrap_or(HIDDEN);
            p.lifecycle.begin_exit(now, shown);
        }

        if let Selection::Active(id) = &transition.to {
            let count = self.catalog.scenes(id).len();
            if count == 0 {
                log::warn!("[select] no scenes for '{}'", id);
            }
            for index in 0..count {
                self.next_key += 1;
                self.previews.push(LivePreview {
                    key: self.next_key,
                    title_id: id.clone(),
                    index,
                    lifecycle: PreviewLifecycle::entering(now, self.params.timing),
                });
            }
        }

        self.refresh_anchor(geometry);
        self.sync_hint(now);
        Some(transition)
    }

    /// Timed transitions: enter -> steady, exit -> gone, hint expiry.
    pub fn advance(&mut self, now: f64) {
        for p in &mut self.previews {
            p.lifecycle.advance(now);
        }
        self.previews.retain(|p| !p.lifecycle.is_gone());
        if self.hint.fire_due(now) {
            self.hint_commands.push(HintCommand::Hide);
        }
    }

    /// Timer callback from the host. Stale tokens are ignored.
    pub fn hint_fired(&mut self, token: HintToken) -> bool {
        self.hint.fire(token)
    }

    /// Drain hint show/hide requests produced by the last handlers.
    pub fn take_hint_commands(&mut self) -> SmallVec<[HintCommand; 2]> {
        std::mem::take(&mut self.hint_commands)
    }

    /// Snapshot of the inputs placement depends on.
    pub fn inputs(&self) -> PlacementInputs {
        PlacementInputs {
            mode: self.mode,
            size: self.size,
            pointer: self.pointer.vector(),
            anchor: self.anchor.filter(|_| self.mode.is_touch()),
        }
    }

    /// Render records for every live preview, in stacking order.
    pub fn frame(&self, now: f64) -> Frame {
        let inputs = self.inputs();
        let mut out: Frame = self
            .previews
            .iter()
            .filter_map(|p| {
                let entry = entry_for(&self.catalog, p)?;
                let at_rest = base_placement(entry, &inputs);
                let steady = place(entry, p.index, &inputs);
                let visual = p.lifecycle.visual(now, at_rest, steady)?;
                Some(PreviewFrame {
                    key: p.key,
                    title_id: p.title_id.clone(),
                    index: p.index,
                    image_ref: entry.image_ref.clone(),
                    width_px: self.size.base_width_px,
                    phase: p.lifecycle.phase(),
                    transform: visual.into(),
                    z_index: p.index as i32,
                })
            })
            .collect();
        out.sort_by_key(|f| f.z_index);
        out
    }

    fn refresh_anchor(&mut self, geometry: &dyn TitleGeometry) {
        self.anchor = resolve_anchor(
            self.selection.active_id(),
            self.mode,
            &self.viewport,
            geometry,
        );
    }

    fn sync_hint(&mut self, now: f64) {
        let wanted = self.mode.is_touch() && self.selection.active_id().is_none();
        if wanted {
            if let Some(token) = self.hint.arm(now) {
                self.hint_commands.push(HintCommand::Show {
                    token,
                    duration_sec: self.hint.duration_sec(),
                });
            }
        } else if self.hint.cancel() {
            self.hint_commands.push(HintCommand::Hide);
        }
    }
}

fn entry_for<'a>(catalog: &'a Catalog, p: &LivePreview) -> Option<&'a SceneEntry> {
    catalog.scenes(&p.title_id).get(p.index)
}

fn shown_visual(
    entry: &SceneEntry,
    p: &LivePreview,
    inputs: &PlacementInputs,
    now: f64,
) -> Option<Visual> {
    let at_rest = base_placement(entry, inputs);
    let steady = place(entry, p.index, inputs);
    p.lifecycle.visual(now, at_rest, steady)
}
