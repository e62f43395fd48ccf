//! Preview placement.
//!
//! Turns a static scene entry into a screen-space offset (relative to the
//! viewport center) and rotation. Two cases exist: the breakpoint-scaled
//! layout that follows the pointer, and the touch arc anchored above the
//! selected title. Everything here is a pure function of a
//! [`PlacementInputs`] snapshot.

use crate::breakpoint::{LayoutMode, ResponsiveSize};
use crate::catalog::SceneEntry;
use crate::constants::{
    CENTER_ENTRY_GAIN, CENTER_ENTRY_INDEX, TOUCH_ARC_GAP_PX, TOUCH_ARC_Y_FACTOR, TOUCH_DAMPENING,
    TOUCH_ROTATION_FACTOR,
};
use glam::Vec2;

/// Immutable view of everything placement depends on for one cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementInputs {
    pub mode: LayoutMode,
    pub size: ResponsiveSize,
    pub pointer: Vec2,
    pub anchor: Option<Vec2>,
}

/// Offset from the viewport center plus rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub offset: Vec2,
    pub rotation_deg: f32,
}

impl Placement {
    /// Blend toward `to`; `t` may exceed 1 while a spring overshoots.
    #[inline]
    pub fn lerp(self, to: Placement, t: f32) -> Placement {
        Placement {
            offset: self.offset.lerp(to.offset, t),
            rotation_deg: self.rotation_deg + (to.rotation_deg - self.rotation_deg) * t,
        }
    }
}

/// How strongly the pointer displaces the entry at `index`.
///
/// The center image of the arc follows at half strength, which gives the
/// cluster its depth. Touch layouts never follow the pointer.
#[inline]
pub fn mouse_gain(index: usize, mode: LayoutMode) -> f32 {
    match mode {
        LayoutMode::Touch => 0.0,
        LayoutMode::Pointer if index == CENTER_ENTRY_INDEX => CENTER_ENTRY_GAIN,
        LayoutMode::Pointer => 1.0,
    }
}

/// Placement before pointer influence is added.
pub fn base_placement(entry: &SceneEntry, inputs: &PlacementInputs) -> Placement {
    let base = Vec2::new(entry.base_offset_x, entry.base_offset_y);
    match (inputs.mode, inputs.anchor) {
        (LayoutMode::Touch, Some(anchor)) => {
            let arc_top = anchor.y - inputs.size.preview_height_px() - TOUCH_ARC_GAP_PX;
            Placement {
                offset: Vec2::new(
                    anchor.x + base.x * TOUCH_DAMPENING,
                    arc_top + base.y * TOUCH_DAMPENING * TOUCH_ARC_Y_FACTOR,
                ),
                rotation_deg: entry.base_rotation_deg * TOUCH_ROTATION_FACTOR,
            }
        }
        _ => Placement {
            offset: base * inputs.size.offset_multiplier,
            rotation_deg: entry.base_rotation_deg,
        },
    }
}

/// Steady-state placement of the entry at ordinal `index`.
pub fn place(entry: &SceneEntry, index: usize, inputs: &PlacementInputs) -> Placement {
    let mut p = base_placement(entry, inputs);
    p.offset += inputs.pointer * mouse_gain(index, inputs.mode);
    p
}
