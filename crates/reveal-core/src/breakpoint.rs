//! Responsive breakpoint resolution.
//!
//! Maps a viewport width to a discrete size class plus the preview width and
//! offset multiplier used by the placement engine. The table is walked in
//! ascending order with strict `<` comparisons so a width sitting exactly on
//! a threshold lands in the higher bucket.

use crate::constants::{
    BREAKPOINTS, DESKTOP_MULTIPLIER, DESKTOP_WIDTH_PX, PREVIEW_ASPECT, TOUCH_LAYOUT_MAX_WIDTH,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakpointClass {
    Mobile,
    SmallTablet,
    Tablet,
    SmallDesktop,
    Desktop,
}

impl BreakpointClass {
    const ASCENDING: [BreakpointClass; 4] = [
        BreakpointClass::Mobile,
        BreakpointClass::SmallTablet,
        BreakpointClass::Tablet,
        BreakpointClass::SmallDesktop,
    ];
}

/// Preview sizing for one breakpoint bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveSize {
    pub base_width_px: f32,
    pub offset_multiplier: f32,
}

impl ResponsiveSize {
    pub const DESKTOP: ResponsiveSize = ResponsiveSize {
        base_width_px: DESKTOP_WIDTH_PX,
        offset_multiplier: DESKTOP_MULTIPLIER,
    };

    /// Rendered preview height for the 3:2 frame.
    #[inline]
    pub fn preview_height_px(&self) -> f32 {
        self.base_width_px / PREVIEW_ASPECT
    }
}

impl Default for ResponsiveSize {
    fn default() -> Self {
        Self::DESKTOP
    }
}

/// Which selection transition set is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    Pointer,
    Touch,
}

impl LayoutMode {
    #[inline]
    pub fn for_width(width: f32) -> Self {
        if width < TOUCH_LAYOUT_MAX_WIDTH {
            LayoutMode::Touch
        } else {
            LayoutMode::Pointer
        }
    }

    #[inline]
    pub fn is_touch(self) -> bool {
        self == LayoutMode::Touch
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_width(self.width)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Resolve the size class and sizing rule for a viewport width.
pub fn resolve(width: f32) -> (BreakpointClass, ResponsiveSize) {
    for (class, &(below, base_width_px, offset_multiplier)) in
        BreakpointClass::ASCENDING.iter().zip(BREAKPOINTS.iter())
    {
        if width < below {
            return (
                *class,
                ResponsiveSize {
                    base_width_px,
                    offset_multiplier,
                },
            );
        }
    }
    (BreakpointClass::Desktop, ResponsiveSize::DESKTOP)
}
