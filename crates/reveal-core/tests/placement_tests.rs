// Placement engine: breakpoint scaling, mouse gain and the touch arc.

use glam::Vec2;
use reveal_core::breakpoint::resolve;
use reveal_core::{
    base_placement, mouse_gain, place, Catalog, LayoutMode, PlacementInputs, ResponsiveSize,
    SceneEntry, TOUCH_ARC_GAP_PX,
};

fn pointer_inputs(width: f32, pointer: Vec2) -> PlacementInputs {
    PlacementInputs {
        mode: LayoutMode::for_width(width),
        size: resolve(width).1,
        pointer,
        anchor: None,
    }
}

fn touch_inputs(anchor: Option<Vec2>) -> PlacementInputs {
    PlacementInputs {
        mode: LayoutMode::Touch,
        size: resolve(390.0).1,
        pointer: Vec2::new(40.0, -12.0),
        anchor,
    }
}

#[test]
fn mouse_gain_halves_the_center_entry_on_pointer_layouts() {
    assert_eq!(mouse_gain(0, LayoutMode::Pointer), 1.0);
    assert_eq!(mouse_gain(1, LayoutMode::Pointer), 0.5);
    assert_eq!(mouse_gain(2, LayoutMode::Pointer), 1.0);
    for i in 0..3 {
        assert_eq!(mouse_gain(i, LayoutMode::Touch), 0.0);
    }
}

#[test]
fn pointer_contribution_of_center_is_half_of_flanks() {
    let entry = SceneEntry::new("a", 0.0, 0.0, 0.0);
    let inputs = pointer_inputs(1440.0, Vec2::new(20.0, -8.0));
    let flank = place(&entry, 0, &inputs).offset;
    let center = place(&entry, 1, &inputs).offset;
    let other = place(&entry, 2, &inputs).offset;
    assert_eq!(flank, Vec2::new(20.0, -8.0));
    assert_eq!(other, flank);
    assert_eq!(center, flank * 0.5);
}

#[test]
fn breakpoint_multiplier_scales_base_offsets() {
    let entry = SceneEntry::new("a", -460.0, -190.0, -8.0);
    let p = place(&entry, 0, &pointer_inputs(900.0, Vec2::ZERO));
    assert!((p.offset.x - (-460.0 * 0.7)).abs() < 1e-3);
    assert!((p.offset.y - (-190.0 * 0.7)).abs() < 1e-3);
    assert_eq!(p.rotation_deg, -8.0);
}

#[test]
fn touch_without_anchor_uses_scaled_layout_and_ignores_pointer() {
    let entry = SceneEntry::new("a", 400.0, -100.0, 4.0);
    let inputs = touch_inputs(None);
    let p = place(&entry, 0, &inputs);
    assert_eq!(p.offset, Vec2::new(400.0 * 0.4, -100.0 * 0.4));
    assert_eq!(p.rotation_deg, 4.0);
}

#[test]
fn anchored_arc_sits_above_the_title() {
    let anchor = Vec2::new(-12.0, 140.0);
    let inputs = touch_inputs(Some(anchor));
    let entry = SceneEntry::new("a", -460.0, -190.0, -8.0);
    let p = place(&entry, 0, &inputs);
    let height = 180.0 * 2.0 / 3.0;
    let expected_y = anchor.y - height - TOUCH_ARC_GAP_PX + (-190.0 * 0.35 * 0.5);
    assert!((p.offset.x - (anchor.x + -460.0 * 0.35)).abs() < 1e-3);
    assert!((p.offset.y - expected_y).abs() < 1e-3);
    assert!((p.rotation_deg - (-8.0 * 0.6)).abs() < 1e-5);
}

#[test]
fn every_builtin_preview_clears_the_anchor_by_the_gap() {
    let catalog = Catalog::builtin();
    for width in [320.0, 500.0, 700.0] {
        for anchor_y in [-200.0, 0.0, 250.0] {
            let anchor = Vec2::new(5.0, anchor_y);
            let inputs = PlacementInputs {
                mode: LayoutMode::Touch,
                size: resolve(width).1,
                pointer: Vec2::new(300.0, 300.0),
                anchor: Some(anchor),
            };
            for title in catalog.titles() {
                for (i, entry) in catalog.scenes(&title.id).iter().enumerate() {
                    let p = place(entry, i, &inputs);
                    assert!(
                        p.offset.y <= anchor.y - TOUCH_ARC_GAP_PX,
                        "{} #{i} at width {width}: y {} vs anchor {}",
                        title.id,
                        p.offset.y,
                        anchor.y
                    );
                }
            }
        }
    }
}

#[test]
fn placement_is_idempotent() {
    let entry = SceneEntry::new("a", 50.0, -200.0, 4.0);
    let inputs = pointer_inputs(1100.0, Vec2::new(13.25, -7.75));
    let a = place(&entry, 1, &inputs);
    let b = place(&entry, 1, &inputs);
    assert_eq!(a.offset.x.to_bits(), b.offset.x.to_bits());
    assert_eq!(a.offset.y.to_bits(), b.offset.y.to_bits());
    assert_eq!(a.rotation_deg.to_bits(), b.rotation_deg.to_bits());

    let touch = touch_inputs(Some(Vec2::new(3.0, 90.0)));
    assert_eq!(place(&entry, 2, &touch), place(&entry, 2, &touch));
}

#[test]
fn base_placement_excludes_pointer() {
    let entry = SceneEntry::new("a", 10.0, 20.0, 1.0);
    let inputs = PlacementInputs {
        mode: LayoutMode::Pointer,
        size: ResponsiveSize::DESKTOP,
        pointer: Vec2::new(99.0, 99.0),
        anchor: None,
    };
    assert_eq!(base_placement(&entry, &inputs).offset, Vec2::new(10.0, 20.0));
    assert_eq!(place(&entry, 0, &inputs).offset, Vec2::new(109.0, 119.0));
}
