// Pointer tracker normalisation and ignored samples.

use glam::Vec2;
use reveal_core::{PointerSample, PointerTracker, Viewport, DEFAULT_NORMALIZER};

fn viewport() -> Viewport {
    Viewport::new(1024.0, 768.0)
}

#[test]
fn mouse_move_is_centered_and_normalised() {
    let mut t = PointerTracker::default();
    assert_eq!(t.normalizer(), DEFAULT_NORMALIZER);
    let ok = t.record(
        &PointerSample::Mouse {
            client: Vec2::new(612.0, 412.0),
        },
        &viewport(),
    );
    assert!(ok);
    assert_eq!(t.vector(), Vec2::new(25.0, 7.0));
}

#[test]
fn pointer_at_center_is_zero() {
    let mut t = PointerTracker::default();
    t.record(
        &PointerSample::Mouse {
            client: Vec2::new(512.0, 384.0),
        },
        &viewport(),
    );
    assert_eq!(t.vector(), Vec2::ZERO);
}

#[test]
fn larger_normalizer_subdues_displacement() {
    let sample = PointerSample::Mouse {
        client: Vec2::new(1024.0, 0.0),
    };
    let mut a = PointerTracker::new(4.0);
    let mut b = PointerTracker::new(8.0);
    a.record(&sample, &viewport());
    b.record(&sample, &viewport());
    assert_eq!(a.vector(), Vec2::new(128.0, -96.0));
    assert_eq!(b.vector(), Vec2::new(64.0, -48.0));
}

#[test]
fn touch_uses_first_contact() {
    let mut t = PointerTracker::default();
    let contacts = [Vec2::new(0.0, 0.0), Vec2::new(1024.0, 768.0)];
    assert!(t.record(
        &PointerSample::Touch {
            contacts: &contacts
        },
        &viewport()
    ));
    assert_eq!(t.vector(), Vec2::new(-128.0, -96.0));
}

#[test]
fn empty_touch_keeps_previous_vector() {
    let mut t = PointerTracker::default();
    t.record(
        &PointerSample::Mouse {
            client: Vec2::new(612.0, 412.0),
        },
        &viewport(),
    );
    let before = t.vector();
    assert!(!t.record(&PointerSample::Touch { contacts: &[] }, &viewport()));
    assert_eq!(t.vector(), before);
}

#[test]
fn non_finite_coordinates_are_ignored() {
    let mut t = PointerTracker::default();
    assert!(!t.record(
        &PointerSample::Mouse {
            client: Vec2::new(f32::NAN, 10.0),
        },
        &viewport()
    ));
    assert_eq!(t.vector(), Vec2::ZERO);
}

#[test]
fn invalid_normalizer_falls_back_to_default() {
    assert_eq!(PointerTracker::new(0.0).normalizer(), DEFAULT_NORMALIZER);
    assert_eq!(PointerTracker::new(-2.0).normalizer(), DEFAULT_NORMALIZER);
    assert_eq!(PointerTracker::new(f32::INFINITY).normalizer(), DEFAULT_NORMALIZER);
    assert_eq!(PointerTracker::new(6.0).normalizer(), 6.0);
}
