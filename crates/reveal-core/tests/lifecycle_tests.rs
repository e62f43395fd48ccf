// Preview lifecycle: timed enter, steady, frozen exit.

use glam::Vec2;
use reveal_core::{spring_response, Phase, Placement, PreviewLifecycle, Timing, Visual};

fn at(x: f32, y: f32) -> Placement {
    Placement {
        offset: Vec2::new(x, y),
        rotation_deg: 2.0,
    }
}

fn shown(x: f32, y: f32) -> Visual {
    Visual {
        placement: at(x, y),
        scale: 1.0,
        opacity: 1.0,
    }
}

#[test]
fn spring_starts_at_zero_and_settles_at_one() {
    assert!(spring_response(0.0).abs() < 1e-6);
    assert!((spring_response(2.0) - 1.0).abs() < 1e-4);
    let peak = (1..60)
        .map(|i| spring_response(i as f32 * 0.01))
        .fold(0.0_f32, f32::max);
    assert!(peak > 1.0, "enter spring should overshoot slightly, peak {peak}");
    assert!(peak < 1.2);
}

#[test]
fn entering_uses_rest_placement_and_grows_from_nothing() {
    let lc = PreviewLifecycle::entering(10.0, Timing::default());
    let v = lc.visual(10.0, at(1.0, 1.0), at(5.0, 5.0)).expect("visible");
    assert_eq!(v.placement, at(1.0, 1.0));
    assert!(v.scale.abs() < 1e-6);
    assert!(v.opacity.abs() < 1e-6);

    let later = lc.visual(10.1, at(1.0, 1.0), at(5.0, 5.0)).expect("visible");
    assert!(later.scale > 0.0);
    assert!(later.opacity > 0.0 && later.opacity <= 1.0);
}

#[test]
fn enter_becomes_steady_after_duration() {
    let timing = Timing::default();
    let mut lc = PreviewLifecycle::entering(0.0, timing);
    assert!(!lc.advance(timing.enter_sec / 2.0));
    assert!(lc.advance(timing.enter_sec));
    assert_eq!(lc.phase(), Phase::Steady);
    let v = lc.visual(1.0, at(1.0, 1.0), at(5.0, 5.0)).expect("visible");
    assert_eq!(v.placement, at(5.0, 5.0));
    assert_eq!((v.scale, v.opacity), (1.0, 1.0));
}

#[test]
fn exit_freezes_offset_and_fades_out() {
    let timing = Timing {
        enter_sec: 0.5,
        exit_sec: 0.2,
    };
    let mut lc = PreviewLifecycle::entering(0.0, timing);
    lc.advance(1.0);
    lc.begin_exit(2.0, shown(7.0, -3.0));
    assert!(lc.is_exiting());

    let v = lc.visual(2.1, at(0.0, 0.0), at(100.0, 100.0)).expect("visible");
    assert_eq!(v.placement, at(7.0, -3.0));
    assert!((v.scale - 0.5).abs() < 1e-3);
    assert!((v.opacity - 0.5).abs() < 1e-3);

    // a second exit request keeps the original freeze
    lc.begin_exit(2.15, shown(50.0, 50.0));
    assert_eq!(
        lc.visual(2.15, at(0.0, 0.0), at(0.0, 0.0)).map(|v| v.placement),
        Some(at(7.0, -3.0))
    );

    assert!(lc.advance(2.2));
    assert!(lc.is_gone());
    assert!(lc.visual(2.3, at(0.0, 0.0), at(0.0, 0.0)).is_none());
}

#[test]
fn exit_can_interrupt_enter() {
    let mut lc = PreviewLifecycle::entering(0.0, Timing::default());
    lc.begin_exit(0.1, shown(1.0, 2.0));
    match lc.phase() {
        Phase::Exiting { since, from } => {
            assert_eq!(since, 0.1);
            assert_eq!(from, shown(1.0, 2.0));
        }
        other => panic!("expected exit, got {other:?}"),
    }
}

#[test]
fn exit_shrinks_from_the_size_it_had_when_interrupted() {
    let mut lc = PreviewLifecycle::entering(0.0, Timing::default());
    let partial = lc.visual(0.05, at(0.0, 0.0), at(0.0, 0.0)).expect("visible");
    assert!(partial.scale < 1.0);
    lc.begin_exit(0.05, partial);

    let first = lc.visual(0.05, at(9.0, 9.0), at(9.0, 9.0)).expect("visible");
    assert_eq!(first.scale, partial.scale);
    assert_eq!(first.opacity, partial.opacity);
    let half = lc.visual(0.15, at(9.0, 9.0), at(9.0, 9.0)).expect("visible");
    assert!((half.scale - partial.scale * 0.5).abs() < 1e-4);
    assert!(half.scale < partial.scale);
}

#[test]
fn entering_offset_follows_the_spring_toward_the_pointer_placement() {
    let lc = PreviewLifecycle::entering(0.0, Timing::default());
    let rest = at(0.0, 0.0);
    let target = at(40.0, -20.0);
    let t = 0.05;
    let v = lc.visual(t, rest, target).expect("visible");
    let s = spring_response(t as f32);
    assert!(s > 0.0 && s < 1.0);
    assert!((v.placement.offset.x - 40.0 * s).abs() < 1e-3);
    assert!((v.placement.offset.y + 20.0 * s).abs() < 1e-3);

    // settled by the end of the enter window, so steady takes over without a jump
    let end = lc.visual(Timing::default().enter_sec, rest, target).expect("visible");
    assert!((end.placement.offset - target.offset).length() < 0.1);
}
