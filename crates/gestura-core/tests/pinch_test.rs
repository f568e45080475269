//! Two-finger and trackpad pinch.

use gestura_testing::prelude::*;

fn pinch_rule(options: PinchOptions) -> GestureTestRule {
    let mut rule = GestureTestRule::new(GestureOptions::default().pinch(options));
    rule.record(GestureKind::Pinch);
    rule
}

#[test]
fn spreading_fingers_grows_distance() {
    let mut rule = pinch_rule(PinchOptions::default());
    rule.touch_start(&[(1, 0.0, 0.0), (2, 0.0, 100.0)]);
    let start = rule.last(GestureKind::Pinch).expect("pinch starts");
    assert!(start.state.first);
    assert_eq!(start.values.values().x, 100.0);
    assert_eq!(start.state.origin, Vec2::new(0.0, 50.0));
    assert_eq!(start.shared.touches, 2);

    rule.advance(20);
    rule.touch_move(&[(1, 0.0, 0.0), (2, 0.0, 200.0)]);
    let moved = rule.last(GestureKind::Pinch).expect("pinch moves");
    assert_eq!(moved.state.movement.x, 100.0);
    assert_approx_eq(moved.state.movement.y, 0.0, 1e-4, "no rotation");
    assert_eq!(moved.state.origin, Vec2::new(0.0, 100.0));
    match moved.values {
        StateValues::DistanceAngle { da, vdva } => {
            assert_eq!(da.x, 200.0);
            assert_approx_eq(vdva.x, 5.0, 1e-5, "distance velocity");
        }
        other => panic!("unexpected values {other:?}"),
    }
}

#[test]
fn rotation_across_the_seam_stays_continuous() {
    let mut rule = pinch_rule(PinchOptions::default());
    rule.touch_start(&[(1, 0.0, 0.0), (2, 1.0, -100.0)]);
    let initial_angle = rule.state(GestureKind::Pinch).values.y;
    assert!(initial_angle < -179.0, "angle {initial_angle}");

    rule.touch_move(&[(1, 0.0, 0.0), (2, -1.0, -100.0)]);
    let state = rule.state(GestureKind::Pinch);
    assert!(state.values.y > 179.0, "raw angle wraps, got {}", state.values.y);
    assert_eq!(state.turns, 1);
    let step = 2.0 * 1.0_f32.atan2(100.0).to_degrees();
    assert_approx_eq(state.movement.y, -step, 1e-3, "angle movement");
}

#[test]
fn unrelated_touch_changes_are_ignored() {
    let mut rule = pinch_rule(PinchOptions::default());
    rule.touch_start(&[(1, 0.0, 0.0), (2, 0.0, 100.0)]);
    assert_eq!(
        rule.touch_move(&[(1, 0.0, 0.0), (3, 0.0, 100.0)])
            .outcome(GestureKind::Pinch),
        Some(Outcome::Ignored(IgnoreReason::StalePointer))
    );
    assert_eq!(
        rule.touch_start(&[(1, 0.0, 0.0), (2, 0.0, 100.0), (3, 5.0, 5.0)])
            .outcome(GestureKind::Pinch),
        Some(Outcome::Ignored(IgnoreReason::AlreadyActive))
    );
    assert_eq!(
        rule.touch_end(&[(1, 0.0, 0.0), (2, 0.0, 100.0)], &[3])
            .outcome(GestureKind::Pinch),
        Some(Outcome::Ignored(IgnoreReason::NotApplicable))
    );
    assert!(rule.state(GestureKind::Pinch).is_engaged());

    let report = rule.touch_end(&[(2, 0.0, 100.0)], &[1]);
    assert!(report.fired(GestureKind::Pinch));
    assert!(rule.last(GestureKind::Pinch).map_or(false, |g| g.state.last));
}

#[test]
fn distance_bounds_clamp_on_release() {
    let mut rule = pinch_rule(
        PinchOptions::default()
            .distance_bounds(-50.0, 50.0)
            .rubberband(true),
    );
    rule.touch_start(&[(1, 0.0, 0.0), (2, 0.0, 100.0)]);
    rule.touch_move(&[(1, 0.0, 0.0), (2, 0.0, 300.0)]);
    let stretched = rule.state(GestureKind::Pinch).movement.x;
    assert_strictly_between(stretched, 50.0, 200.0, "stretched distance");
    rule.touch_end(&[(1, 0.0, 0.0)], &[2]);
    assert_eq!(rule.state(GestureKind::Pinch).movement.x, 50.0);
}

#[test]
fn ctrl_wheel_pinches_around_the_cursor() {
    let mut rule = pinch_rule(PinchOptions::default());
    rule.record(GestureKind::Wheel);
    let report = rule.ctrl_wheel(10.0, Vec2::new(50.0, 60.0));
    assert_eq!(
        report.outcome(GestureKind::Wheel),
        Some(Outcome::Ignored(IgnoreReason::NotApplicable))
    );
    assert!(report.fired(GestureKind::Pinch));
    rule.ctrl_wheel(5.0, Vec2::new(50.0, 60.0));

    let state = rule.state(GestureKind::Pinch);
    assert_eq!(state.movement, Vec2::new(-15.0, 0.0));
    assert_eq!(state.origin, Vec2::new(50.0, 60.0));
    assert_eq!(rule.calls(GestureKind::Wheel), 0);

    assert!(rule.advance(140).fired(GestureKind::Pinch));
    assert!(rule.last(GestureKind::Pinch).map_or(false, |g| g.state.last));
}

#[test]
fn one_finger_does_not_start() {
    let mut rule = pinch_rule(PinchOptions::default());
    assert_eq!(
        rule.touch_start(&[(1, 0.0, 0.0)]).outcome(GestureKind::Pinch),
        Some(Outcome::Ignored(IgnoreReason::NotEnoughTouches))
    );
    assert_eq!(rule.calls(GestureKind::Pinch), 0);
}
