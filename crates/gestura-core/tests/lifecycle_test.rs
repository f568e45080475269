//! Window listeners, timers and cancellation across session cycles.

use gestura_testing::prelude::*;

#[test]
fn listeners_attach_once_per_session_and_never_leak() {
    let mut rule = GestureTestRule::new(GestureOptions::default());
    rule.record(GestureKind::Drag);
    for i in 0..5 {
        let x = i as f32 * 10.0;
        rule.pointer_down(x, 0.0);
        rule.pointer_down(x, 0.0);
        rule.pointer_move(x + 5.0, 0.0);
        assert_eq!(rule.window().live(GestureKind::Drag), WindowEventType::POINTER.to_vec());
        rule.pointer_up(x + 5.0, 0.0);
        assert!(rule.window().live(GestureKind::Drag).is_empty());
    }
    assert_eq!(rule.window().attach_count(), 15);
    assert_eq!(rule.window().detach_count(), 15);
}

#[test]
fn listeners_carry_event_options() {
    let options = GestureOptions::default().event_options(EventOptions {
        passive: false,
        capture: true,
    });
    let mut rule = GestureTestRule::new(options);
    rule.record(GestureKind::Drag);
    rule.pointer_down(0.0, 0.0);
    let calls = rule.window().calls();
    assert!(calls.iter().all(|call| matches!(
        call,
        ListenerCall::Attach(GestureKind::Drag, _, EventOptions { passive: false, capture: true })
    )));
}

#[test]
fn cancel_flushes_exactly_once_on_next_frame() {
    let mut rule = GestureTestRule::new(GestureOptions::default());
    rule.record(GestureKind::Drag);
    rule.pointer_down(0.0, 0.0);
    rule.pointer_move(20.0, 0.0);
    let before = rule.calls(GestureKind::Drag);

    assert_eq!(rule.controller_mut().cancel(GestureKind::Drag), Outcome::Updated);
    assert_eq!(
        rule.controller_mut().cancel(GestureKind::Drag),
        Outcome::Ignored(IgnoreReason::Canceled)
    );
    assert_eq!(rule.calls(GestureKind::Drag), before);
    assert!(rule.window().live(GestureKind::Drag).is_empty());
    assert!(rule.controller().has_pending_frame());

    assert!(rule.frame().fired(GestureKind::Drag));
    assert!(rule.frame().is_empty());
    assert_eq!(rule.calls(GestureKind::Drag), before + 1);
    let last = rule.last(GestureKind::Drag).expect("cancel flush");
    assert!(last.state.canceled);
    assert!(last.state.last);
    assert!(!last.shared.dragging);

    assert_eq!(
        rule.pointer_move(30.0, 0.0).outcome(GestureKind::Drag),
        Some(Outcome::Ignored(IgnoreReason::NotApplicable))
    );
}

#[test]
fn canceling_a_debounced_session_drops_its_timer() {
    let mut rule = GestureTestRule::new(GestureOptions::default());
    rule.record(GestureKind::Wheel);
    rule.wheel(0.0, 10.0);
    assert!(rule.controller().pending_timer(GestureKind::Wheel).is_some());
    rule.controller_mut().cancel(GestureKind::Wheel);
    assert!(rule.controller().pending_timer(GestureKind::Wheel).is_none());
    assert!(rule.advance(500).is_empty());
    rule.frame();
    assert_eq!(rule.calls(GestureKind::Wheel), 2);

    rule.wheel(0.0, 10.0);
    let restarted = rule.last(GestureKind::Wheel).expect("new session");
    assert!(restarted.state.first);
    assert!(!restarted.state.canceled);
}

#[test]
fn handler_can_cancel_its_own_gesture() {
    let mut rule = GestureTestRule::new(GestureOptions::default());
    rule.record_with(GestureKind::Drag, |event| {
        if event.offset.x > 50.0 {
            event.cancel();
        }
        None
    });
    rule.pointer_down(0.0, 0.0);
    rule.pointer_move(30.0, 0.0);
    assert!(rule.state(GestureKind::Drag).is_engaged());
    rule.pointer_move(60.0, 0.0);
    assert!(rule.state(GestureKind::Drag).canceled);
    rule.frame();
    assert!(rule.last(GestureKind::Drag).map_or(false, |g| g.state.canceled));
}

#[test]
fn stale_cancel_token_has_no_effect_on_new_session() {
    let mut rule = GestureTestRule::new(GestureOptions::default());
    rule.record(GestureKind::Drag);
    rule.pointer_down(0.0, 0.0);
    let token = rule.state(GestureKind::Drag).cancel.clone();
    rule.pointer_up(0.0, 0.0);

    rule.pointer_down(0.0, 0.0);
    token.cancel();
    rule.pointer_move(10.0, 0.0);
    assert!(!rule.state(GestureKind::Drag).canceled);
    assert!(rule.state(GestureKind::Drag).is_engaged());
}

#[test]
fn clean_releases_everything() {
    let mut rule = GestureTestRule::new(
        GestureOptions::default().drag(DragOptions::default().delay(true)),
    );
    rule.record(GestureKind::Drag).record(GestureKind::Scroll);
    rule.pointer_down(0.0, 0.0);
    rule.scroll(0.0, 10.0);
    assert!(rule.controller().next_deadline().is_some());

    rule.controller_mut().clean();
    assert!(rule.controller().next_deadline().is_none());
    assert!(rule.window().live(GestureKind::Drag).is_empty());
    assert!(!rule.controller().shared().scrolling);
    assert!(!rule.state(GestureKind::Drag).is_pending());

    let report = rule.pointer_down(0.0, 0.0);
    assert_eq!(report.outcome(GestureKind::Drag), Some(Outcome::Updated));
}
