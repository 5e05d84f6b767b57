use pixel_runner::fingerprint::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn assert_draw(view: &ScanView, part: Part, start: f32, end: f32) {
    let (s, e) = view.part(part).draw;
    assert!(close(s, start) && close(e, end), "{part:?} draw = ({s}, {e})");
}

/// Three clicks spaced two seconds apart, then run past the last tween.
fn completed() -> Scanner {
    let mut scanner = Scanner::new();
    for _ in 0..MAX_ATTEMPTS {
        assert!(scanner.click());
        scanner.advance(2.0);
    }
    scanner.advance(10.0);
    scanner
}

// ── Ease ──────────────────────────────────────────────────────────────────────

#[test]
fn ease_endpoints_are_fixed() {
    for ease in [Ease::Linear, Ease::Power1Out, Ease::Power3Out] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(2.0), 1.0);
    }
}

#[test]
fn ease_out_curves_lead_linear() {
    assert!(close(Ease::Linear.apply(0.5), 0.5));
    assert!(close(Ease::Power1Out.apply(0.5), 0.75));
    assert!(close(Ease::Power3Out.apply(0.5), 0.9375));
}

// ── Timeline ──────────────────────────────────────────────────────────────────

#[test]
fn timeline_end_covers_latest_tween() {
    let mut timeline = Timeline::default();
    assert!(timeline.is_empty());
    timeline.push(Tween {
        part: Part::Head,
        to: Value::Opacity(0.0),
        start: 3.0,
        duration: 0.5,
        ease: Ease::Linear,
    });
    timeline.push(Tween {
        part: Part::Head,
        to: Value::Opacity(0.5),
        start: 1.0,
        duration: 1.0,
        ease: Ease::Linear,
    });
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.end(), 3.5);
}

#[test]
fn later_tween_continues_from_earlier_result() {
    let mut timeline = Timeline::default();
    // Pushed out of order; sampling still applies them by start time
    timeline.push(Tween {
        part: Part::Head,
        to: Value::Opacity(0.0),
        start: 2.0,
        duration: 1.0,
        ease: Ease::Linear,
    });
    timeline.push(Tween {
        part: Part::Head,
        to: Value::Opacity(0.5),
        start: 0.0,
        duration: 1.0,
        ease: Ease::Linear,
    });

    let mut view = ScanView::default();
    timeline.sample(1.5, &mut view);
    assert!(close(view.part(Part::Head).opacity, 0.5));

    let mut view = ScanView::default();
    timeline.sample(2.5, &mut view);
    assert!(close(view.part(Part::Head).opacity, 0.25));
}

#[test]
fn tween_before_start_has_no_effect() {
    let mut timeline = Timeline::default();
    timeline.push(Tween {
        part: Part::Smile,
        to: Value::Draw(45.0, 55.0),
        start: 5.0,
        duration: 1.0,
        ease: Ease::Power3Out,
    });
    let mut view = ScanView::default();
    timeline.sample(4.9, &mut view);
    assert_eq!(view, ScanView::default());
}

// ── Scanner ───────────────────────────────────────────────────────────────────

#[test]
fn initial_view_shows_base_and_tooltip() {
    let view = Scanner::new().view();
    assert_draw(&view, Part::Base, 0.0, 100.0);
    assert_draw(&view, Part::Tooltip, 0.0, 100.0);
    assert_draw(&view, Part::Cover, 0.0, 0.0);
    assert_eq!(view.part(Part::Message).opacity, 0.0);
    assert!(!view.light_background);
}

#[test]
fn clicks_reveal_cover_in_steps() {
    let mut scanner = Scanner::new();

    assert!(scanner.click());
    scanner.advance(0.5);
    assert_draw(&scanner.view(), Part::Cover, 0.0, 37.5);
    scanner.advance(1.0);
    assert_draw(&scanner.view(), Part::Cover, 0.0, 50.0);

    assert!(scanner.click());
    scanner.advance(1.0);
    assert_draw(&scanner.view(), Part::Cover, 0.0, 80.0);
    assert_eq!(scanner.attempts(), 2);
    assert!(!scanner.is_complete());
    assert!(!scanner.view().light_background);
}

#[test]
fn clicks_after_completion_are_ignored() {
    let mut scanner = completed();
    assert!(scanner.is_complete());
    assert!(!scanner.click());
    assert_eq!(scanner.attempts(), MAX_ATTEMPTS);
}

#[test]
fn completion_settles_into_unlocked_face() {
    let scanner = completed();
    assert!(scanner.is_settled());

    let view = scanner.view();
    assert!(view.light_background);

    assert_draw(&view, Part::Cover, 102.0, 102.0);
    assert!(close(view.part(Part::Cover).opacity, 0.0));
    assert!(close(view.part(Part::Base).opacity, 0.0));

    for part in [Part::Head, Part::LeftEye, Part::RightEye] {
        assert_draw(&view, part, 0.0, 100.0);
    }
    assert_draw(&view, Part::Smile, 45.0, 55.0);
    for part in [Part::LeftEye, Part::RightEye, Part::Smile] {
        assert!(close(view.part(part).offset_y, 0.0), "{part:?}");
    }

    assert!(close(view.part(Part::Tooltip).opacity, 0.0));
    assert!(close(view.part(Part::Message).opacity, 1.0));
    assert!(close(view.part(Part::Message).offset_y, -12.0));
}

#[test]
fn face_lifts_before_settling_back() {
    let mut scanner = Scanner::new();
    scanner.click();
    scanner.advance(1.0);
    scanner.click();
    scanner.advance(1.0);
    scanner.click(); // completes at t = 2.0
    assert!(scanner.view().light_background);
    assert!(!scanner.is_settled());

    scanner.advance(3.5); // t = 5.5: lift done, return starts at 6.0
    let view = scanner.view();
    assert!(close(view.part(Part::LeftEye).offset_y, -12.0));
    assert!(close(view.part(Part::RightEye).offset_y, -12.0));
}

#[test]
fn reset_returns_to_locked_state() {
    let mut scanner = completed();
    scanner.reset();
    assert_eq!(scanner.attempts(), 0);
    assert_eq!(scanner.clock(), 0.0);
    assert_eq!(scanner.view(), ScanView::default());
    assert!(scanner.click());
}
