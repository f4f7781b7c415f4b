// Unit tests for the ESPE Connect swipe deck core

use espe_connect::core::{
    accept_opacity, decide, reject_opacity, rotation_deg, CandidateQueue, CardTransform,
    DeckPhase, DeckState, DeckTuning, GestureOutcome, GestureState,
};
use espe_connect::models::{Candidate, Decision};

fn create_candidate(id: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: format!("User {}", id),
        career: "Systems Engineering".to_string(),
        gender: None,
        bio: None,
        avatar_url: None,
        interests: vec!["music".to_string()],
    }
}

fn create_tuning() -> DeckTuning {
    DeckTuning {
        viewport_width: 400.0,
        swipe_threshold_fraction: 0.25,
        max_rotation_deg: 15.0,
        stack_depth: 2,
    }
}

fn create_ready_deck(ids: &[&str]) -> DeckState {
    let mut deck = DeckState::new(create_tuning());
    let ticket = deck.begin_fetch(false).unwrap();
    deck.apply_fetch(ticket, Ok(ids.iter().map(|id| create_candidate(id)).collect()));
    deck
}

#[test]
fn test_no_decision_inside_threshold() {
    // abs(dx) <= threshold never produces a decision, for any dy.
    for dx in [-100.0, -55.5, -0.1, 0.0, 42.0, 99.9, 100.0] {
        assert_eq!(decide(dx, 100.0), None, "dx={} should not decide", dx);
    }
}

#[test]
fn test_exactly_one_decision_past_threshold() {
    assert_eq!(decide(100.01, 100.0), Some(Decision::Accept));
    assert_eq!(decide(350.0, 100.0), Some(Decision::Accept));
    assert_eq!(decide(-100.01, 100.0), Some(Decision::Reject));
    assert_eq!(decide(-350.0, 100.0), Some(Decision::Reject));
}

#[test]
fn test_velocity_never_affects_decision() {
    let mut deck = create_ready_deck(&["a"]);
    deck.begin_gesture();

    // Fast flick, tiny displacement: no decision.
    let outcome = deck.end_gesture(40.0, 0.0, 900.0);
    assert_eq!(outcome, GestureOutcome::SpringBack);

    // Slow drag past the threshold: decision, velocity only tags along.
    deck.begin_gesture();
    match deck.end_gesture(150.0, 0.0, 0.01) {
        GestureOutcome::Decided {
            decision,
            exit_velocity,
            ..
        } => {
            assert_eq!(decision, Decision::Accept);
            assert_eq!(exit_velocity, 0.01);
        }
        other => panic!("expected decision, got {:?}", other),
    }
}

#[test]
fn test_cursor_monotonic_and_bounded() {
    let mut queue = CandidateQueue::new();
    queue.replace(vec![
        create_candidate("a"),
        create_candidate("b"),
        create_candidate("c"),
    ]);

    let mut previous = queue.cursor();
    for _ in 0..10 {
        queue.advance();
        assert!(queue.cursor() >= previous);
        assert!(queue.cursor() <= queue.len());
        previous = queue.cursor();
    }
    assert_eq!(queue.cursor(), queue.len());
}

#[test]
fn test_gesture_updates_apply_in_order() {
    let mut deck = create_ready_deck(&["a"]);
    deck.begin_gesture();

    let mut last_dx = 0.0;
    for dx in [5.0, 12.0, 30.0, 55.0, 80.0] {
        let transform = deck.update_gesture(dx, 0.0).unwrap();
        assert!(transform.translate_x >= last_dx);
        last_dx = transform.translate_x;
    }
    assert_eq!(deck.gesture().unwrap().dx, 80.0);
}

#[test]
fn test_overlay_contract_across_sweep() {
    let threshold = 100.0;
    let mut previous_accept = 0.0;
    for step in 0..=120 {
        let dx = f64::from(step);
        let accept = accept_opacity(dx, threshold);
        assert!((0.0..=1.0).contains(&accept));
        assert!(accept >= previous_accept, "accept opacity must be monotonic");
        // Mirror property.
        assert_eq!(reject_opacity(-dx, threshold), accept);
        previous_accept = accept;
    }
    assert_eq!(accept_opacity(threshold, threshold), 1.0);
}

#[test]
fn test_rotation_clamped_to_max() {
    let tuning = create_tuning();
    for dx in [-2000.0, -400.0, -10.0, 0.0, 10.0, 400.0, 2000.0] {
        let rotation = rotation_deg(dx, &tuning);
        assert!(rotation.abs() <= tuning.max_rotation_deg);
    }
}

#[test]
fn test_spring_back_returns_to_neutral() {
    let mut deck = create_ready_deck(&["a"]);
    deck.begin_gesture();
    deck.update_gesture(30.0, 12.0);

    assert_eq!(deck.end_gesture(30.0, 12.0, 0.0), GestureOutcome::SpringBack);
    // Gesture state is gone; the next render derives the neutral transform.
    assert!(deck.gesture().is_none());
    assert_eq!(
        CardTransform::for_gesture(&GestureState::default(), deck.tuning()),
        CardTransform::neutral()
    );
}

#[test]
fn test_double_fire_commits_once() {
    let mut deck = create_ready_deck(&["a", "b"]);

    assert!(deck.commit_decision("a", Decision::Accept).is_some());
    // Same candidate again, e.g. gesture-end racing a button press.
    assert!(deck.commit_decision("a", Decision::Accept).is_none());

    assert_eq!(deck.top().unwrap().id, "b");
}

#[test]
fn test_decisions_to_exhaustion_flag_replenish_once() {
    let mut deck = create_ready_deck(&["a", "b", "c"]);

    let first = deck.commit_decision("a", Decision::Accept).unwrap();
    let second = deck.commit_decision("b", Decision::Reject).unwrap();
    let third = deck.commit_decision("c", Decision::Accept).unwrap();

    assert!(!first.exhausted);
    assert!(!second.exhausted);
    assert!(third.exhausted, "only the Nth decision reaches exhaustion");
}

#[test]
fn test_exhausted_deck_ignores_gestures() {
    let mut deck = create_ready_deck(&["a"]);
    deck.commit_decision("a", Decision::Accept);
    // Queue consumed but no replenish applied yet.
    assert!(!deck.begin_gesture());
    assert_eq!(deck.end_gesture(500.0, 0.0, 1.0), GestureOutcome::Ignored);
}

#[test]
fn test_failed_load_keeps_empty_queue() {
    let mut deck = DeckState::new(create_tuning());
    let ticket = deck.begin_fetch(false).unwrap();
    deck.apply_fetch(ticket, Err("Error connecting to the server".to_string()));

    assert!(matches!(deck.phase(), DeckPhase::Failed(_)));
    assert_eq!(deck.remaining(), 0);
    assert!(deck.top().is_none());
}

#[test]
fn test_empty_fetch_is_distinct_from_failure() {
    let mut deck = DeckState::new(create_tuning());
    let ticket = deck.begin_fetch(false).unwrap();
    deck.apply_fetch(ticket, Ok(vec![]));
    assert_eq!(*deck.phase(), DeckPhase::Exhausted);
}
