use super::test_harness::{ViewKind, setup_view_harness};
use crate::vm::TestIntent;

#[test]
fn home_view_smoke_renders_call_to_action() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Psychological testing"), "missing hero in {html}");
    assert!(html.contains("Take the MMPI Test"), "missing CTA in {html}");
}

#[test]
fn test_view_smoke_starts_at_the_intro_card() {
    let mut harness = setup_view_harness(ViewKind::Test);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("MMPI-2 Inventory"), "missing title in {html}");
    assert!(html.contains("Begin"), "missing begin button in {html}");
    assert!(!html.contains("Question 1 of 10"), "quiz rendered early in {html}");
}

#[test]
fn test_view_smoke_walks_through_a_full_session() {
    let mut harness = setup_view_harness(ViewKind::Test);
    harness.rebuild();

    harness.dispatch(TestIntent::Begin);
    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "missing progress in {html}");
    assert!(html.contains("I wake easily from noise."), "missing question in {html}");

    for _ in 0..3 {
        harness.dispatch(TestIntent::Answer(true));
    }
    let html = harness.render();
    assert!(html.contains("Question 4 of 10"), "missing progress in {html}");

    for _ in 0..7 {
        harness.dispatch(TestIntent::Answer(false));
    }
    let html = harness.render();
    assert!(html.contains("Your Results"), "missing results header in {html}");
    assert!(html.contains("Hypochondriasis"), "missing scale in {html}");
    assert!(html.contains("Depression"), "missing scale in {html}");
    assert!(html.contains("Hysteria"), "missing scale in {html}");
    assert!(html.contains("Psychopathic Deviate"), "missing scale in {html}");
    assert!(html.contains("Retake the Test"), "missing retake button in {html}");
}

#[test]
fn test_view_smoke_retake_returns_to_the_first_question() {
    let mut harness = setup_view_harness(ViewKind::Test);
    harness.rebuild();

    harness.dispatch(TestIntent::Begin);
    for _ in 0..10 {
        harness.dispatch(TestIntent::Answer(true));
    }
    assert!(harness.render().contains("Your Results"));

    harness.dispatch(TestIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "missing restart in {html}");
    assert!(!html.contains("Your Results"), "stale results in {html}");
}

#[test]
fn test_view_smoke_ignores_answers_after_completion() {
    let mut harness = setup_view_harness(ViewKind::Test);
    harness.rebuild();

    harness.dispatch(TestIntent::Begin);
    for _ in 0..10 {
        harness.dispatch(TestIntent::Answer(true));
    }
    let completed = harness.render();

    harness.dispatch(TestIntent::Answer(false));
    assert_eq!(harness.render(), completed);
}
