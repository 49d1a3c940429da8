//! Integration tests for GestureClassifier

mod common;
use common::*;

use button_stopwatch::{ClassifierConfig, GestureClassifier, GestureVerdict, TimeDuration};

#[test]
fn default_config_uses_fifty_ms_settle_and_one_second_threshold() {
    let config = ClassifierConfig::<TestDuration>::default();
    assert_eq!(config.settle, TestDuration(50));
    assert_eq!(config.long_press, TestDuration(1000));
}

#[test]
fn quick_press_is_short() {
    let clock = MockTimeSource::new();
    let script = ButtonScript::new(&clock);
    script.press_for(200);

    let mut classifier = GestureClassifier::<TestInstant, _, _>::new(script.button(), &clock);
    assert_eq!(classifier.classify(), GestureVerdict::Short);
}

#[test]
fn press_held_past_threshold_is_long() {
    let clock = MockTimeSource::new();
    let script = ButtonScript::new(&clock);
    script.press_for(1500);

    let mut classifier = GestureClassifier::<TestInstant, _, _>::new(script.button(), &clock);
    assert_eq!(classifier.classify(), GestureVerdict::Long);
}

#[test]
fn threshold_separates_short_from_long() {
    for (hold, expected) in [
        (100, GestureVerdict::Short),
        (900, GestureVerdict::Short),
        (1100, GestureVerdict::Long),
        (5000, GestureVerdict::Long),
    ] {
        let clock = MockTimeSource::new();
        let script = ButtonScript::new(&clock);
        script.press_for(hold);

        let mut classifier = GestureClassifier::<TestInstant, _, _>::new(script.button(), &clock);
        assert_eq!(classifier.classify(), expected, "hold of {}ms", hold);
    }
}

#[test]
fn custom_threshold_is_honoured() {
    let clock = MockTimeSource::new();
    let script = ButtonScript::new(&clock);
    script.press_for(400);

    let config = ClassifierConfig::new(TestDuration::from_millis(20), TestDuration(300));
    let mut classifier = GestureClassifier::<TestInstant, _, _>::with_config(script.button(), &clock, config);
    assert_eq!(classifier.classify(), GestureVerdict::Long);
}

#[test]
fn contact_bounce_on_press_is_one_gesture() {
    let clock = MockTimeSource::new();
    let script = ButtonScript::new(&clock);
    // Chatter during the first 20ms, then a solid hold
    script.contact(10, 4);
    script.contact(16, 4);
    script.contact(22, 380);

    let mut classifier = GestureClassifier::<TestInstant, _, _>::new(script.button(), &clock);
    assert_eq!(classifier.classify(), GestureVerdict::Short);
}

#[test]
fn contact_bounce_on_release_is_swallowed() {
    let clock = MockTimeSource::new();
    let script = ButtonScript::new(&clock);
    script.contact(10, 300);
    // Bounce 5ms after release, inside the release settle window
    script.contact(315, 5);
    script.contact(2000, 1500);

    let mut classifier = GestureClassifier::<TestInstant, _, _>::new(script.button(), &clock);
    assert_eq!(classifier.classify(), GestureVerdict::Short);
    // The bounce must not start a new gesture; the next one is the long hold
    assert_eq!(classifier.classify(), GestureVerdict::Long);
}

#[test]
fn returns_only_after_release_settles() {
    let clock = MockTimeSource::new();
    let script = ButtonScript::new(&clock);
    script.contact(10, 200);

    let mut classifier = GestureClassifier::<TestInstant, _, _>::new(script.button(), &clock);
    classifier.classify();
    // Released at 210, then at least the 50ms settle
    assert!(clock.peek() >= 260, "returned at {}", clock.peek());
}

#[test]
fn repeated_calls_classify_independently() {
    let clock = MockTimeSource::new();
    let script = ButtonScript::new(&clock);
    script.contact(10, 1500);
    script.contact(2000, 100);
    script.contact(3000, 100);
    script.contact(4000, 2000);

    let mut classifier = GestureClassifier::<TestInstant, _, _>::new(script.button(), &clock);
    assert_eq!(classifier.classify(), GestureVerdict::Long);
    assert_eq!(classifier.classify(), GestureVerdict::Short);
    assert_eq!(classifier.classify(), GestureVerdict::Short);
    assert_eq!(classifier.classify(), GestureVerdict::Long);
}

#[test]
fn poll_hook_runs_while_waiting() {
    let clock = MockTimeSource::new();
    let script = ButtonScript::new(&clock);
    script.contact(100, 200);

    let mut classifier = GestureClassifier::<TestInstant, _, _>::new(script.button(), &clock);
    let mut polls = 0u32;
    let verdict = classifier.classify_with(|| polls += 1);

    assert_eq!(verdict, GestureVerdict::Short);
    // At least one hook call per poll before the press was seen
    assert!(polls >= 50, "only {} polls", polls);
}
