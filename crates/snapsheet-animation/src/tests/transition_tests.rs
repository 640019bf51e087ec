use super::*;

#[test]
fn samples_start_and_end_heights() {
    let transition = HeightTransition::new(100.0, 600.0, 1_000, AnimationSpec::ease_out(200));
    assert_eq!(transition.sample(1_000), 100.0);
    assert_eq!(transition.sample(900), 100.0);
    assert_eq!(transition.sample(1_200), 600.0);
    assert_eq!(transition.sample(5_000), 600.0);
}

#[test]
fn finishes_after_duration() {
    let transition = HeightTransition::new(0.0, 10.0, 0, AnimationSpec::ease_out(200));
    assert!(!transition.is_finished(199));
    assert!(transition.is_finished(200));
}

#[test]
fn ease_out_moves_fast_first() {
    let transition = HeightTransition::new(0.0, 100.0, 0, AnimationSpec::ease_out(200));
    let quarter = transition.sample(50);
    assert!(quarter > 25.0, "ease-out should lead linear, got {quarter}");
    assert!(quarter < 100.0);
}

#[test]
fn shrinking_transition_interpolates_downward() {
    let transition = HeightTransition::new(600.0, 100.0, 0, AnimationSpec::tween(100, Easing::Linear));
    assert_eq!(transition.sample(50), 350.0);
}

#[test]
fn delay_holds_the_start_value() {
    let spec = AnimationSpec::tween(100, Easing::Linear).with_delay(50);
    let transition = HeightTransition::new(0.0, 100.0, 0, spec);
    assert_eq!(transition.sample(40), 0.0);
    assert_eq!(transition.sample(100), 50.0);
    assert!(!transition.is_finished(120));
    assert!(transition.is_finished(150));
}

#[test]
fn zero_duration_jumps() {
    let transition = HeightTransition::new(10.0, 20.0, 5, AnimationSpec::ease_out(0));
    assert_eq!(transition.sample(5), 20.0);
    assert!(transition.is_finished(5));
}

#[test]
fn retarget_continues_from_current_height() {
    let mut transition =
        HeightTransition::new(0.0, 100.0, 0, AnimationSpec::tween(100, Easing::Linear));
    transition.retarget(50, 0.0, AnimationSpec::tween(100, Easing::Linear));
    assert_eq!(transition.start_height(), 50.0);
    assert_eq!(transition.target(), 0.0);
    assert_eq!(transition.sample(100), 25.0);
}
