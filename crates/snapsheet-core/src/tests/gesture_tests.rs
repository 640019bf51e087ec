use super::*;
use crate::input::ExcludedTargets;

fn manager(points: &[f32], content: f32) -> SnapPointManager {
    let mut manager = SnapPointManager::new(Some(points.to_vec()));
    manager.update_content_height(content);
    manager
}

#[test]
fn starts_idle() {
    let tracker = GestureTracker::new();
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.velocity(), 0.0);
    assert!(tracker.session().is_none());
}

#[test]
fn dragging_up_increases_height() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new();
    assert_eq!(tracker.on_interaction_start(500.0, None, 100.0, 0), DragStart::Began);

    let height = tracker.on_interaction_move(380.0, 100, &snaps);
    assert_eq!(height, Some(220.0));
    assert_eq!(tracker.session().map(DragSession::height), Some(220.0));
}

#[test]
fn velocity_is_pixels_per_millisecond() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(500.0, None, 100.0, 1_000);

    tracker.on_interaction_move(480.0, 1_010, &snaps);
    assert_eq!(tracker.velocity(), -2.0);

    tracker.on_interaction_move(490.0, 1_030, &snaps);
    assert_eq!(tracker.velocity(), 0.5);
}

#[test]
fn same_timestamp_keeps_stale_velocity() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(500.0, None, 100.0, 0);

    tracker.on_interaction_move(460.0, 20, &snaps);
    assert_eq!(tracker.velocity(), -2.0);

    let height = tracker.on_interaction_move(400.0, 20, &snaps);
    assert_eq!(tracker.velocity(), -2.0);
    assert_eq!(height, Some(200.0));
}

#[test]
fn elastic_clamp_applies_above_the_top_snap() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(700.0, None, 590.0, 0);

    let Some(height) = tracker.on_interaction_move(500.0, 16, &snaps) else {
        panic!("drag should be active");
    };
    // Raw height 790 is 190 past the top snap point.
    assert!(height > 600.0 && height < 650.0);
}

#[test]
fn moves_and_ends_are_ignored_while_idle() {
    let snaps = manager(&[100.0, 300.0], 200.0);
    let mut tracker = GestureTracker::new();
    assert_eq!(tracker.on_interaction_move(10.0, 5, &snaps), None);
    assert_eq!(tracker.on_interaction_end(&snaps), None);
    assert_eq!(tracker.cancel(&snaps), None);
}

#[test]
fn excluded_target_makes_interaction_inert() {
    let snaps = manager(&[100.0, 300.0], 200.0);
    let zone: Rc<dyn ExclusionZone> = Rc::new(ExcludedTargets::new().with(TargetId(7)));
    let mut tracker = GestureTracker::new().with_exclusion(Some(zone));

    let start = tracker.on_interaction_start(400.0, Some(TargetId(7)), 100.0, 0);
    assert_eq!(start, DragStart::Excluded);
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.on_interaction_move(200.0, 10, &snaps), None);
    assert_eq!(tracker.on_interaction_end(&snaps), None);

    // The next interaction on a different target drags normally.
    let start = tracker.on_interaction_start(400.0, Some(TargetId(8)), 100.0, 20);
    assert_eq!(start, DragStart::Began);
}

#[test]
fn missing_target_is_never_excluded() {
    let zone: Rc<dyn ExclusionZone> = Rc::new(|_: TargetId| true);
    let mut tracker = GestureTracker::new().with_exclusion(Some(zone));
    assert_eq!(tracker.on_interaction_start(0.0, None, 100.0, 0), DragStart::Began);
}

#[test]
fn release_with_low_velocity_snaps_to_closest() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(500.0, None, 100.0, 0);
    tracker.on_interaction_move(20.0, 1_000, &snaps);

    assert_eq!(tracker.on_interaction_end(&snaps), Some(2));
    assert!(!tracker.is_dragging());
}

#[test]
fn upward_flick_promotes_past_closest() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(500.0, None, 100.0, 0);
    tracker.on_interaction_move(400.0, 100, &snaps);
    tracker.on_interaction_move(350.0, 150, &snaps);

    // Height 250 is closest to 300, velocity is -1 px/ms.
    assert_eq!(tracker.velocity(), -1.0);
    assert_eq!(tracker.on_interaction_end(&snaps), Some(2));
}

#[test]
fn downward_flick_demotes() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(100.0, None, 600.0, 0);
    tracker.on_interaction_move(380.0, 100, &snaps);
    tracker.on_interaction_move(400.0, 110, &snaps);

    // Height 300, velocity +2 px/ms.
    assert_eq!(tracker.on_interaction_end(&snaps), Some(0));
}

#[test]
fn cancel_resolves_from_last_height() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(500.0, None, 100.0, 0);
    tracker.on_interaction_move(300.0, 1_000, &snaps);

    assert_eq!(tracker.cancel(&snaps), Some(1));
    assert!(!tracker.is_dragging());
}

#[test]
fn new_start_replaces_dangling_session() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(500.0, None, 100.0, 0);
    tracker.on_interaction_move(100.0, 10, &snaps);

    tracker.on_interaction_start(200.0, None, 300.0, 5_000);
    let session = tracker.session().copied();
    assert_eq!(session.map(|s| s.start_y()), Some(200.0));
    assert_eq!(session.map(|s| s.velocity()), Some(0.0));
}

#[test]
fn content_reflow_mid_drag_moves_bounds() {
    let mut snaps = SnapPointManager::new(None);
    snaps.update_content_height(400.0);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(500.0, None, 400.0, 0);

    snaps.update_content_height(700.0);
    // Raw 650 is now inside [60, 700] and passes through.
    assert_eq!(tracker.on_interaction_move(250.0, 16, &snaps), Some(650.0));
}

#[test]
fn empty_snap_set_drags_freely_and_resolves_nothing() {
    let snaps = SnapPointManager::new(None);
    let mut tracker = GestureTracker::new();
    tracker.on_interaction_start(500.0, None, 100.0, 0);
    assert_eq!(tracker.on_interaction_move(900.0, 16, &snaps), Some(-300.0));
    assert_eq!(tracker.on_interaction_end(&snaps), None);
    assert!(!tracker.is_dragging());
}

#[test]
fn configured_threshold_is_respected() {
    let snaps = manager(&[100.0, 300.0, 600.0], 400.0);
    let mut tracker = GestureTracker::new().with_velocity_threshold(2.0);
    tracker.on_interaction_start(500.0, None, 100.0, 0);
    tracker.on_interaction_move(400.0, 100, &snaps);
    tracker.on_interaction_move(350.0, 150, &snaps);

    assert_eq!(tracker.on_interaction_end(&snaps), Some(1));
}
