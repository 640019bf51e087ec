//! Release-time snap decision.

/// Index of the snap point nearest to `height`.
///
/// Ties keep the earlier (lower) index. Returns `None` for an empty set.
pub fn find_closest_index(points: &[f32], height: f32) -> Option<usize> {
    let (first, rest) = points.split_first()?;
    let mut closest = 0;
    let mut smallest = (first - height).abs();

    for (offset, point) in rest.iter().enumerate() {
        let diff = (point - height).abs();
        if diff < smallest {
            smallest = diff;
            closest = offset + 1;
        }
    }

    Some(closest)
}

/// Closest snap point, moved one step in the flick direction when the
/// release velocity (px/ms) exceeds `threshold` in magnitude.
///
/// Negative velocity (pointer moving up, sheet growing) promotes, positive
/// velocity demotes. At either end of the set the closest index stands.
pub fn resolve_snap_index(
    points: &[f32],
    height: f32,
    velocity: f32,
    threshold: f32,
) -> Option<usize> {
    let closest = find_closest_index(points, height)?;
    let last = points.len() - 1;

    if velocity.abs() > threshold {
        if velocity < 0.0 && closest < last {
            return Some(closest + 1);
        }
        if velocity > 0.0 && closest > 0 {
            return Some(closest - 1);
        }
    }

    Some(closest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture_constants::FLICK_VELOCITY_THRESHOLD;

    const POINTS: [f32; 3] = [100.0, 300.0, 600.0];

    #[test]
    fn ties_resolve_to_lower_index() {
        assert_eq!(find_closest_index(&[100.0, 300.0], 200.0), Some(0));
    }

    #[test]
    fn closest_wins_at_low_velocity() {
        assert_eq!(resolve_snap_index(&POINTS, 250.0, 0.2, FLICK_VELOCITY_THRESHOLD), Some(1));
        assert_eq!(resolve_snap_index(&POINTS, 580.0, -0.5, FLICK_VELOCITY_THRESHOLD), Some(2));
    }

    #[test]
    fn upward_flick_promotes() {
        assert_eq!(resolve_snap_index(&POINTS, 250.0, -1.0, FLICK_VELOCITY_THRESHOLD), Some(2));
    }

    #[test]
    fn downward_flick_demotes() {
        assert_eq!(resolve_snap_index(&POINTS, 320.0, 1.2, FLICK_VELOCITY_THRESHOLD), Some(0));
    }

    #[test]
    fn flicks_stop_at_the_ends() {
        assert_eq!(resolve_snap_index(&POINTS, 640.0, -3.0, FLICK_VELOCITY_THRESHOLD), Some(2));
        assert_eq!(resolve_snap_index(&POINTS, 90.0, 3.0, FLICK_VELOCITY_THRESHOLD), Some(0));
    }

    #[test]
    fn empty_set_resolves_to_nothing() {
        assert_eq!(find_closest_index(&[], 10.0), None);
        assert_eq!(resolve_snap_index(&[], 10.0, -2.0, FLICK_VELOCITY_THRESHOLD), None);
    }
}
