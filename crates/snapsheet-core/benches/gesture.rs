use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snapsheet_core::gesture_constants::FLICK_VELOCITY_THRESHOLD;
use snapsheet_core::{resolve_snap_index, GestureTracker, RubberBand, SnapPointManager};

const SNAP_COUNT_SAMPLES: &[usize] = &[2, 4, 16];
const MOVES_PER_DRAG: u64 = 120;

fn snap_points(count: usize) -> Vec<f32> {
    (0..count).map(|index| 80.0 + index as f32 * 55.0).collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_snap_index");
    for &count in SNAP_COUNT_SAMPLES {
        let points = snap_points(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| {
                resolve_snap_index(
                    black_box(points),
                    black_box(431.0),
                    black_box(-0.8),
                    FLICK_VELOCITY_THRESHOLD,
                )
            })
        });
    }
    group.finish();
}

fn bench_clamp(c: &mut Criterion) {
    let band = RubberBand::default();
    c.bench_function("rubber_band_clamp", |b| {
        b.iter(|| {
            let mut total = 0.0f32;
            for height in (0..900).step_by(7) {
                total += band.clamp(black_box(height as f32), Some((100.0, 600.0)));
            }
            total
        })
    });
}

fn bench_drag(c: &mut Criterion) {
    let mut snaps = SnapPointManager::new(Some(snap_points(4)));
    snaps.update_content_height(240.0);

    c.bench_function("full_drag_session", |b| {
        b.iter(|| {
            let mut tracker = GestureTracker::new();
            tracker.on_interaction_start(700.0, None, 80.0, 0);
            for step in 1..=MOVES_PER_DRAG {
                let y = 700.0 - step as f32 * 5.0;
                black_box(tracker.on_interaction_move(y, step * 8, &snaps));
            }
            tracker.on_interaction_end(&snaps)
        })
    });
}

criterion_group!(benches, bench_resolve, bench_clamp, bench_drag);
criterion_main!(benches);
