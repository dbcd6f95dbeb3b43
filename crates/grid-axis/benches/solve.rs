use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_axis::AxisSolver;

/// Centers of every third slot missing, with a duplicated detection per row.
fn noisy_axis(slots: usize, pitch: f64) -> Vec<f64> {
    let mut coords = Vec::with_capacity(slots * 2);
    for s in (0..slots).filter(|s| s % 3 != 1) {
        let c = (s as f64 + 0.5) * pitch;
        coords.push(c - 0.1 * pitch);
        coords.push(c + 0.1 * pitch);
    }
    coords
}

fn bench_solve(c: &mut Criterion) {
    let solver = AxisSolver::default();
    let mut group = c.benchmark_group("axis_solve");
    for slots in [7usize, 15, 30, 100] {
        let pitch = 40.0;
        let board_len = slots as f64 * pitch;
        let coords = noisy_axis(slots, pitch);
        group.bench_with_input(BenchmarkId::from_parameter(slots), &coords, |b, coords| {
            b.iter(|| {
                solver
                    .solve(black_box(board_len), slots, black_box(coords))
                    .map(|s| s.shift)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
