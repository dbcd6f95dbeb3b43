use grid_axis::{solve_axis, AxisError, AxisErrorKind, AxisSolver, AxisSolverParams};

/// Deterministic jitter in `[-amp, amp]`.
fn jitter(i: usize, amp: f64) -> f64 {
    let h = (i as u64)
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let unit = (h >> 11) as f64 / (1u64 << 53) as f64;
    (unit * 2.0 - 1.0) * amp
}

/// Cell centers on an axis of `slots` cells of `pitch` px, for the given slots.
fn centers(pitch: f64, slots: &[usize], amp: f64) -> Vec<f64> {
    slots
        .iter()
        .enumerate()
        .map(|(k, &s)| (s as f64 + 0.5) * pitch + jitter(k, amp))
        .collect()
}

fn assert_order_preserved(coords: &[f64], slots: &[usize]) {
    let mut order: Vec<usize> = (0..coords.len()).collect();
    order.sort_by(|&a, &b| coords[a].total_cmp(&coords[b]));
    for w in order.windows(2) {
        assert!(
            slots[w[0]] <= slots[w[1]],
            "coordinate {} -> slot {} but {} -> slot {}",
            coords[w[0]],
            slots[w[0]],
            coords[w[1]],
            slots[w[1]]
        );
    }
}

#[test]
fn evenly_spaced_prefix_maps_to_leading_slots() {
    for max_slots in 1..=12 {
        let board_len = 40.0 * max_slots as f64;
        let pitch = board_len / max_slots as f64;
        for n in 1..=max_slots {
            let coords: Vec<f64> = (0..n).map(|i| pitch / 2.0 + i as f64 * pitch).collect();
            let slots = solve_axis(board_len, max_slots, &coords).unwrap();
            assert_eq!(slots, (0..n).collect::<Vec<_>>(), "n={n} slots={max_slots}");
        }
    }
}

#[test]
fn full_rows_survive_detector_jitter() {
    let slots_in: Vec<usize> = (0..10).collect();
    let coords = centers(48.0, &slots_in, 6.0);
    let slots = solve_axis(480.0, 10, &coords).unwrap();
    assert_eq!(slots, slots_in);
}

#[test]
fn repeated_calls_are_identical() {
    let coords = centers(50.0, &[0, 1, 3, 3, 4, 7, 8], 4.0);
    let solver = AxisSolver::default();
    let first = solver.solve(500.0, 10, &coords).unwrap();
    for _ in 0..5 {
        assert_eq!(solver.solve(500.0, 10, &coords).unwrap(), first);
    }
}

#[test]
fn coordinates_within_threshold_collapse() {
    // Threshold is 0.45 * 100 = 45 px.
    let coords = [250.0, 270.0, 290.0, 150.0];
    let slots = solve_axis(500.0, 5, &coords).unwrap();
    assert_eq!(slots[0], slots[1]);
    assert_eq!(slots[1], slots[2]);
    assert_ne!(slots[0], slots[3]);
}

#[test]
fn coordinates_a_pitch_apart_never_collapse() {
    let coords = [120.0, 221.0, 322.0];
    let slots = solve_axis(500.0, 5, &coords).unwrap();
    assert!(slots[0] < slots[1] && slots[1] < slots[2]);
}

#[test]
fn pigeonhole_violation_returns_no_indices() {
    let coords = centers(100.0, &[0, 1, 2, 3, 4, 5], 0.0);
    let err = solve_axis(500.0, 5, &coords).unwrap_err();
    assert_eq!(
        err,
        AxisError::TooManyPositions {
            clusters: 6,
            slots: 5
        }
    );
    assert_eq!(err.kind(), AxisErrorKind::Overflow);
}

#[test]
fn gap_aware_indexing_scenario() {
    let slots = solve_axis(500.0, 5, &[10.0, 110.0, 210.0, 410.0]).unwrap();
    assert_eq!(slots, vec![0, 1, 2, 4]);
}

#[test]
fn empty_input_scenario() {
    assert_eq!(solve_axis(500.0, 5, &[]).unwrap_err().kind(), AxisErrorKind::Input);
}

#[test]
fn noisy_partial_observations_stay_in_bounds_and_ordered() {
    let patterns: [&[usize]; 6] = [
        &[0, 2, 4, 6],
        &[1, 2, 3],
        &[5, 6, 7, 8, 9],
        &[0, 0, 1, 9, 9],
        &[3],
        &[0, 4, 5, 6, 9],
    ];
    for (p, pattern) in patterns.iter().enumerate() {
        for amp in [0.0, 3.0, 8.0] {
            let coords = centers(36.0, pattern, amp);
            let slots = solve_axis(360.0, 10, &coords)
                .unwrap_or_else(|e| panic!("pattern {p} amp {amp}: {e}"));
            assert_eq!(slots.len(), coords.len());
            assert!(slots.iter().all(|&s| s < 10));
            assert_order_preserved(&coords, &slots);
        }
    }
}

#[test]
fn clusters_receive_strictly_increasing_slots() {
    let coords = centers(40.0, &[0, 1, 1, 3, 6, 6, 7], 2.0);
    let sol = AxisSolver::new(AxisSolverParams::default())
        .solve(400.0, 10, &coords)
        .unwrap();
    for w in sol.clusters.windows(2) {
        assert!(w[0].slot < w[1].slot);
    }
    let total: usize = sol.clusters.iter().map(|c| c.len).sum();
    assert_eq!(total, coords.len());
}

#[test]
fn missing_edge_rows_are_located_from_the_board_center() {
    // Rows 2..=7 of a 10-row board.
    let coords = centers(50.0, &[2, 3, 4, 5, 6, 7], 0.0);
    let sol = AxisSolver::default().solve(500.0, 10, &coords).unwrap();
    assert_eq!(sol.indices, vec![2, 3, 4, 5, 6, 7]);
    assert!((sol.slot_center(0) - 25.0).abs() < 1e-6);
    assert!((sol.slot_center(9) - 475.0).abs() < 1e-6);
}
