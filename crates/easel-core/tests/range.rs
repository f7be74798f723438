// File: crates/easel-core/tests/range.rs
// Purpose: Value-axis range and tick layout behavior.

use easel_core::grid::{nice_step, ticks, value_range};

#[test]
fn range_anchors_at_zero_for_positive_data() {
    let (min, max) = value_range([300.0, 50.0, 100.0].into_iter());
    assert_eq!(min, 0.0);
    assert!(max > 300.0, "headroom above the data max, got {}", max);
    assert!(max < 330.0);
}

#[test]
fn range_extends_below_zero_for_negative_data() {
    let (min, max) = value_range([-20.0, 50.0].into_iter());
    assert_eq!(min, -20.0);
    assert!(max > 50.0);
}

#[test]
fn range_ignores_non_finite_samples() {
    let (min, max) = value_range([f64::NAN, 10.0, f64::INFINITY].into_iter());
    assert_eq!(min, 0.0);
    assert!(max > 10.0 && max < 11.0);
}

#[test]
fn range_survives_empty_and_flat_input() {
    assert_eq!(value_range(std::iter::empty()), (0.0, 1.0));
    assert_eq!(value_range([0.0, 0.0].into_iter()), (0.0, 1.0));
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= b.abs() * 1e-9 + 1e-12
}

#[test]
fn steps_snap_to_decade_multiples() {
    assert!(approx(nice_step(315.0, 5), 100.0));
    assert!(approx(nice_step(10.0, 5), 2.0));
    assert!(approx(nice_step(0.0, 5), 1.0));
}

#[test]
fn ticks_stay_inside_the_range() {
    let vs = ticks(0.0, 315.0, 5);
    assert!(!vs.is_empty());
    assert_eq!(vs[0], 0.0);
    assert!(vs.iter().all(|&v| (0.0..=315.0 + 1e-6).contains(&v)));
    // 1/2/5 steps land ticks at even spacing
    assert!(vs.windows(2).all(|w| approx(w[1] - w[0], 100.0)));
}
