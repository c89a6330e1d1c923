use vaf_timeline::axis::ticks::{
    ceil10, floor10, minimal_distinct_tick_strings, num_leading_decimal_zeros, round10,
    y_axis_tickmarks,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "got {} expected {}",
        actual,
        expected
    );
}

fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "lengths differ: {:?}", actual);
    for (a, e) in actual.iter().zip(expected) {
        assert_close(*a, *e);
    }
}

#[test]
fn decimal_adjust_rounding() {
    assert_close(round10(1.0018, -3), 1.002);
    assert_close(round10(55.0, 1), 60.0);
    assert_close(round10(-55.0, 1), -60.0);
    assert_close(floor10(1.0015, -3), 1.001);
    assert_close(floor10(59.9, 1), 50.0);
    assert_close(ceil10(1.0013, -3), 1.002);
    assert_close(ceil10(1.001, 0), 2.0);
    assert_close(ceil10(50.1, 1), 60.0);
}

#[test]
fn exponent_zero_leaves_values_untouched() {
    assert_close(round10(7.0, 0), 7.0);
    assert_close(floor10(7.4, 0), 7.0);
}

#[test]
fn leading_decimal_zero_count() {
    assert_eq!(num_leading_decimal_zeros(1.0), 0);
    assert_eq!(num_leading_decimal_zeros(0.0), 0);
    assert_eq!(num_leading_decimal_zeros(0.1), 0);
    assert_eq!(num_leading_decimal_zeros(0.001), 2);
    assert_eq!(num_leading_decimal_zeros(1.001), 0);
    assert_eq!(num_leading_decimal_zeros(0.000_25), 3);
    assert_eq!(num_leading_decimal_zeros(-0.004), 2);
}

#[test]
fn tickmarks_pick_a_nice_step() {
    assert_all_close(
        &y_axis_tickmarks(0.0, 10.0, 6),
        &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0],
    );
    assert_all_close(&y_axis_tickmarks(0.0, 1.0, 6), &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_all_close(
        &y_axis_tickmarks(0.0, 0.25, 6),
        &[0.0, 0.05, 0.1, 0.15, 0.2, 0.25],
    );
}

#[test]
fn tickmarks_cover_the_full_range() {
    for &(min_y, max_y, n) in &[(0.0, 0.83, 6), (0.1, 0.9, 5), (0.0, 7.3, 4)] {
        let ticks = y_axis_tickmarks(min_y, max_y, n);
        assert_eq!(ticks.len(), n as usize);
        assert_close(ticks[0], min_y);
        assert!(
            *ticks.last().unwrap() >= max_y - 1e-9,
            "ticks {:?} do not reach {}",
            ticks,
            max_y
        );
    }
}

#[test]
fn degenerate_tick_inputs_fall_back() {
    assert_all_close(&y_axis_tickmarks(0.0, 10.0, 0), &[0.0, 10.0]);
    assert_all_close(&y_axis_tickmarks(0.0, 10.0, -2), &[0.0, 10.0]);
    assert_all_close(&y_axis_tickmarks(0.0, 10.0, 1), &[0.0]);
    assert_all_close(&y_axis_tickmarks(3.0, 3.0, 6), &[3.0; 6]);
    assert!(y_axis_tickmarks(3.0, 3.0, 0).is_empty());
}

#[test]
fn tick_labels_use_the_smallest_shared_precision() {
    assert_eq!(minimal_distinct_tick_strings(&[1.0]), vec!["1"]);
    assert_eq!(minimal_distinct_tick_strings(&[1.0, 1.1]), vec!["1.0", "1.1"]);
    assert_eq!(
        minimal_distinct_tick_strings(&[0.1, 0.25, 0.4]),
        vec!["0.1", "0.2", "0.4"]
    );
    assert_eq!(
        minimal_distinct_tick_strings(&[0.01, 0.002, 0.0003]),
        vec!["0.010", "0.002", "0.000"]
    );
}

#[test]
fn duplicate_values_are_labeled_once() {
    assert_eq!(
        minimal_distinct_tick_strings(&[1.0, 1.0, 1.0]),
        vec!["1"]
    );
    assert_eq!(
        minimal_distinct_tick_strings(&[1.0, 2.0, 1.0]),
        vec!["1", "2"]
    );
}

#[test]
fn labels_fall_back_to_scientific_when_fixed_precision_cannot_separate() {
    assert_eq!(
        minimal_distinct_tick_strings(&[0.0001, 0.000_201]),
        vec!["1e-4", "2.01e-4"]
    );
}
