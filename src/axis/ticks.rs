//! "Nice number" tick generation and minimal-precision tick labels.

/// Rounds `value` to the nearest multiple of 10^`exp`, half away from zero.
pub fn round10(value: f64, exp: i32) -> f64 {
    decimal_adjust(value, exp, f64::round)
}

/// Rounds `value` down to a multiple of 10^`exp`.
pub fn floor10(value: f64, exp: i32) -> f64 {
    decimal_adjust(value, exp, f64::floor)
}

/// Rounds `value` up to a multiple of 10^`exp`.
pub fn ceil10(value: f64, exp: i32) -> f64 {
    decimal_adjust(value, exp, f64::ceil)
}

fn decimal_adjust(value: f64, exp: i32, op: fn(f64) -> f64) -> f64 {
    let scale = 10f64.powi(exp);
    op(value / scale) * scale
}

/// Number of zero digits strictly between the decimal point and the first
/// nonzero fractional digit; 0 for integers and for magnitudes >= 1.
pub fn num_leading_decimal_zeros(value: f64) -> u32 {
    if value == 0.0 || value.abs() >= 1.0 {
        return 0;
    }
    // The exponent of the normalized scientific form is exact where float
    // log10 is not.
    let exponent = exponent_of(value);
    if exponent < 0 { (-exponent - 1) as u32 } else { 0 }
}

fn exponent_of(value: f64) -> i32 {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((_, exp)) => exp.parse().unwrap_or(0),
        None => 0,
    }
}

/// Generates axis tickmarks for `[min_y, max_y]`.
///
/// Degenerate inputs fall back instead of failing: an empty range yields
/// `num_ticks` copies of the value, and a non-positive tick count yields
/// exactly `[min_y, max_y]`. Otherwise exactly `num_ticks` ticks are emitted,
/// starting at `min_y` and stepping by the {1,2,5}x10^k candidate closest to
/// `(max_y - min_y) / num_ticks` among those whose ticks cover the range.
pub fn y_axis_tickmarks(min_y: f64, max_y: f64, num_ticks: i32) -> Vec<f64> {
    if min_y == max_y {
        return vec![min_y; num_ticks.max(0) as usize];
    }
    if num_ticks <= 0 {
        return vec![min_y, max_y];
    }
    if num_ticks == 1 {
        return vec![min_y];
    }

    let n = num_ticks as usize;
    let step = nice_step(max_y - min_y, n);
    (0..n).map(|i| min_y + i as f64 * step).collect()
}

fn nice_step(range: f64, num_ticks: usize) -> f64 {
    let raw = range / num_ticks as f64;
    let base = 10f64.powf(raw.log10().floor());
    let intervals = (num_ticks - 1) as f64;

    let mut best = range;
    let mut best_distance = f64::INFINITY;
    for multiple in [1.0, 2.0, 5.0, 10.0, 20.0] {
        let candidate = multiple * base;
        if candidate * intervals < range {
            continue;
        }
        let distance = (candidate - raw).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Shortest tick-label strings that keep all (deduplicated) values pairwise
/// distinct: the smallest shared fixed precision up to 3 decimals, falling
/// back to each value's shortest scientific form.
pub fn minimal_distinct_tick_strings(values: &[f64]) -> Vec<String> {
    let mut distinct: Vec<f64> = Vec::new();
    for &v in values {
        if !distinct.contains(&v) {
            distinct.push(v);
        }
    }

    for precision in 0..=3usize {
        let formatted: Vec<String> = distinct
            .iter()
            .map(|v| format!("{:.*}", precision, v))
            .collect();
        if all_distinct(&formatted) {
            return formatted;
        }
    }
    distinct.iter().map(|v| format!("{:e}", v)).collect()
}

fn all_distinct(strings: &[String]) -> bool {
    for (i, s) in strings.iter().enumerate() {
        if strings[i + 1..].contains(s) {
            return false;
        }
    }
    true
}
