//! Domain-value to pixel-coordinate mapping for the y axis.

use crate::axis::{MIN_LOG_VALUE, Y_AXIS_PADDING};

/// Builds the y-axis scale function for a plot of `plot_height` pixels.
///
/// A fixed padding is reserved at the top and bottom, so `min_y` maps to
/// `plot_height - padding` and `max_y` maps to `padding`. Interpolation is
/// linear, or proportional to `log10(value / min_y)` under log scale, where
/// non-positive arguments are floored at [`MIN_LOG_VALUE`]. The returned
/// closure is pure and stateless.
pub fn y_value_scale(
    min_y: f64,
    max_y: f64,
    plot_height: f64,
    log_scale: bool,
) -> impl Fn(f64) -> f64 {
    let inner = plot_height - 2.0 * Y_AXIS_PADDING;
    move |value: f64| {
        let fraction = if log_scale {
            let floor_min = min_y.max(MIN_LOG_VALUE);
            let floor_max = max_y.max(MIN_LOG_VALUE);
            let span = (floor_max / floor_min).log10();
            if span == 0.0 {
                0.0
            } else {
                (value.max(MIN_LOG_VALUE) / floor_min).log10() / span
            }
        } else {
            let span = max_y - min_y;
            if span == 0.0 {
                0.0
            } else {
                (value - min_y) / span
            }
        };
        plot_height - Y_AXIS_PADDING - fraction * inner
    }
}
