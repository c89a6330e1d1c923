pub mod scale;
pub mod ticks;

/// Tick count used when the caller does not specify one.
pub const DEFAULT_TICK_COUNT: i32 = 6;

/// Vertical padding reserved above and below the plotted range, in pixels.
pub const Y_AXIS_PADDING: f64 = 10.0;

/// Floor substituted for non-positive values under log scale (0.1% VAF).
pub const MIN_LOG_VALUE: f64 = 0.001;
