//! Axis and color helpers shared with the rendering layer.

/// Categorical series palette; the rendering layer cycles through it when a
/// chart carries more than one dataset.
pub const SERIES_COLORS: [&str; 9] = [
    "#4dc9f6", "#f67019", "#f53794", "#537bc4", "#acc236", "#166a8f", "#00a950", "#58595b",
    "#8549ba",
];

/// The palette color for series `index`, wrapping around at the end.
pub fn color_for(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Axis tick step for a chart whose data spans `min_value..=max_value`.
///
/// The ideal step `ceil(max / desired_steps)` snaps down to a 100-unit grid
/// so tick labels stay round, and the snapped step must not exceed the
/// smallest charted value. When the whole chain lands on a non-positive step
/// (every value below 100), the unrounded ideal step is used instead,
/// clamped to at least `1.0` so the axis always advances.
///
/// # Examples
///
/// ```
/// use vgsales_core::charting::step_size;
///
/// assert_eq!(step_size(120.0, 980.0, 5), 100.0);
/// // Snapping would yield 0 here; the unrounded ideal step wins.
/// assert_eq!(step_size(80.0, 980.0, 5), 196.0);
/// ```
pub fn step_size(min_value: f64, max_value: f64, desired_steps: u32) -> f64 {
    let ideal = (max_value / f64::from(desired_steps.max(1))).ceil();
    let mut step = (ideal / 100.0).floor() * 100.0;

    // The step must not be greater than the lowest charted value.
    if step > min_value {
        step = (min_value / 100.0).floor() * 100.0;
    }

    if step <= 0.0 {
        step = ideal.max(1.0);
    }
    step
}
