//! Axis tick values for the catalog bar charts.
//!
//! Ticks always start at zero and are spaced by a "nice" step: 1, 2 or 5
//! times a power of ten.

/// Round `value` to a nice number.
///
/// With `round` the closest of 1, 2, 5, 10 (times a power of ten) is
/// returned, otherwise the smallest one that is not below `value`.
/// Non-positive and non-finite input yields `0.0`.
pub fn nice_number(value: f64, round: bool) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }

    let exponent = value.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = value / magnitude;

    let nice = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Tick values from zero up to the first tick at or above `max_value`,
/// using at most `max_ticks` ticks.
///
/// Returns `[0.0]` when there is nothing to scale.
pub fn nice_ticks(max_value: f64, max_ticks: usize) -> Vec<f64> {
    if !max_value.is_finite() || max_value <= 0.0 || max_ticks < 2 {
        return vec![0.0];
    }

    let mut step = nice_number(max_value / (max_ticks - 1) as f64, false);
    let mut intervals = covering_intervals(max_value, step);
    // Float noise can push the count past the limit: widen the step.
    while intervals + 1 > max_ticks {
        step = nice_number(step * 1.5, false);
        intervals = covering_intervals(max_value, step);
    }

    // Keep as many decimals as the step has.
    let decimals = (-step.log10().floor()).max(0.0) as i32;
    let scale = 10f64.powi(decimals);

    (0..=intervals)
        .map(|i| (i as f64 * step * scale).round() / scale)
        .collect()
}

/// Smallest interval count whose last tick reaches `max_value`.
fn covering_intervals(max_value: f64, step: f64) -> usize {
    let mut intervals = (max_value / step).ceil().max(1.0) as usize;
    if (intervals as f64) * step < max_value {
        intervals += 1;
    }
    intervals
}
