//! "Nice number" tick generation for value axes.

/// Snaps `raw` to `{1, 2, 5, 10} * 10^k`, rounding up.
///
/// Returns `None` when `raw` is not a positive finite number.
#[must_use]
pub fn nice_step(raw: f64) -> Option<f64> {
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }

    let magnitude = 10.0_f64.powf(raw.log10().floor());
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return None;
    }

    let fraction = raw / magnitude;
    let nice_fraction = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice_fraction * magnitude;
    step.is_finite().then_some(step)
}

/// Largest desired tick count honored; larger requests are clamped.
pub const MAX_TICK_COUNT: usize = 50;

/// Computes an evenly spaced tick set `0, step, 2*step, ...` covering `max_value`.
///
/// Ticks are emitted while `tick <= max_value + step / 2`. When that window stops
/// one step short of `max_value`, one more tick is appended so the last tick is
/// always `>= max_value`. Non-positive or non-finite maxima produce `[0]`, as do
/// maxima so close to `f64::MAX` that the tick window is no longer finite.
/// `desired_count` is clamped to `1..=MAX_TICK_COUNT` and at most two ticks
/// beyond it are returned.
#[must_use]
pub fn compute_ticks(max_value: f64, desired_count: usize) -> Vec<f64> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return vec![0.0];
    }

    let desired = desired_count.clamp(1, MAX_TICK_COUNT);
    let Some(step) = nice_step(max_value / desired as f64) else {
        return vec![0.0];
    };
    let limit = max_value + step * 0.5;
    if !limit.is_finite() {
        return vec![0.0];
    }

    let capacity = desired + 2;
    let mut ticks = Vec::with_capacity(capacity);
    while ticks.len() < capacity {
        let tick = ticks.len() as f64 * step;
        if tick > limit {
            break;
        }
        ticks.push(tick);
    }

    // Absorb float noise so `max == k * step` does not grow an extra step.
    let tolerance = step * 1e-9;
    let next = ticks.len() as f64 * step;
    if ticks.len() < capacity
        && next.is_finite()
        && ticks.last().is_some_and(|last| *last < max_value - tolerance)
    {
        ticks.push(next);
    }

    ticks
}

/// Axis maximum implied by a tick set (its last tick), or 0 for an empty set.
#[must_use]
pub fn axis_max(ticks: &[f64]) -> f64 {
    ticks.last().copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::{compute_ticks, nice_step};

    #[test]
    fn nice_step_snaps_to_one_two_five_ten() {
        assert_eq!(nice_step(1.0), Some(1.0));
        assert_eq!(nice_step(17.0), Some(20.0));
        assert_eq!(nice_step(25.0), Some(50.0));
        assert_eq!(nice_step(0.06), Some(0.1));
        assert_eq!(nice_step(0.0), None);
        assert_eq!(nice_step(f64::NAN), None);
    }

    #[test]
    fn short_window_appends_covering_tick() {
        // step 50: 0, 50, 100 stays under 110 + 25, so 150 gets appended.
        assert_eq!(compute_ticks(110.0, 4), vec![0.0, 50.0, 100.0, 150.0]);
    }

    #[test]
    fn window_overflow_collapses_to_zero() {
        assert_eq!(compute_ticks(1.7e308, 4), vec![0.0]);
        assert_eq!(compute_ticks(f64::MAX, 1), vec![0.0]);
    }

    #[test]
    fn exact_multiple_does_not_overshoot() {
        assert_eq!(compute_ticks(200.0, 4), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    }
}
