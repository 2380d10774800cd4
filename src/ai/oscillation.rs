//! Triangle-wave model of a puck bouncing between two parallel walls
//!
//! Unfolding the bounces turns the puck's y-motion into a straight line; the
//! wave folds an unfolded distance back into the gap between the walls.

/// Fold `x` into a triangle wave of period `2 * range`
///
/// Starts at 0 for `x = 0` and rises with slope 1 to `range`, then falls back
/// to 0 at `x = 2 * range`. The result always lies in `[0, range]`.
pub fn linear_oscillation(range: f32, x: f32) -> f32 {
    debug_assert!(range > 0.0, "oscillation range must be positive");
    let period = 2.0 * range;
    let phase = x.rem_euclid(period);
    if phase <= range { phase } else { period - phase }
}

/// Unfolded position within the first period that folds to `y`
///
/// `slope` carries the direction `y` is currently moving: non-negative for
/// the rising half of the wave, negative for the falling half.
pub fn linear_oscillation_inverse(range: f32, y: f32, slope: f32) -> f32 {
    if slope >= 0.0 { y } else { 2.0 * range - y }
}
