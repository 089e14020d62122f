/// Rounding noise, in units of `f64::EPSILON` relative to the value, that is
/// still taken to be an exact integer
const SNAP_ULPS: f64 = 8.0;

/// Floor `value` to a whole number of units.
///
/// Values a few ULPs below an integer are taken to be that integer, so
/// `0.3 / 0.1` counts as 3 units rather than 2. Any real fractional part is
/// floored away.
pub(crate) fn floor_units(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= SNAP_ULPS * f64::EPSILON * nearest.abs().max(1.0) {
        nearest
    } else {
        value.floor()
    }
}

/// Largest absolute entry of a matrix, 0.0 for an empty one
pub(crate) fn max_abs(rows: &[Vec<f64>]) -> f64 {
    rows.iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |acc, &x| acc.max(x.abs()))
}
