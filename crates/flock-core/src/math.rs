//! Small numeric helpers shared by the steering, predator, and sim crates.

/// Guard added to distances before dividing, so coincident points never
/// produce `inf`/`NaN`.
pub const EPSILON: f32 = 1e-5;

/// Map `v` into `[0, bound)` with toroidal wrap-around.
///
/// `rem_euclid` alone is not enough in `f32`: a tiny negative input such as
/// `-1e-9` rounds to exactly `bound`, which would break the half-open range.
#[inline]
pub fn wrap_coord(v: f32, bound: f32) -> f32 {
    let wrapped = v.rem_euclid(bound);
    if wrapped >= bound { 0.0 } else { wrapped }
}
