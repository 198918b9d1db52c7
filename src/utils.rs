//! Utilities

/// Round an integer down to the nearest even integer, towards negative infinity.
#[inline(always)]
pub fn floor_even(value: i32) -> i32 {
    value & !1
}

/// Converts a float pixel coordinate to `i32`.
///
/// Float to integer `as` casts saturate out of range values and map `NaN` to zero,
/// which keeps bounding boxes of wild vertices finite.
#[inline(always)]
pub fn saturating_i32(value: f32) -> i32 {
    value as i32
}
