// math/scalar.rs
//
// Scalar helpers shared by the vector and transform code.

/// Clamp `x` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics when `min > max`; the lower bound is
/// checked first.
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

#[inline]
pub fn clamp01(x: f32) -> f32 {
    clamp(x, 0.0, 1.0)
}

/// Linear interpolation: `t = 0` gives `a`, `t = 1` gives `b`.
/// The argument order (a, t, b) mirrors how the value sits between the ends.
#[inline]
pub fn lerp(a: f32, t: f32, b: f32) -> f32 {
    (1.0 - t) * a + t * b
}
