// math/vector.rs
//
// 2D vectors. The engine uses glam's Vec2 directly; this module only adds the
// handful of operations glam does not spell the way the engine needs them.
//
// A V2 is read contextually: position (x, y), size (w, h), delta (dx, dy),
// or texture coordinate (u, v).

use glam::Vec2;

use super::scalar::clamp01;

/// The engine's 2D vector.
pub type V2 = Vec2;

/// Extra vector operations on top of glam.
///
/// Orientation predicates use a right-handed coordinate system: `b` is to the
/// left of `a` when turning from `a` to `b` is counter-clockwise.
pub trait V2Ext: Copy {
    /// 2D cross product (z of the 3D cross): `a.x * b.y - a.y * b.x`.
    fn cross(self, other: Self) -> f32;
    /// Clockwise perpendicular `(y, -x)`. `Vec2::perp` is the counter-clockwise one.
    fn perp_r(self) -> Self;
    /// Component-wise product.
    fn hadamard(self, other: Self) -> Self;
    /// Component-wise quotient.
    fn hadamard_div(self, other: Self) -> Self;
    /// Angle of the vector from +x, in radians (`atan2(y, x)`).
    fn rad(self) -> f32;
    /// Absolute angle difference between two vectors, in radians.
    fn rad_between(self, other: Self) -> f32;
    fn is_left(self, other: Self) -> bool;
    fn is_collinear(self, other: Self) -> bool;
    fn is_left_or_collinear(self, other: Self) -> bool;
    /// Clamp both components into `[0, 1]`.
    fn clamp01(self) -> Self;
}

impl V2Ext for Vec2 {
    #[inline]
    fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    fn perp_r(self) -> Self {
        Vec2::new(self.y, -self.x)
    }

    #[inline]
    fn hadamard(self, other: Self) -> Self {
        Vec2::new(self.x * other.x, self.y * other.y)
    }

    #[inline]
    fn hadamard_div(self, other: Self) -> Self {
        Vec2::new(self.x / other.x, self.y / other.y)
    }

    #[inline]
    fn rad(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn rad_between(self, other: Self) -> f32 {
        (self.rad() - other.rad()).abs()
    }

    #[inline]
    fn is_left(self, other: Self) -> bool {
        self.cross(other) > 0.0
    }

    #[inline]
    fn is_collinear(self, other: Self) -> bool {
        self.cross(other) == 0.0
    }

    #[inline]
    fn is_left_or_collinear(self, other: Self) -> bool {
        self.cross(other) >= 0.0
    }

    #[inline]
    fn clamp01(self) -> Self {
        Vec2::new(clamp01(self.x), clamp01(self.y))
    }
}

/// Solve `s * a + t * b = c` for `(s, t)` by Cramer's rule.
///
/// Returns `None` when `a` and `b` are parallel (determinant exactly zero).
pub fn solve_linear_system2(a: V2, b: V2, c: V2) -> Option<V2> {
    let d = a.cross(b);
    if d == 0.0 {
        return None;
    }
    Some(Vec2::new(c.cross(b) / d, a.cross(c) / d))
}
