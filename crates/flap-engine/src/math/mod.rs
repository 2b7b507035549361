// math/mod.rs
//
// 2D math used by the scene graph: scalars, vectors, boxes, affine transforms.
// Pure value types, no allocation, single precision throughout.
//
// Float comparisons in here are exact (no epsilon). That keeps the rules simple
// but means a determinant of 1e-30 counts as invertible.

pub mod affine;
pub mod bbox;
pub mod scalar;
pub mod vector;

pub use affine::Transform2;
pub use bbox::BBox2;
pub use scalar::{clamp, clamp01, lerp};
pub use vector::{solve_linear_system2, V2, V2Ext};
