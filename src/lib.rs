//! Fixed-size vector and matrix math for real-time graphics.
//!
//! The crate has two layers. The typed layer consists of [`Vector`]
//! and [`Matrix`], generic over their dimension, with aliases
//! [`Vec2`]–[`Vec4`] and [`Mat2`]–[`Mat4`] and the usual operator
//! overloads; shape errors there are compile errors. The dynamic layer
//! ([`value`] and [`ops`]) wraps the same types in shape-tagged enums
//! and checks shapes at run time, reporting mismatches as [`Error`]
//! values, for callers whose operand shapes are only known at run time.
//!
//! Conventions throughout:
//!
//! * components are `f32`;
//! * matrices are stored and serialized in column-major order;
//! * coordinate systems are right-handed, and the view matrices of
//!   [`transform`] look down the negative z axis;
//! * angles are a distinct type, [`Angle`], constructed from radians,
//!   degrees, or turns.

pub mod angle;
pub mod approx;
pub mod error;
pub mod mat;
pub mod ops;
pub mod transform;
pub mod value;
pub mod vec;

pub use angle::{Angle, degs, rads, turns};
pub use error::{Error, Result};
pub use mat::{Mat2, Mat3, Mat4, Matrix};
pub use transform::{
    look_at, normal_matrix, normal_matrix3, orthographic, perspective, rotate,
    rotate_x, rotate_y, rotate_z, scale, scale_uniform, translate,
};
pub use value::{Arg, MatN, Shape, Value, VecN};
pub use vec::{Vec2, Vec3, Vec4, Vector, splat, vec2, vec3, vec4};
