//! Dynamically shaped values.
//!
//! The enums here wrap the fixed-size types of [`vec`][crate::vec] and
//! [`mat`][crate::mat] behind shape tags, so that heterogeneous inputs,
//! such as those coming from a scripting layer or a file, can flow
//! through one set of operations ([`ops`][crate::ops]) with the shape
//! checked at run time rather than compile time.

use core::fmt;

use crate::error::{Error, Result};
use crate::mat::{Mat2, Mat3, Mat4, Matrix};
use crate::vec::{Vec2, Vec3, Vec4, Vector};

/// The shape of a [`Value`], used to select behavior and report errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Num,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Num => "number",
            Self::Vec2 => "vec2",
            Self::Vec3 => "vec3",
            Self::Vec4 => "vec4",
            Self::Mat2 => "mat2",
            Self::Mat3 => "mat3",
            Self::Mat4 => "mat4",
        })
    }
}

/// A vector of dynamic dimension 2, 3, or 4.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VecN {
    V2(Vec2),
    V3(Vec3),
    V4(Vec4),
}

/// A square matrix of dynamic dimension 2, 3, or 4.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MatN {
    M2(Mat2),
    M3(Mat3),
    M4(Mat4),
}

/// A number, vector, or matrix of dynamic shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Num(f32),
    Vec(VecN),
    Mat(MatN),
}

/// An argument to one of the variadic constructors.
///
/// Anything convertible to a component sequence can contribute its
/// components; see [`VecN::vec3`] for the flattening rules.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Num(f32),
    List(Vec<f32>),
    Vector(VecN),
    Matrix(MatN),
}

impl VecN {
    /// The number of components.
    pub fn dim(&self) -> usize {
        match self {
            Self::V2(_) => 2,
            Self::V3(_) => 3,
            Self::V4(_) => 4,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Self::V2(_) => Shape::Vec2,
            Self::V3(_) => Shape::Vec3,
            Self::V4(_) => Shape::Vec4,
        }
    }

    /// The components as a slice.
    pub fn components(&self) -> &[f32] {
        match self {
            Self::V2(v) => &v.0,
            Self::V3(v) => &v.0,
            Self::V4(v) => &v.0,
        }
    }

    pub fn dot(&self, rhs: &Self) -> Option<f32> {
        match (self, rhs) {
            (Self::V2(a), Self::V2(b)) => Some(a.dot(*b)),
            (Self::V3(a), Self::V3(b)) => Some(a.dot(*b)),
            (Self::V4(a), Self::V4(b)) => Some(a.dot(*b)),
            _ => None,
        }
    }

    pub fn len(&self) -> f32 {
        match self {
            Self::V2(v) => v.len(),
            Self::V3(v) => v.len(),
            Self::V4(v) => v.len(),
        }
    }

    pub fn normalize(&self) -> Self {
        match self {
            Self::V2(v) => Self::V2(v.normalize()),
            Self::V3(v) => Self::V3(v.normalize()),
            Self::V4(v) => Self::V4(v.normalize()),
        }
    }

    pub fn negate(&self) -> Self {
        match self {
            Self::V2(v) => Self::V2(-*v),
            Self::V3(v) => Self::V3(-*v),
            Self::V4(v) => Self::V4(-*v),
        }
    }

    /// Constructs a [`Vec2`] variant from a flattened argument list.
    ///
    /// See [`vec3`][Self::vec3] for the rules.
    pub fn vec2(args: &[Arg]) -> Result<Self> {
        build::<2>(args, "vec2").map(|v| Self::V2(Vector(v)))
    }

    /// Constructs a [`Vec3`] variant from a flattened argument list.
    ///
    /// With no arguments the result is the zero vector; a single number
    /// is splatted to every component. Otherwise numbers, lists, and
    /// vectors contribute their components left to right until all
    /// components are filled; extra components are discarded. Too few
    /// components, or a matrix argument, is an error.
    pub fn vec3(args: &[Arg]) -> Result<Self> {
        build::<3>(args, "vec3").map(|v| Self::V3(Vector(v)))
    }

    /// Constructs a [`Vec4`] variant from a flattened argument list.
    ///
    /// See [`vec3`][Self::vec3] for the rules.
    pub fn vec4(args: &[Arg]) -> Result<Self> {
        build::<4>(args, "vec4").map(|v| Self::V4(Vector(v)))
    }
}

/// Fills an `N`-element array from the flattened components of `args`.
fn build<const N: usize>(args: &[Arg], ctor: &'static str) -> Result<[f32; N]> {
    match args {
        [] => return Ok([0.0; N]),
        [Arg::Num(c)] => return Ok([*c; N]),
        _ => {}
    }
    let mut out = [0.0; N];
    let mut got = 0;
    for arg in args {
        let comps: &[f32] = match arg {
            Arg::Num(c) => core::slice::from_ref(c),
            Arg::List(l) => l,
            Arg::Vector(v) => v.components(),
            Arg::Matrix(m) => {
                return Err(Error::TypeMismatch { op: ctor, got: m.shape() });
            }
        };
        for &c in comps {
            if got == N {
                // Full; excess components are silently dropped.
                return Ok(out);
            }
            out[got] = c;
            got += 1;
        }
    }
    if got < N {
        return Err(Error::MissingComponents { ctor, want: N, got });
    }
    Ok(out)
}

impl MatN {
    /// The number of rows (and columns).
    pub fn dim(&self) -> usize {
        match self {
            Self::M2(_) => 2,
            Self::M3(_) => 3,
            Self::M4(_) => 4,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Self::M2(_) => Shape::Mat2,
            Self::M3(_) => Shape::Mat3,
            Self::M4(_) => Shape::Mat4,
        }
    }

    pub fn det(&self) -> f32 {
        match self {
            Self::M2(m) => m.det(),
            Self::M3(m) => m.det(),
            Self::M4(m) => m.det(),
        }
    }

    pub fn inverse(&self) -> Self {
        match self {
            Self::M2(m) => Self::M2(m.inverse()),
            Self::M3(m) => Self::M3(m.inverse()),
            Self::M4(m) => Self::M4(m.inverse()),
        }
    }

    pub fn transpose(&self) -> Self {
        match self {
            Self::M2(m) => Self::M2(m.transpose()),
            Self::M3(m) => Self::M3(m.transpose()),
            Self::M4(m) => Self::M4(m.transpose()),
        }
    }

    fn resize<const P: usize>(&self) -> Matrix<P> {
        match self {
            Self::M2(m) => m.resize(),
            Self::M3(m) => m.resize(),
            Self::M4(m) => m.resize(),
        }
    }

    /// Constructs a [`Mat2`] variant from an argument list.
    ///
    /// See [`mat4`][Self::mat4] for the rules.
    pub fn mat2(args: &[Arg]) -> Result<Self> {
        build_mat::<2>(args, "mat2").map(Self::M2)
    }

    /// Constructs a [`Mat3`] variant from an argument list.
    ///
    /// See [`mat4`][Self::mat4] for the rules.
    pub fn mat3(args: &[Arg]) -> Result<Self> {
        build_mat::<3>(args, "mat3").map(Self::M3)
    }

    /// Constructs a [`Mat4`] variant from an argument list.
    ///
    /// With no arguments the result is the identity; a single number `c`
    /// yields `c` times the identity; a single matrix is copied into the
    /// upper left with the identity filling any remainder. `n` vectors of
    /// dimension `n` become the columns, and `n²` numbers fill the matrix
    /// in column-major order. Any other argument list is an error.
    pub fn mat4(args: &[Arg]) -> Result<Self> {
        build_mat::<4>(args, "mat4").map(Self::M4)
    }
}

fn build_mat<const N: usize>(args: &[Arg], ctor: &'static str) -> Result<Matrix<N>> {
    match args {
        [] => return Ok(Matrix::identity()),
        [Arg::Num(c)] => return Ok(Matrix::diagonal(*c)),
        [Arg::Matrix(m)] => return Ok(m.resize()),
        _ => {}
    }
    if args.len() == N && args.iter().all(|a| matches!(a, Arg::Vector(_))) {
        let mut cols = [[0.0; N]; N];
        for (col, arg) in cols.iter_mut().zip(args) {
            let Arg::Vector(v) = arg else { unreachable!() };
            if v.dim() != N {
                return Err(Error::ShapeMismatch {
                    op: ctor,
                    lhs: match N {
                        2 => Shape::Vec2,
                        3 => Shape::Vec3,
                        _ => Shape::Vec4,
                    },
                    rhs: v.shape(),
                });
            }
            col.copy_from_slice(v.components());
        }
        return Ok(Matrix(cols));
    }
    if args.len() == N * N && args.iter().all(|a| matches!(a, Arg::Num(_))) {
        let mut cols = [[0.0; N]; N];
        for (k, arg) in args.iter().enumerate() {
            let Arg::Num(c) = arg else { unreachable!() };
            cols[k / N][k % N] = *c;
        }
        return Ok(Matrix(cols));
    }
    Err(Error::Arity { ctor, got: args.len() })
}

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Self::Num(_) => Shape::Num,
            Self::Vec(v) => v.shape(),
            Self::Mat(m) => m.shape(),
        }
    }

    /// Returns whether `self` is a vector of any dimension.
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vec(_))
    }

    /// Returns whether `self` is a matrix of any dimension.
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Mat(_))
    }

    /// Returns the wrapped vector, or a type mismatch error blaming `op`.
    pub fn as_vector(&self, op: &'static str) -> Result<&VecN> {
        match self {
            Self::Vec(v) => Ok(v),
            _ => Err(Error::TypeMismatch { op, got: self.shape() }),
        }
    }

    /// Returns the wrapped matrix, or a type mismatch error blaming `op`.
    pub fn as_matrix(&self, op: &'static str) -> Result<&MatN> {
        match self {
            Self::Mat(m) => Ok(m),
            _ => Err(Error::TypeMismatch { op, got: self.shape() }),
        }
    }
}

//
// Conversions
//

impl From<f32> for Value {
    fn from(c: f32) -> Self {
        Self::Num(c)
    }
}
impl From<VecN> for Value {
    fn from(v: VecN) -> Self {
        Self::Vec(v)
    }
}
impl From<MatN> for Value {
    fn from(m: MatN) -> Self {
        Self::Mat(m)
    }
}
impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Self::Vec(VecN::V2(v))
    }
}
impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Self::Vec(VecN::V3(v))
    }
}
impl From<Vec4> for Value {
    fn from(v: Vec4) -> Self {
        Self::Vec(VecN::V4(v))
    }
}
impl From<Mat2> for Value {
    fn from(m: Mat2) -> Self {
        Self::Mat(MatN::M2(m))
    }
}
impl From<Mat3> for Value {
    fn from(m: Mat3) -> Self {
        Self::Mat(MatN::M3(m))
    }
}
impl From<Mat4> for Value {
    fn from(m: Mat4) -> Self {
        Self::Mat(MatN::M4(m))
    }
}

impl From<f32> for Arg {
    fn from(c: f32) -> Self {
        Self::Num(c)
    }
}
impl From<Vec<f32>> for Arg {
    fn from(l: Vec<f32>) -> Self {
        Self::List(l)
    }
}
impl<const K: usize> From<[f32; K]> for Arg {
    fn from(l: [f32; K]) -> Self {
        Self::List(l.to_vec())
    }
}
impl From<VecN> for Arg {
    fn from(v: VecN) -> Self {
        Self::Vector(v)
    }
}
impl From<MatN> for Arg {
    fn from(m: MatN) -> Self {
        Self::Matrix(m)
    }
}
impl From<Vec2> for Arg {
    fn from(v: Vec2) -> Self {
        Self::Vector(VecN::V2(v))
    }
}
impl From<Vec3> for Arg {
    fn from(v: Vec3) -> Self {
        Self::Vector(VecN::V3(v))
    }
}
impl From<Vec4> for Arg {
    fn from(v: Vec4) -> Self {
        Self::Vector(VecN::V4(v))
    }
}
impl From<Mat2> for Arg {
    fn from(m: Mat2) -> Self {
        Self::Matrix(MatN::M2(m))
    }
}
impl From<Mat3> for Arg {
    fn from(m: Mat3) -> Self {
        Self::Matrix(MatN::M3(m))
    }
}
impl From<Mat4> for Arg {
    fn from(m: Mat4) -> Self {
        Self::Matrix(MatN::M4(m))
    }
}
