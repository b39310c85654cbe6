//! Shape-polymorphic operations on [`Value`]s.
//!
//! Each function accepts anything convertible into a [`Value`] and
//! dispatches on the operand shapes, returning an [`Error`] for
//! combinations that have no meaning. The typed operators in
//! [`vec`][crate::vec] and [`mat`][crate::mat] remain the
//! cheaper choice when the shapes are known at compile time.

use crate::error::{Error, Result};
use crate::value::{MatN, Value, VecN};

fn zip_vec(a: &VecN, b: &VecN, f: impl Fn(f32, f32) -> f32) -> Option<VecN> {
    match (a, b) {
        (VecN::V2(a), VecN::V2(b)) => Some(VecN::V2(a.zip_map(*b, f))),
        (VecN::V3(a), VecN::V3(b)) => Some(VecN::V3(a.zip_map(*b, f))),
        (VecN::V4(a), VecN::V4(b)) => Some(VecN::V4(a.zip_map(*b, f))),
        _ => None,
    }
}

fn elementwise(
    op: &'static str,
    a: Value,
    b: Value,
    f: impl Fn(f32, f32) -> f32,
) -> Result<Value> {
    let mismatch = || Error::ShapeMismatch { op, lhs: a.shape(), rhs: b.shape() };
    match (&a, &b) {
        (Value::Vec(a), Value::Vec(b)) => {
            zip_vec(a, b, f).map(Value::Vec).ok_or_else(mismatch)
        }
        (Value::Mat(MatN::M2(a)), Value::Mat(MatN::M2(b))) => {
            Ok(a.zip_map(*b, f).into())
        }
        (Value::Mat(MatN::M3(a)), Value::Mat(MatN::M3(b))) => {
            Ok(a.zip_map(*b, f).into())
        }
        (Value::Mat(MatN::M4(a)), Value::Mat(MatN::M4(b))) => {
            Ok(a.zip_map(*b, f).into())
        }
        _ => Err(mismatch()),
    }
}

/// Adds two vectors or two matrices of the same shape elementwise.
pub fn add(a: impl Into<Value>, b: impl Into<Value>) -> Result<Value> {
    elementwise("add", a.into(), b.into(), |a, b| a + b)
}

/// Subtracts two vectors or two matrices of the same shape elementwise.
pub fn sub(a: impl Into<Value>, b: impl Into<Value>) -> Result<Value> {
    elementwise("subtract", a.into(), b.into(), |a, b| a - b)
}

/// Multiplies two values, dispatching on their shapes.
///
/// In order of precedence:
/// * matrix × matrix of the same size composes the transforms;
/// * a number scales a matrix or vector, on either side;
/// * matrix × vector of the same size transforms the vector;
/// * vector × vector is the elementwise (Hadamard) product.
///
/// A vector on the left of a matrix is an error, as is any size
/// mismatch or a product of two numbers.
pub fn mult(a: impl Into<Value>, b: impl Into<Value>) -> Result<Value> {
    use {MatN::*, Value::*, VecN::*};

    let (a, b) = (a.into(), b.into());
    let mismatch = || Error::ShapeMismatch {
        op: "multiply",
        lhs: a.shape(),
        rhs: b.shape(),
    };
    match (&a, &b) {
        (Mat(M2(a)), Mat(M2(b))) => Ok((*a * *b).into()),
        (Mat(M3(a)), Mat(M3(b))) => Ok((*a * *b).into()),
        (Mat(M4(a)), Mat(M4(b))) => Ok((*a * *b).into()),

        (Num(c), Mat(M2(m))) | (Mat(M2(m)), Num(c)) => Ok((*m * *c).into()),
        (Num(c), Mat(M3(m))) | (Mat(M3(m)), Num(c)) => Ok((*m * *c).into()),
        (Num(c), Mat(M4(m))) | (Mat(M4(m)), Num(c)) => Ok((*m * *c).into()),

        (Num(c), Vec(V2(v))) | (Vec(V2(v)), Num(c)) => Ok((*v * *c).into()),
        (Num(c), Vec(V3(v))) | (Vec(V3(v)), Num(c)) => Ok((*v * *c).into()),
        (Num(c), Vec(V4(v))) | (Vec(V4(v)), Num(c)) => Ok((*v * *c).into()),

        (Mat(M2(m)), Vec(V2(v))) => Ok((*m * *v).into()),
        (Mat(M3(m)), Vec(V3(v))) => Ok((*m * *v).into()),
        (Mat(M4(m)), Vec(V4(v))) => Ok((*m * *v).into()),

        (Vec(_), Mat(_)) => Err(Error::VectorTimesMatrix),

        (Vec(a), Vec(b)) => {
            zip_vec(a, b, |a, b| a * b).map(Value::Vec).ok_or_else(mismatch)
        }

        _ => Err(mismatch()),
    }
}

/// The dot product of two vectors of the same dimension.
pub fn dot(a: impl Into<Value>, b: impl Into<Value>) -> Result<Value> {
    let (a, b) = (a.into(), b.into());
    let (va, vb) = (a.as_vector("dot")?, b.as_vector("dot")?);
    va.dot(vb).map(Value::Num).ok_or(Error::ShapeMismatch {
        op: "dot",
        lhs: a.shape(),
        rhs: b.shape(),
    })
}

/// The cross product of two three-dimensional vectors.
pub fn cross(a: impl Into<Value>, b: impl Into<Value>) -> Result<Value> {
    let (a, b) = (a.into(), b.into());
    match (a.as_vector("cross")?, b.as_vector("cross")?) {
        (VecN::V3(a), VecN::V3(b)) => Ok(a.cross(*b).into()),
        _ => Err(Error::ShapeMismatch {
            op: "cross",
            lhs: a.shape(),
            rhs: b.shape(),
        }),
    }
}

/// The length of a vector.
pub fn magnitude(v: impl Into<Value>) -> Result<Value> {
    let v = v.into();
    Ok(Value::Num(v.as_vector("take the magnitude of")?.len()))
}

/// The vector scaled to unit length, or the zero vector unchanged.
pub fn normalize(v: impl Into<Value>) -> Result<Value> {
    let v = v.into();
    Ok(v.as_vector("normalize")?.normalize().into())
}

/// The negation of a vector.
pub fn negate(v: impl Into<Value>) -> Result<Value> {
    let v = v.into();
    Ok(v.as_vector("negate")?.negate().into())
}

/// Linear interpolation from `a` to `b` by `t`, with `t` clamped to
/// `0.0..=1.0`.
///
/// Works on two numbers or two vectors of the same shape.
pub fn mix(a: impl Into<Value>, b: impl Into<Value>, t: f32) -> Result<Value> {
    let (a, b) = (a.into(), b.into());
    let t = t.clamp(0.0, 1.0);
    match (&a, &b) {
        (Value::Num(a), Value::Num(b)) => Ok(Value::Num(a + t * (b - a))),
        (Value::Vec(_), Value::Vec(_)) => {
            elementwise("mix", a, b, |a, b| a + t * (b - a))
        }
        _ => Err(Error::ShapeMismatch {
            op: "mix",
            lhs: a.shape(),
            rhs: b.shape(),
        }),
    }
}

/// Exact componentwise equality of two values of the same shape.
///
/// Comparing values of different shapes is an error rather than
/// `false`, since it usually indicates a bug in the caller.
pub fn equal(a: impl Into<Value>, b: impl Into<Value>) -> Result<bool> {
    let (a, b) = (a.into(), b.into());
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            op: "compare",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(a == b)
}

/// The determinant of a matrix.
pub fn det(m: impl Into<Value>) -> Result<Value> {
    let m = m.into();
    Ok(Value::Num(m.as_matrix("take the determinant of")?.det()))
}

/// The inverse of a matrix.
///
/// No singularity check is made; inverting a singular matrix yields
/// non-finite entries.
pub fn inverse(m: impl Into<Value>) -> Result<Value> {
    let m = m.into();
    Ok(m.as_matrix("invert")?.inverse().into())
}

/// The transpose of a matrix.
pub fn transpose(m: impl Into<Value>) -> Result<Value> {
    let m = m.into();
    Ok(m.as_matrix("transpose")?.transpose().into())
}
