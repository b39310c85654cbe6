//! Errors reported by the dynamically shaped operations.

use thiserror::Error;

use crate::value::Shape;

pub type Result<T> = core::result::Result<T, Error>;

/// An error raised by an operation on [`Value`][crate::value::Value]s or
/// by a variadic constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two operands whose shapes the operation cannot combine.
    #[error("cannot {op} {lhs} and {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// An operand of a kind the operation does not accept at all.
    #[error("cannot {op} a {got}")]
    TypeMismatch { op: &'static str, got: Shape },

    /// A vector appeared on the left of a matrix in a product.
    #[error("cannot multiply a vector by a matrix; put the matrix on the left")]
    VectorTimesMatrix,

    /// A constructor given an argument list it has no interpretation for.
    #[error("cannot construct a {ctor} from {got} arguments")]
    Arity { ctor: &'static str, got: usize },

    /// A vector constructor given too few components.
    #[error("too few components for a {ctor}: expected {want}, got {got}")]
    MissingComponents {
        ctor: &'static str,
        want: usize,
        got: usize,
    },
}
