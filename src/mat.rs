//! Square matrices with column-major storage.
//!
//! A matrix is stored as an array of its columns: `m.0[j]` is column `j`,
//! and the scalar at column `j`, row `i` is `m[(j, i)]`. This matches the
//! layout a GPU pipeline expects of matrix uniforms, so a value can be
//! uploaded by casting it to its flat column-major array (see
//! [`Mat4::to_array`] and the `bytemuck` impls).

use core::array;
use core::fmt;
use core::ops::{Add, Index, Mul, MulAssign, Sub};

use bytemuck::{Pod, Zeroable};

use crate::approx::ApproxEq;
use crate::vec::{Vec3, Vector};

/// An `N`×`N` matrix of `f32`s, stored as `N` columns of `N` components.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix<const N: usize>(pub(crate) [[f32; N]; N]);

/// A 2×2 matrix.
pub type Mat2 = Matrix<2>;
/// A 3×3 matrix.
pub type Mat3 = Matrix<3>;
/// A 4×4 matrix.
pub type Mat4 = Matrix<4>;

// SAFETY: repr(transparent) over [[f32; N]; N], which is itself Pod.
unsafe impl<const N: usize> Zeroable for Matrix<N> {}
unsafe impl<const N: usize> Pod for Matrix<N> {}

impl<const N: usize> Matrix<N> {
    /// Returns a matrix with the given columns.
    ///
    /// `cols[j][i]` becomes the entry at column `j`, row `i`.
    #[inline]
    pub const fn new(cols: [[f32; N]; N]) -> Self {
        Self(cols)
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self::diagonal(1.0)
    }

    /// Returns a matrix with `d` on the diagonal and zeros elsewhere.
    pub fn diagonal(d: f32) -> Self {
        let mut m = [[0.0; N]; N];
        for i in 0..N {
            m[i][i] = d;
        }
        Self(m)
    }

    /// Returns a matrix with the given column vectors, in order.
    pub fn from_cols(cols: [Vector<N>; N]) -> Self {
        Self(cols.map(|c| c.0))
    }

    /// Returns a matrix with the given row vectors, in order.
    pub fn from_rows(rows: [Vector<N>; N]) -> Self {
        Self::from_cols(rows).transpose()
    }

    /// Returns column `j` of `self` as a vector.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<N> {
        Vector(self.0[j])
    }

    /// Returns row `i` of `self` as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<N> {
        Vector(array::from_fn(|j| self.0[j][i]))
    }

    /// Returns the columns of `self` as arrays of components.
    #[inline]
    pub const fn to_cols(self) -> [[f32; N]; N] {
        self.0
    }

    /// Applies `f` to each pair of corresponding entries of `self` and
    /// `rhs`.
    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        let mut res = self.0;
        for j in 0..N {
            for i in 0..N {
                res[j][i] = f(self.0[j][i], rhs.0[j][i]);
            }
        }
        Self(res)
    }

    /// Returns the transpose of `self`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut res = self.0;
        for j in 0..N {
            for i in 0..N {
                res[j][i] = self.0[i][j];
            }
        }
        Self(res)
    }

    /// Returns the top-left `P`×`P` submatrix of `self`.
    ///
    /// If `P` > `N`, entries not covered by `self` keep their identity
    /// defaults: ones on the diagonal, zeros elsewhere.
    pub fn resize<const P: usize>(&self) -> Matrix<P> {
        let mut res = Matrix::<P>::identity();
        let k = if P < N { P } else { N };
        for j in 0..k {
            for i in 0..k {
                res.0[j][i] = self.0[j][i];
            }
        }
        res
    }
}

impl Mat2 {
    /// Returns the determinant of `self`.
    pub fn det(&self) -> f32 {
        let [[a, c], [b, d]] = self.0;
        a * d - b * c
    }

    /// Returns the inverse of `self`.
    ///
    /// No invertibility check is performed: the inverse of a singular
    /// matrix contains infinities or NaNs.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        let r = 1.0 / self.det();
        Self([[d * r, -c * r], [-b * r, a * r]])
    }

    /// Returns the entries of `self` as a flat column-major array.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        bytemuck::cast(self)
    }
}

impl Mat3 {
    /// Returns the determinant of `self`: the scalar triple product of
    /// its columns.
    pub fn det(&self) -> f32 {
        let [a, b, c] = self.0.map(Vector);
        a.dot(b.cross(c))
    }

    /// Returns the inverse of `self`, computed from the adjugate: the rows
    /// of the adjugate are the pairwise cross products of the columns.
    ///
    /// No invertibility check is performed: the inverse of a singular
    /// matrix contains infinities or NaNs.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let [a, b, c] = self.0.map(Vector);

        // Rows of the adjugate.
        let r0 = b.cross(c);
        let r1 = c.cross(a);
        let r2 = a.cross(b);

        let r = 1.0 / a.dot(r0);

        Self(array::from_fn(|j| [r0[j] * r, r1[j] * r, r2[j] * r]))
    }

    /// Returns the entries of `self` as a flat column-major array.
    #[inline]
    pub fn to_array(self) -> [f32; 9] {
        bytemuck::cast(self)
    }
}

impl Mat4 {
    /// Returns the determinant of `self`.
    ///
    /// Computed by cofactor expansion along the bottom row, with the 3×3
    /// minors expressed as triple products of the columns' upper blocks so
    /// that two cross products can be shared between the four terms.
    pub fn det(&self) -> f32 {
        let [u0, u1, u2, u3] = self.0.map(|col| Vec3::from([col[0], col[1], col[2]]));
        let [w0, w1, w2, w3] = self.0.map(|col| col[3]);

        let p = u2.cross(u3);
        let q = u0.cross(u1);

        w1 * u0.dot(p) - w0 * u1.dot(p) + w3 * q.dot(u2) - w2 * q.dot(u3)
    }

    /// Returns the inverse of `self`, computed from the adjugate with each
    /// cofactor evaluated as a triple product, mirroring [`Mat4::det`].
    ///
    /// No invertibility check is performed: the inverse of a singular
    /// matrix contains infinities or NaNs.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let r = 1.0 / self.det();
        // Adjugate: the entry of the inverse at column j, row i is the
        // cofactor of the entry at row j, column i, over the determinant.
        Self(array::from_fn(|j| {
            array::from_fn(|i| self.cofactor(j, i) * r)
        }))
    }

    /// Cofactor of the entry at row `r`, column `c`.
    fn cofactor(&self, r: usize, c: usize) -> f32 {
        let mut sub = [[0.0; 3]; 3];
        let mut sj = 0;
        for j in 0..4 {
            if j == c {
                continue;
            }
            let mut si = 0;
            for i in 0..4 {
                if i == r {
                    continue;
                }
                sub[sj][si] = self.0[j][i];
                si += 1;
            }
            sj += 1;
        }
        let [a, b, c3] = sub.map(Vector);
        let minor = a.dot(b.cross(c3));
        if (r + c) % 2 == 0 { minor } else { -minor }
    }

    /// Returns the entries of `self` as a flat column-major array, ready
    /// for a uniform upload.
    #[inline]
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self)
    }
}

//
// Foreign trait impls
//

impl<const N: usize> Default for Matrix<N> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

/// Indexing by `(column, row)`.
impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f32;
    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &f32 {
        &self.0[col][row]
    }
}

impl<const N: usize> From<[[f32; N]; N]> for Matrix<N> {
    #[inline]
    fn from(cols: [[f32; N]; N]) -> Self {
        Self(cols)
    }
}

impl<const N: usize> Add for Matrix<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|j| array::from_fn(|i| self.0[j][i] + rhs.0[j][i])))
    }
}

impl<const N: usize> Sub for Matrix<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(array::from_fn(|j| array::from_fn(|i| self.0[j][i] - rhs.0[j][i])))
    }
}

impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;
    /// Matrix product: the entry at column `j`, row `i` of the result is
    /// the dot product of row `i` of `self` and column `j` of `rhs`.
    fn mul(self, rhs: Self) -> Self {
        let mut res = [[0.0; N]; N];
        for j in 0..N {
            let col = rhs.col(j);
            for i in 0..N {
                res[j][i] = self.row(i).dot(col);
            }
        }
        Self(res)
    }
}
impl<const N: usize> MulAssign for Matrix<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        Vector(array::from_fn(|i| self.row(i).dot(rhs)))
    }
}

impl<const N: usize> Mul<f32> for Matrix<N> {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0.map(|col| col.map(|c| c * rhs)))
    }
}

impl<const N: usize> Mul<Matrix<N>> for f32 {
    type Output = Matrix<N>;
    fn mul(self, rhs: Matrix<N>) -> Matrix<N> {
        rhs * self
    }
}

impl<const N: usize> ApproxEq<Self, f32> for Matrix<N> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

impl<const N: usize> fmt::Debug for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat{N}[")?;
        for i in 0..N {
            writeln!(f, "    {:6.2?}", self.row(i).0)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::vec::{vec2, vec3, vec4};

    use super::*;

    #[test]
    fn identity_and_diagonal() {
        assert_eq!(
            Mat2::identity().to_cols(),
            [[1.0, 0.0], [0.0, 1.0]]
        );
        assert_eq!(
            Mat3::diagonal(2.0).to_cols(),
            [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]
        );
        assert_eq!(Mat4::default(), Mat4::identity());
    }

    #[test]
    fn cols_and_rows() {
        let m = Mat3::from_cols([
            vec3(1.0, 2.0, 3.0),
            vec3(4.0, 5.0, 6.0),
            vec3(7.0, 8.0, 9.0),
        ]);
        assert_eq!(m.col(0), vec3(1.0, 2.0, 3.0));
        assert_eq!(m.col(2), vec3(7.0, 8.0, 9.0));
        assert_eq!(m.row(0), vec3(1.0, 4.0, 7.0));
        assert_eq!(m.row(2), vec3(3.0, 6.0, 9.0));
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    fn from_rows_transposes() {
        let m = Mat2::from_rows([vec2(1.0, 2.0), vec2(3.0, 4.0)]);
        assert_eq!(m.col(0), vec2(1.0, 3.0));
        assert_eq!(m.col(1), vec2(2.0, 4.0));
    }

    #[test]
    fn transpose_involution() {
        let m = Mat4::new([
            [0.0, 1.0, 2.0, 3.0],
            [10.0, 11.0, 12.0, 13.0],
            [20.0, 21.0, 22.0, 23.0],
            [30.0, 31.0, 32.0, 33.0],
        ]);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().row(0), m.col(0));
    }

    #[test]
    fn matrix_product() {
        let i = Mat4::identity();
        let m = Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 3.0, 0.0],
            [4.0, 5.0, 6.0, 1.0],
        ]);
        assert_eq!(m * i, m);
        assert_eq!(i * m, m);

        let t = Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ]);
        let s = Mat4::new([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        // Scaling first, then translating, leaves the offset unscaled.
        assert_eq!((t * s).col(3), vec4(1.0, 2.0, 3.0, 1.0));
        // Translating first scales the offset too.
        assert_eq!((s * t).col(3), vec4(2.0, 6.0, 12.0, 1.0));
    }

    #[test]
    fn matrix_vector_product() {
        let m = Mat2::new([[0.0, 1.0], [-1.0, 0.0]]);
        assert_eq!(m * vec2(1.0, 0.0), vec2(0.0, 1.0));
        assert_eq!(m * vec2(0.0, 1.0), vec2(-1.0, 0.0));

        let t = Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ]);
        assert_eq!(t * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(t * vec4(1.0, 0.0, 0.0, 0.0), vec4(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn scalar_product() {
        let m = 2.0 * Mat3::identity();
        assert_eq!(m, Mat3::diagonal(2.0));
        assert_eq!(m * vec3(1.0, 2.0, 3.0), vec3(2.0, 4.0, 6.0));
    }

    #[test]
    fn det2() {
        assert_eq!(Mat2::identity().det(), 1.0);
        // Columns (1, 0) and (0, 1) supplied column-major.
        assert_eq!(Mat2::new([[1.0, 0.0], [0.0, 1.0]]).det(), 1.0);
        assert_eq!(Mat2::new([[0.0, 1.0], [1.0, 0.0]]).det(), -1.0);
        assert_eq!(Mat2::diagonal(3.0).det(), 9.0);
    }

    #[test]
    fn det3() {
        assert_eq!(Mat3::identity().det(), 1.0);
        assert_eq!(Mat3::diagonal(2.0).det(), 8.0);
        // Swapping two columns flips the sign.
        let m = Mat3::from_cols([
            vec3(0.0, 1.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 0.0, 1.0),
        ]);
        assert_eq!(m.det(), -1.0);
    }

    #[test]
    fn det4() {
        assert_eq!(Mat4::identity().det(), 1.0);
        assert_eq!(Mat4::diagonal(2.0).det(), 16.0);

        let t = Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ]);
        assert_eq!(t.det(), 1.0);

        let s = Mat4::new([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(s.det(), 24.0);

        // Swapped first two columns of the identity.
        let p = Mat4::new([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(p.det(), -1.0);
    }

    #[test]
    fn inverse2() {
        let m = Mat2::new([[2.0, 0.0], [0.0, 4.0]]);
        let inv = m.inverse();
        assert_eq!(inv, Mat2::new([[0.5, 0.0], [0.0, 0.25]]));
        assert_approx_eq!(m * inv, Mat2::identity());
    }

    #[test]
    fn inverse3() {
        let m = Mat3::new([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
        assert_approx_eq!(m * m.inverse(), Mat3::identity());

        let r = Mat3::new([[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_approx_eq!(r.inverse(), r.transpose());
    }

    #[test]
    fn inverse4() {
        let t = Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ]);
        let inv = t.inverse();
        assert_approx_eq!(inv.col(3).0, [-1.0, -2.0, -3.0, 1.0]);
        assert_approx_eq!(t * inv, Mat4::identity());

        let m = Mat4::new([
            [2.0, 0.0, 1.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [-1.0, 0.0, 4.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ]);
        assert_approx_eq!(m * m.inverse(), Mat4::identity());
        assert_approx_eq!(m.inverse() * m, Mat4::identity());
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let m = Mat3::new([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(m.det(), 0.0);
        let inv = m.inverse();
        assert!(inv.0.iter().flatten().any(|c| !c.is_finite()));
    }

    #[test]
    fn resizing() {
        let m = Mat4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let small: Mat2 = m.resize();
        assert_eq!(small, Mat2::new([[1.0, 2.0], [5.0, 6.0]]));

        let back: Mat3 = small.resize();
        assert_eq!(
            back,
            Mat3::new([[1.0, 2.0, 0.0], [5.0, 6.0, 0.0], [0.0, 0.0, 1.0]])
        );
    }

    #[test]
    fn flat_serialization_is_column_major() {
        let m = Mat2::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.to_array(), [1.0, 2.0, 3.0, 4.0]);

        let m = Mat4::identity();
        let flat = m.to_array();
        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[5], 1.0);
        assert_eq!(flat[1], 0.0);
    }

    #[test]
    fn debug() {
        let m = Mat2::new([[1.0, 2.0], [3.0, 4.0]]);
        let expected = "Mat2[\n    [  1.00,   3.00]\n    [  2.00,   4.00]\n]";
        assert_eq!(format!("{m:?}"), expected);
    }
}
