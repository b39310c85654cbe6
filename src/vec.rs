//! Fixed-size vectors with two, three, and four `f32` components.

#![allow(clippy::len_without_is_empty)]

use core::array;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::approx::ApproxEq;

/// A vector with `N` `f32` components.
///
/// Values are immutable in the API sense: every operation returns a new
/// vector. Use the [`vec2`], [`vec3`], and [`vec4`] functions or a
/// `From<[f32; N]>` conversion to construct one.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Vector<const N: usize>(pub [f32; N]);

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self([0.0; N])
    }
}

/// A vector with two components.
pub type Vec2 = Vector<2>;
/// A vector with three components.
pub type Vec3 = Vector<3>;
/// A vector with four components.
pub type Vec4 = Vector<4>;

/// Returns a vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

/// Returns a vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z])
}

/// Returns a vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vector([x, y, z, w])
}

/// Returns a vector with all components equal to `c`.
#[inline]
pub const fn splat<const N: usize>(c: f32) -> Vector<N> {
    Vector([c; N])
}

// SAFETY: repr(transparent) over [f32; N], which is itself Pod.
unsafe impl<const N: usize> Zeroable for Vector<N> {}
unsafe impl<const N: usize> Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// The zero vector.
    pub const ZERO: Self = splat(0.0);

    /// Returns the components of `self` as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; N] {
        self.0
    }

    /// Returns `self` component-wise mapped with `f`.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    /// Returns the result of `f` applied component-wise to `self` and `rhs`.
    #[inline]
    pub fn zip_map(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    /// Returns the dot product of `self` and `rhs`.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        let mut res = 0.0;
        for i in 0..N {
            res += self.0[i] * rhs.0[i];
        }
        res
    }

    /// Returns the length (Euclidean norm) of `self`.
    #[inline]
    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the square of the length of `self`.
    #[inline]
    pub fn len_sqr(self) -> f32 {
        self.dot(self)
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The zero vector has no direction; normalizing it returns the zero
    /// vector rather than dividing by zero:
    /// ```
    /// use gfxmath::vec3;
    /// assert_eq!(vec3(0.0, 0.0, 0.0).normalize(), vec3(0.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.len();
        if len == 0.0 { Self::ZERO } else { self / len }
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// If `t` = 0, returns `self`; if `t` = 1, returns `other`. Values of
    /// `t` outside [0, 1] extrapolate.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Vec2 {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
}

impl Vec3 {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the cross product of `self` and `rhs`.
    ///
    /// The result is orthogonal to both inputs, oriented by the right-hand
    /// rule:
    /// ```
    /// use gfxmath::vec3;
    /// assert_eq!(
    ///     vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)),
    ///     vec3(0.0, 0.0, 1.0)
    /// );
    /// ```
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        vec3(
            ay * bz - az * by, //
            az * bx - ax * bz,
            ax * by - ay * bx,
        )
    }
}

impl Vec4 {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }
    /// Returns the w component of `self`.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }

    /// Returns the x, y, and z components of `self` as a `Vec3`.
    #[inline]
    pub const fn xyz(&self) -> Vec3 {
        vec3(self.0[0], self.0[1], self.0[2])
    }
}

//
// Foreign trait impls
//

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(comps: [f32; N]) -> Self {
        Self(comps)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(v: Vector<N>) -> Self {
        v.0
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, Add::add)
    }
}
impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, Sub::sub)
    }
}
impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.map(|c| c * rhs)
    }
}
impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs * self
    }
}

/// Component-wise (Hadamard) product. Distinct from [`Vector::dot`].
impl<const N: usize> Mul for Vector<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_map(rhs, Mul::mul)
    }
}

impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.map(|c| c / rhs)
    }
}
impl<const N: usize> DivAssign<f32> for Vector<N> {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl<const N: usize> ApproxEq<Self, f32> for Vector<N> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}{:?}", N, self.0)
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c:.p$}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn vector_add_sub_neg() {
        assert_eq!(vec2(1.0, 2.0) + vec2(-2.0, 1.0), vec2(-1.0, 3.0));
        assert_eq!(
            vec3(1.0, 2.0, 0.0) - vec3(-2.0, 1.0, -1.0),
            vec3(3.0, 1.0, 1.0)
        );
        assert_eq!(-vec4(1.0, -2.0, 0.0, 3.0), vec4(-1.0, 2.0, 0.0, -3.0));
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!(vec2(1.0, -2.0) * 0.0, vec2(0.0, 0.0));
        assert_eq!(3.0 * vec3(1.0, -2.0, 3.0), vec3(3.0, -6.0, 9.0));
        assert_eq!(
            vec4(1.0, -2.0, 0.0, -3.0) * 3.0,
            vec4(3.0, -6.0, 0.0, -9.0)
        );
        assert_eq!(vec2(3.0, -6.0) / 3.0, vec2(1.0, -2.0));
    }

    #[test]
    fn component_wise_product() {
        assert_eq!(vec3(1.0, 2.0, 3.0) * vec3(4.0, 5.0, 6.0), vec3(4.0, 10.0, 18.0));
    }

    #[test]
    fn dot_product() {
        assert_eq!(vec2(0.5, 0.5).dot(vec2(-2.0, 2.0)), 0.0);
        assert_eq!(vec2(3.0, 1.0).dot(vec2(3.0, 1.0)), 10.0);
        assert_eq!(vec3(1.0, 2.0, 3.0).dot(vec3(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn cross_product() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);

        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(x), -z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(z.cross(z), Vec3::ZERO);
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3.0, 4.0).len(), 5.0);
        assert_eq!(Vec4::ZERO.len(), 0.0);
    }

    #[test]
    fn normalize_nonzero() {
        assert_eq!(vec3(10.0, 0.0, 0.0).normalize(), vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(vec2(3.0, -4.0).normalize().len(), 1.0);
    }

    #[test]
    fn normalize_zero_yields_zero() {
        let v = Vec3::ZERO.normalize();
        assert_eq!(v, Vec3::ZERO);
        assert!(v.0.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn lerping() {
        let u = vec2(0.0, 0.0);
        let v = vec2(10.0, 10.0);
        assert_eq!(u.lerp(v, 0.5), vec2(5.0, 5.0));
        assert_eq!(u.lerp(v, 0.0), u);
        assert_eq!(u.lerp(v, 1.0), v);
    }

    #[test]
    fn splat_and_from_array() {
        assert_eq!(splat::<3>(2.0), vec3(2.0, 2.0, 2.0));
        assert_eq!(Vec2::from([1.0, -2.0]), vec2(1.0, -2.0));
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", vec2(1.0, -2.0)), "Vec2[1.0, -2.0]");
        assert_eq!(format!("{}", vec3(1.0, 0.5, 0.25)), "(1.00, 0.50, 0.25)");
    }
}
