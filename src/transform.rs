//! Transformation matrices for a column-major, right-handed pipeline.
//!
//! Every builder returns a [`Mat4`] (or [`Mat3`] for
//! [`normal_matrix3`]) whose columns are laid out the way a graphics API
//! expects its uniform matrices: the translation of an affine transform
//! occupies the first three rows of the last column, and a camera built by
//! [`look_at`] looks down its negative z axis.

use crate::angle::Angle;
use crate::mat::{Mat3, Mat4};
use crate::vec::{Vec3, splat};

/// Returns a matrix translating points by `t`.
///
/// Directions (w = 0 vectors) are unaffected.
pub fn translate(t: Vec3) -> Mat4 {
    Mat4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [t.x(), t.y(), t.z(), 1.0],
    ])
}

/// Returns a matrix scaling by `s` along each axis.
pub fn scale(s: Vec3) -> Mat4 {
    Mat4::new([
        [s.x(), 0.0, 0.0, 0.0],
        [0.0, s.y(), 0.0, 0.0],
        [0.0, 0.0, s.z(), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix scaling uniformly by `s`.
pub fn scale_uniform(s: f32) -> Mat4 {
    scale(splat(s))
}

/// Returns a matrix rotating about the x axis by `a`.
pub fn rotate_x(a: Angle) -> Mat4 {
    let (sin, cos) = a.sin_cos();
    Mat4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, sin, 0.0],
        [0.0, -sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating about the y axis by `a`.
pub fn rotate_y(a: Angle) -> Mat4 {
    let (sin, cos) = a.sin_cos();
    Mat4::new([
        [cos, 0.0, -sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating about the z axis by `a`.
///
/// A positive angle rotates counterclockwise when viewed from the
/// positive z direction:
/// ```
/// # use gfxmath::{assert_approx_eq, degs, transform::rotate_z, vec4};
/// let m = rotate_z(degs(90.0));
/// assert_approx_eq!((m * vec4(1.0, 0.0, 0.0, 1.0)).0, [0.0, 1.0, 0.0, 1.0]);
/// ```
pub fn rotate_z(a: Angle) -> Mat4 {
    let (sin, cos) = a.sin_cos();
    Mat4::new([
        [cos, sin, 0.0, 0.0],
        [-sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating about an arbitrary `axis` by `a`.
///
/// `axis` is normalized internally. Uses the Rodrigues form
/// `R = cos θ · I + sin θ · [axis]× + (1 − cos θ) · axis ⊗ axis`.
pub fn rotate(axis: Vec3, a: Angle) -> Mat4 {
    let [x, y, z] = axis.normalize().0;
    let (s, c) = a.sin_cos();
    let t = 1.0 - c;

    Mat4::new([
        [c + t * x * x, s * z + t * x * y, -s * y + t * x * z, 0.0],
        [-s * z + t * x * y, c + t * y * y, s * x + t * y * z, 0.0],
        [s * y + t * x * z, -s * x + t * y * z, c + t * z * z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a view matrix for a camera at `eye` looking at `target`.
///
/// `up` orients the camera about its viewing axis; `(0, 1, 0)` is the
/// conventional choice. The camera basis is right-handed: the forward
/// axis is negated so that the camera looks down −z, and the eye position
/// is encoded as a translation by its negated projections onto the basis
/// vectors.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let fwd = (target - eye).normalize();
    let right = fwd.cross(up).normalize();
    let true_up = right.cross(fwd);

    Mat4::new([
        [right.x(), true_up.x(), -fwd.x(), 0.0],
        [right.y(), true_up.y(), -fwd.y(), 0.0],
        [right.z(), true_up.z(), -fwd.z(), 0.0],
        [
            -right.dot(eye),
            -true_up.dot(eye),
            fwd.dot(eye),
            1.0,
        ],
    ])
}

/// Returns a perspective projection matrix for a symmetric frustum.
///
/// `fovy` is the vertical field of view, `aspect` the width-to-height
/// ratio of the viewport, and `near` and `far` the distances of the
/// clipping planes (both positive). The projected w equals the negated
/// view-space z, so points between the planes map into the NDC cube after
/// the perspective divide.
pub fn perspective(fovy: Angle, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fovy / 2.0).tan();
    let depth = far - near;

    Mat4::new([
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, -(near + far) / depth, -1.0],
        [0.0, 0.0, -2.0 * near * far / depth, 0.0],
    ])
}

/// Returns an orthographic projection matrix mapping the axis-aligned box
/// given by `left`..`right`, `bottom`..`top`, `near`..`far` to the NDC
/// cube.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    Mat4::new([
        [2.0 / w, 0.0, 0.0, 0.0],
        [0.0, 2.0 / h, 0.0, 0.0],
        [0.0, 0.0, -2.0 / d, 0.0],
        [
            -(left + right) / w,
            -(bottom + top) / h,
            -(near + far) / d,
            1.0,
        ],
    ])
}

/// Returns the normal matrix of `m`: the inverse of its transpose.
///
/// Transforming normals by this matrix keeps them perpendicular to their
/// surfaces even under nonuniform scaling.
pub fn normal_matrix(m: &Mat4) -> Mat4 {
    m.transpose().inverse()
}

/// Returns the normal matrix of `m` truncated to 3×3, for use on
/// direction vectors directly.
pub fn normal_matrix3(m: &Mat4) -> Mat3 {
    normal_matrix(m).resize()
}
