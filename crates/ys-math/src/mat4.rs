// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::matrix::{impl_matrix, named_entries};
use crate::{Mat3, Vec3, Vec4};

/// Row-major 4×4 homogeneous transform.
///
/// - Stored row-major: `as_array()[row * 4 + col]` is entry `(row, col)`.
/// - Transforms column vectors on the right (`M * v`); translation occupies
///   the last column (`m03`, `m13`, `m23`).
/// - [`Mat4::det`] and [`Mat4::inverse`] assume an affine matrix whose last
///   row is `[0, 0, 0, 1]`.
///
/// # Examples
/// Basic transformations:
/// ```
/// use ys_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms will accumulate rounding.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Mat4 {
    data: [f32; 16],
}

impl_matrix!(Mat4, Vec4, 4);

named_entries!(Mat4, 4;
    m00 => (0, 0), m01 => (0, 1), m02 => (0, 2), m03 => (0, 3),
    m10 => (1, 0), m11 => (1, 1), m12 => (1, 2), m13 => (1, 3),
    m20 => (2, 0), m21 => (2, 1), m22 => (2, 2), m23 => (2, 3),
    m30 => (3, 0), m31 => (3, 1), m32 => (3, 2), m33 => (3, 3),
);

impl Mat4 {
    /// Upper-left 3×3 block (the rotation/scale part of an affine transform).
    pub fn upper_left(&self) -> Mat3 {
        Mat3::new([
            self.m00(), self.m01(), self.m02(),
            self.m10(), self.m11(), self.m12(),
            self.m20(), self.m21(), self.m22(),
        ])
    }

    /// Translation column `(m03, m13, m23)`.
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.m03(), self.m13(), self.m23())
    }

    /// Determinant of the upper-left 3×3 block.
    ///
    /// This is the homogeneous-transform convention, not a general 4×4
    /// determinant: the translation column and the last row are ignored, which
    /// is exact only when the last row is `[0, 0, 0, 1]`.
    pub fn det(&self) -> f32 {
        self.upper_left().det()
    }

    /// Inverse of an affine transform.
    ///
    /// The 3×3 block is inverted with [`Mat3::inverse`] and the translation is
    /// recomputed as `-R⁻¹ * t`, so `m * m.inverse()` is the identity for any
    /// affine `m` with a non-singular linear block. The last row of the result
    /// is always `[0, 0, 0, 1]`. A singular block yields non-finite entries.
    ///
    /// # Examples
    /// ```
    /// use ys_math::{Mat4, Vec3};
    /// let m = Mat4::translation(1.0, 2.0, 3.0).mul(&Mat4::scale(2.0, 2.0, 2.0));
    /// let p = Vec3::new(4.0, -6.0, 8.0);
    /// let back = m.inverse().transform_point(&m.transform_point(&p));
    /// assert_eq!(back.to_array(), p.to_array());
    /// ```
    pub fn inverse(&self) -> Self {
        let r = self.upper_left().inverse();
        let t = r.mul_vec(&self.translation_part()).neg();
        Self::new([
            r.m00(), r.m01(), r.m02(), t.x(),
            r.m10(), r.m11(), r.m12(), t.y(),
            r.m20(), r.m21(), r.m22(), t.z(),
            0.0,     0.0,     0.0,     1.0,
        ])
    }

    /// Inverts in place; see [`Mat4::inverse`].
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Builds a translation matrix.
    ///
    /// Translation occupies the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, tx,
            0.0, 1.0, 0.0, ty,
            0.0, 0.0, 1.0, tz,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Translation along X only.
    pub const fn translation_x(tx: f32) -> Self {
        Self::translation(tx, 0.0, 0.0)
    }

    /// Translation along Y only.
    pub const fn translation_y(ty: f32) -> Self {
        Self::translation(0.0, ty, 0.0)
    }

    /// Translation along Z only.
    pub const fn translation_z(tz: f32) -> Self {
        Self::translation(0.0, 0.0, tz)
    }

    /// Translation by `v`.
    pub const fn translation_vec3(v: Vec3) -> Self {
        Self::translation(v.x(), v.y(), v.z())
    }

    /// Translation by the `xyz` part of `v`; `w` is ignored.
    pub const fn translation_vec4(v: Vec4) -> Self {
        Self::translation(v.x(), v.y(), v.z())
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    ///
    /// Right-handed: `+Y` turns toward `+Z`.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   -s,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    ///
    /// Right-handed: `+Z` turns toward `+X`.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            -s,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    ///
    /// Right-handed: `+X` turns toward `+Y`.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   -s,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation from per-axis angles in radians.
    ///
    /// Ordering: `R = R_z(zr) * R_y(yr) * R_x(xr)`, so applied to a column
    /// vector the X rotation happens first and the Z rotation last.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use ys_math::{Mat4, Vec3};
    /// // X first: +Y goes to +Z, then Z (no-op on +Z).
    /// let r = Mat4::rotation(FRAC_PI_2, 0.0, FRAC_PI_2);
    /// let v = r.transform_direction(&Vec3::UNIT_Y);
    /// assert!((v.z() - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation(xr: f32, yr: f32, zr: f32) -> Self {
        Self::rotation_z(zr)
            .mul(&Self::rotation_y(yr))
            .mul(&Self::rotation_x(xr))
    }

    /// Non-uniform scale; `m33` stays `1`.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx,  0.0, 0.0, 0.0,
            0.0, sy,  0.0, 0.0,
            0.0, 0.0, sz,  0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Scale along X only.
    pub const fn scale_x(sx: f32) -> Self {
        Self::scale(sx, 1.0, 1.0)
    }

    /// Scale along Y only.
    pub const fn scale_y(sy: f32) -> Self {
        Self::scale(1.0, sy, 1.0)
    }

    /// Scale along Z only.
    pub const fn scale_z(sz: f32) -> Self {
        Self::scale(1.0, 1.0, sz)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    ///
    /// Translation components are applied and the resulting vector is returned
    /// with `w` implicitly equal to `1`.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.mul_vec(&Vec4::from_point(*point)).truncate()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// Only the rotational and scaling parts of the matrix affect the result.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.upper_left().mul_vec(direction)
    }
}
