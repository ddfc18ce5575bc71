// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::matrix::{impl_matrix, named_entries};
use crate::{Mat2, Mat4, Vec3};

/// Row-major 3×3 matrix.
///
/// Used on its own for linear maps in 3-D and as the rotation/scale block of
/// a [`Mat4`] affine transform.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Mat3 {
    data: [f32; 9],
}

impl_matrix!(Mat3, Vec3, 3);

named_entries!(Mat3, 3;
    m00 => (0, 0), m01 => (0, 1), m02 => (0, 2),
    m10 => (1, 0), m11 => (1, 1), m12 => (1, 2),
    m20 => (2, 0), m21 => (2, 1), m22 => (2, 2),
);

impl Mat3 {
    /// Determinant by the six-term rule of Sarrus.
    pub fn det(&self) -> f32 {
        self.m00() * self.m11() * self.m22()
            + self.m01() * self.m12() * self.m20()
            + self.m02() * self.m10() * self.m21()
            - self.m02() * self.m11() * self.m20()
            - self.m01() * self.m10() * self.m22()
            - self.m00() * self.m12() * self.m21()
    }

    /// General inverse: adjugate (transposed cofactor matrix) over `det`.
    ///
    /// A singular matrix (`det == 0`) yields non-finite entries.
    ///
    /// # Examples
    /// ```
    /// use ys_math::Mat3;
    /// let m = Mat3::new([2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 8.0]);
    /// assert_eq!(m.inverse().to_array(), [0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 0.125]);
    /// ```
    pub fn inverse(&self) -> Self {
        let [a, b, c, d, e, f, g, h, i] = self.data;
        let inv_det = 1.0 / self.det();
        Self::new([
            (e * i - f * h) * inv_det,
            (c * h - b * i) * inv_det,
            (b * f - c * e) * inv_det,
            (f * g - d * i) * inv_det,
            (a * i - c * g) * inv_det,
            (c * d - a * f) * inv_det,
            (d * h - e * g) * inv_det,
            (b * g - a * h) * inv_det,
            (a * e - b * d) * inv_det,
        ])
    }

    /// Inverts in place; see [`Mat3::inverse`].
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Diagonal scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx,  0.0, 0.0,
            0.0, sy,  0.0,
            0.0, 0.0, sz,
        ])
    }

    /// Upper-left 2×2 block.
    pub fn upper_left(&self) -> Mat2 {
        Mat2::new([self.m00(), self.m01(), self.m10(), self.m11()])
    }

    /// Embeds as the linear block of a 4×4 affine transform with no
    /// translation.
    pub fn to_mat4(&self) -> Mat4 {
        let [a, b, c, d, e, f, g, h, i] = self.data;
        Mat4::new([
            a,   b,   c,   0.0,
            d,   e,   f,   0.0,
            g,   h,   i,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }
}
