// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::matrix::{impl_matrix, named_entries};
use crate::{Mat3, Vec2};

/// Row-major 2×2 matrix.
///
/// # Examples
/// ```
/// use ys_math::Mat2;
/// let m = Mat2::new([1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(m.m01(), 2.0);
/// assert_eq!(m.det(), -2.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Mat2 {
    data: [f32; 4],
}

impl_matrix!(Mat2, Vec2, 2);

named_entries!(Mat2, 2;
    m00 => (0, 0), m01 => (0, 1),
    m10 => (1, 0), m11 => (1, 1),
);

impl Mat2 {
    /// Determinant: `m00 * m11 - m01 * m10`.
    pub fn det(&self) -> f32 {
        self.m00() * self.m11() - self.m01() * self.m10()
    }

    /// Closed-form inverse `(1 / det) * [[m11, -m01], [-m10, m00]]`.
    ///
    /// A singular matrix (`det == 0`) yields non-finite entries.
    pub fn inverse(&self) -> Self {
        let s = 1.0 / self.det();
        Self::new([
            self.m11() * s,
            -self.m01() * s,
            -self.m10() * s,
            self.m00() * s,
        ])
    }

    /// Inverts in place; see [`Mat2::inverse`].
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, -s, s, c])
    }

    /// Embeds into the upper-left block of a 3×3 identity.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::new([
            self.m00(), self.m01(), 0.0,
            self.m10(), self.m11(), 0.0,
            0.0,        0.0,        1.0,
        ])
    }
}
