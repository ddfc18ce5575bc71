// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::vector::impl_vector;
use crate::Vec3;

/// Two-component `f32` vector.
///
/// Backed by `[f32; 2]`: `v[0]` is `x` (also `r`), `v[1]` is `y` (also `g`).
///
/// # Examples
/// ```
/// use ys_math::Vec2;
/// let v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.len(), 5.0);
/// assert_eq!(v[0], v.x());
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Vec2 {
    data: [f32; 2],
}

impl_vector!(Vec2, 2);

impl Vec2 {
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Red channel (alias of `x`).
    pub const fn r(&self) -> f32 {
        self.data[0]
    }

    /// Green channel (alias of `y`).
    pub const fn g(&self) -> f32 {
        self.data[1]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f32) {
        self.data[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f32) {
        self.data[1] = y;
    }

    /// Appends a `z` component.
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], z)
    }
}
