// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::vector::impl_vector;
use crate::Vec3;

/// Four-component `f32` vector, also used for homogeneous coordinates and
/// RGBA colors (`r, g, b, a` alias `x, y, z, w`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Vec4 {
    data: [f32; 4],
}

impl_vector!(Vec4, 4);

impl Vec4 {
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit vector along +W.
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Homogeneous point: `(p.x, p.y, p.z, 1)`.
    pub const fn from_point(p: Vec3) -> Self {
        p.extend(1.0)
    }

    /// Homogeneous direction: `(d.x, d.y, d.z, 0)`.
    pub const fn from_direction(d: Vec3) -> Self {
        d.extend(0.0)
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// W component.
    pub const fn w(&self) -> f32 {
        self.data[3]
    }

    /// Red channel.
    pub const fn r(&self) -> f32 {
        self.data[0]
    }

    /// Green channel.
    pub const fn g(&self) -> f32 {
        self.data[1]
    }

    /// Blue channel.
    pub const fn b(&self) -> f32 {
        self.data[2]
    }

    /// Alpha channel.
    pub const fn a(&self) -> f32 {
        self.data[3]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f32) {
        self.data[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f32) {
        self.data[1] = y;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, z: f32) {
        self.data[2] = z;
    }

    /// Sets the W component.
    pub fn set_w(&mut self, w: f32) {
        self.data[3] = w;
    }

    /// Drops the `w` component without dividing by it.
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }
}
