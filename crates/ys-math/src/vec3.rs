// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::vector::impl_vector;
use crate::{Vec2, Vec4};

/// Three-component `f32` vector.
///
/// * Backed by `[f32; 3]` in `x, y, z` order; `r, g, b` read the same lanes.
/// * May stand for a point, a direction or an RGB color; see the
///   [`Point3`](crate::Point3) and [`Color3`](crate::Color3) aliases.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::Mat4::transform_direction`] for directions (`w = 0`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Vec3 {
    data: [f32; 3],
}

impl_vector!(Vec3, 3);

impl Vec3 {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
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

    /// Red channel (alias of `x`).
    pub const fn r(&self) -> f32 {
        self.data[0]
    }

    /// Green channel (alias of `y`).
    pub const fn g(&self) -> f32 {
        self.data[1]
    }

    /// Blue channel (alias of `z`).
    pub const fn b(&self) -> f32 {
        self.data[2]
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

    /// Right-handed cross product `self × other`.
    ///
    /// Anti-commutative, and the result is orthogonal to both inputs up to
    /// rounding.
    ///
    /// # Examples
    /// ```
    /// use ys_math::Vec3;
    /// assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Appends a `w` component.
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Drops the `z` component.
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.data[0], self.data[1])
    }
}
