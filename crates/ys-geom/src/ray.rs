// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ys_math::{Mat4, Point2, Point3, Point4, Vec2, Vec3, Vec4};

macro_rules! impl_ray {
    ($name:ident, $point:ident, $vec:ident) => {
        impl $name {
            /// Creates a ray from an origin and a direction.
            ///
            /// The direction is stored as given.
            pub const fn new(origin: $point, dir: $vec) -> Self {
                Self { origin, dir }
            }

            /// Origin point.
            pub const fn origin(&self) -> $point {
                self.origin
            }

            /// Direction vector.
            pub const fn dir(&self) -> $vec {
                self.dir
            }

            /// Point at parameter `t`: `origin + dir * t`.
            pub fn at(&self, t: f32) -> $point {
                self.origin.add(&self.dir.mul_s(t))
            }

            /// Same origin with a unit-length direction.
            ///
            /// A zero direction yields `NaN` components, as with
            #[doc = concat!("[`", stringify!($vec), "::normal`].")]
            pub fn normal(&self) -> Self {
                Self::new(self.origin, self.dir.normal())
            }

            /// Rescales the direction to unit length in place; see
            #[doc = concat!("[`", stringify!($name), "::normal`].")]
            pub fn normalize(&mut self) {
                self.dir.normalize();
            }

            /// `true` when origin and direction are both finite.
            pub fn is_finite(&self) -> bool {
                self.origin.is_finite() && self.dir.is_finite()
            }
        }
    };
}

/// Ray in the plane.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray2 {
    origin: Point2,
    dir: Vec2,
}

/// Ray in 3-D space.
///
/// # Examples
/// ```
/// use ys_geom::Ray3;
/// use ys_math::{Point3, Vec3};
/// let ray = Ray3::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
/// assert_eq!(ray.at(1.5).to_array(), [1.0, 3.0, 0.0]);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray3 {
    origin: Point3,
    dir: Vec3,
}

/// Ray in homogeneous coordinates.
///
/// Points conventionally carry `w = 1` and directions `w = 0`; neither is
/// enforced.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray4 {
    origin: Point4,
    dir: Vec4,
}

impl_ray!(Ray2, Point2, Vec2);
impl_ray!(Ray3, Point3, Vec3);
impl_ray!(Ray4, Point4, Vec4);

impl Ray3 {
    /// Maps the ray through an affine transform.
    ///
    /// The origin is transformed as a point (translation applies), the
    /// direction as a direction (translation ignored). The direction is not
    /// renormalized, so `transform(m).at(t) == m.transform_point(at(t))`.
    pub fn transform(&self, m: &Mat4) -> Self {
        Self::new(m.transform_point(&self.origin), m.transform_direction(&self.dir))
    }
}

impl Ray4 {
    /// Multiplies origin and direction by `m`.
    pub fn transform(&self, m: &Mat4) -> Self {
        Self::new(m.mul_vec(&self.origin), m.mul_vec(&self.dir))
    }

    /// Lifts a 3-D ray into homogeneous form (`w = 1` origin, `w = 0` dir).
    pub fn from_ray3(ray: &Ray3) -> Self {
        Self::new(Vec4::from_point(ray.origin()), Vec4::from_direction(ray.dir()))
    }
}

impl From<Ray3> for Ray4 {
    fn from(value: Ray3) -> Self {
        Self::from_ray3(&value)
    }
}
