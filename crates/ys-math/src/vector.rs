// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Arithmetic shared by [`crate::Vec2`], [`crate::Vec3`] and [`crate::Vec4`].
//!
//! Each vector is a `#[repr(transparent)]` wrapper around `[f32; N]`, so the
//! body of every component-wise operation is identical up to `N`. The macro
//! below expands it once per arity; arity-specific items (constructors,
//! named accessors, `cross`) live in the per-type modules.

macro_rules! impl_vector {
    ($name:ident, $n:literal) => {
        impl $name {
            /// All components zero.
            pub const ZERO: Self = Self { data: [0.0; $n] };

            /// All components one.
            pub const ONE: Self = Self { data: [1.0; $n] };

            /// Creates a vector with every component set to `value`.
            pub const fn splat(value: f32) -> Self {
                Self { data: [value; $n] }
            }

            /// Returns the components as an array (`[x, y, ...]`).
            pub const fn to_array(self) -> [f32; $n] {
                self.data
            }

            /// Flat view of the components; index order matches `x, y, z, w`.
            pub const fn as_array(&self) -> &[f32; $n] {
                &self.data
            }

            /// Mutable flat view of the components.
            pub fn as_mut_array(&mut self) -> &mut [f32; $n] {
                &mut self.data
            }

            #[inline]
            fn map(&self, f: impl Fn(f32) -> f32) -> Self {
                Self {
                    data: core::array::from_fn(|i| f(self.data[i])),
                }
            }

            #[inline]
            fn zip(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
                Self {
                    data: core::array::from_fn(|i| f(self.data[i], other.data[i])),
                }
            }

            /// Component-wise sum.
            pub fn add(&self, other: &Self) -> Self {
                self.zip(other, |a, b| a + b)
            }

            /// Adds `s` to every component.
            pub fn add_s(&self, s: f32) -> Self {
                self.map(|a| a + s)
            }

            /// Component-wise difference.
            pub fn sub(&self, other: &Self) -> Self {
                self.zip(other, |a, b| a - b)
            }

            /// Subtracts `s` from every component.
            pub fn sub_s(&self, s: f32) -> Self {
                self.map(|a| a - s)
            }

            /// Component-wise (Hadamard) product.
            pub fn mul(&self, other: &Self) -> Self {
                self.zip(other, |a, b| a * b)
            }

            /// Multiplies every component by `s`.
            pub fn mul_s(&self, s: f32) -> Self {
                self.map(|a| a * s)
            }

            /// Component-wise quotient.
            ///
            /// Unchecked: a zero component in `other` yields `±inf` (or `NaN`
            /// for `0 / 0`) in that lane.
            pub fn div(&self, other: &Self) -> Self {
                self.zip(other, |a, b| a / b)
            }

            /// Divides every component by `s`.
            ///
            /// Computes `1 / s` once and multiplies. For `s == 0` every
            /// component becomes `±inf` or `NaN`, consistent with [`Self::div`].
            pub fn div_s(&self, s: f32) -> Self {
                let inv_s = 1.0 / s;
                self.mul_s(inv_s)
            }

            /// Squared length. Prefer this over [`Self::len`] for comparisons.
            pub fn len_sq(&self) -> f32 {
                self.dot(self)
            }

            /// Length through the crate's [`DefaultSqrt`](crate::DefaultSqrt).
            pub fn len(&self) -> f32 {
                self.len_with::<crate::DefaultSqrt>()
            }

            /// Length through an explicit square-root backend.
            pub fn len_with<S: crate::SqrtBackend>(&self) -> f32 {
                S::sqrt(self.len_sq())
            }

            /// Returns the unit vector pointing the same way.
            ///
            /// Precondition: `self.len() > 0`. The zero vector is not guarded
            /// against and produces `NaN` components.
            pub fn normal(&self) -> Self {
                self.normal_with::<crate::DefaultSqrt>()
            }

            /// [`Self::normal`] through an explicit square-root backend.
            pub fn normal_with<S: crate::SqrtBackend>(&self) -> Self {
                let inv_len = 1.0 / self.len_with::<S>();
                self.mul_s(inv_len)
            }

            /// Normalizes in place. Same precondition as [`Self::normal`].
            pub fn normalize(&mut self) {
                *self = self.normal();
            }

            /// [`Self::normalize`] through an explicit square-root backend.
            pub fn normalize_with<S: crate::SqrtBackend>(&mut self) {
                *self = self.normal_with::<S>();
            }

            /// Returns the vector with every component negated.
            pub fn neg(&self) -> Self {
                self.map(|a| -a)
            }

            /// Negates every component in place.
            pub fn negate(&mut self) {
                *self = self.neg();
            }

            /// Dot product.
            pub fn dot(&self, other: &Self) -> f32 {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            }

            /// Vector projection of `self` onto `onto`:
            /// `onto * (dot(self, onto) / len_sq(onto))`.
            ///
            /// Undefined (non-finite) when `onto` is the zero vector.
            pub fn project(&self, onto: &Self) -> Self {
                let dot = self.dot(onto);
                onto.mul_s(dot / onto.len_sq())
            }

            /// `true` when no component is `NaN` or infinite.
            pub fn is_finite(&self) -> bool {
                self.data.iter().all(|c| c.is_finite())
            }

            /// `true` when every component of `self` is within `eps` of the
            /// matching component of `other`.
            pub fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(a, b)| crate::scalar::approx_eq(*a, *b, eps))
            }

            /// `true` when any component is `NaN`.
            pub fn is_nan(&self) -> bool {
                self.data.iter().any(|c| c.is_nan())
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(value: [f32; $n]) -> Self {
                Self { data: value }
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(value: $name) -> Self {
                value.data
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = f32;
            fn index(&self, index: usize) -> &f32 {
                &self.data[index]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.data[index]
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $name::add(&self, &rhs)
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $name::sub(&self, &rhs)
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                $name::mul(&self, &rhs)
            }
        }

        impl core::ops::Div for $name {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                $name::div(&self, &rhs)
            }
        }

        impl core::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                self.mul_s(rhs)
            }
        }

        impl core::ops::Mul<$name> for f32 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                rhs.mul_s(self)
            }
        }

        impl core::ops::Div<f32> for $name {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                self.div_s(rhs)
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                $name::neg(&self)
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = $name::add(self, &rhs);
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = $name::sub(self, &rhs);
            }
        }

        impl core::ops::MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                *self = self.mul_s(rhs);
            }
        }

        impl core::ops::DivAssign<f32> for $name {
            fn div_assign(&mut self, rhs: f32) {
                *self = self.div_s(rhs);
            }
        }
    };
}

pub(crate) use impl_vector;
