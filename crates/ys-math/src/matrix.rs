// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Layout and arithmetic shared by [`crate::Mat2`], [`crate::Mat3`] and
//! [`crate::Mat4`].
//!
//! Storage is a single row-major `[f32; N * N]`. Three views alias it:
//!
//! - named entries `m<row><col>()`,
//! - the flat array ([`crate::Mat3::as_array`]), where `row * N + col` is the
//!   index of entry `(row, col)`,
//! - the 2-D row array ([`crate::Mat3::rows`]), obtained with a bytemuck cast
//!   of the same bytes.
//!
//! Determinant and inverse differ per size and live in the per-type modules.

macro_rules! impl_matrix {
    ($name:ident, $vec:ident, $n:literal) => {
        impl $name {
            /// Creates a matrix from row-major data (`data[row * N + col]`).
            pub const fn new(data: [f32; $n * $n]) -> Self {
                Self { data }
            }

            /// Creates a matrix from an array of rows.
            pub fn from_rows(rows: [[f32; $n]; $n]) -> Self {
                Self {
                    data: bytemuck::cast(rows),
                }
            }

            /// All entries zero.
            pub const fn zero() -> Self {
                Self {
                    data: [0.0; $n * $n],
                }
            }

            /// Identity matrix: ones on the diagonal, zeros elsewhere.
            pub fn identity() -> Self {
                Self {
                    data: core::array::from_fn(|i| if i / $n == i % $n { 1.0 } else { 0.0 }),
                }
            }

            /// Returns the entries as a row-major array.
            pub const fn to_array(self) -> [f32; $n * $n] {
                self.data
            }

            /// Flat row-major view of the entries.
            pub const fn as_array(&self) -> &[f32; $n * $n] {
                &self.data
            }

            /// Mutable flat row-major view of the entries.
            pub fn as_mut_array(&mut self) -> &mut [f32; $n * $n] {
                &mut self.data
            }

            /// Row view over the same storage: `rows()[row][col]`.
            pub fn rows(&self) -> &[[f32; $n]; $n] {
                bytemuck::cast_ref(&self.data)
            }

            /// Mutable row view over the same storage.
            pub fn rows_mut(&mut self) -> &mut [[f32; $n]; $n] {
                bytemuck::cast_mut(&mut self.data)
            }

            /// Entry at (`row`, `col`).
            ///
            /// # Panics
            /// If `row` or `col` is not below the matrix size.
            pub const fn m(&self, row: usize, col: usize) -> f32 {
                self.data[row * $n + col]
            }

            /// Overwrites the entry at (`row`, `col`).
            pub fn set(&mut self, row: usize, col: usize, value: f32) {
                self.data[row * $n + col] = value;
            }

            /// Row `index` as a vector.
            pub fn row(&self, index: usize) -> $vec {
                $vec::from(self.rows()[index])
            }

            /// Column `index` as a vector.
            pub fn col(&self, index: usize) -> $vec {
                $vec::from(core::array::from_fn::<f32, $n, _>(|row| {
                    self.data[row * $n + index]
                }))
            }

            /// Element-wise sum.
            pub fn add(&self, other: &Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| self.data[i] + other.data[i]),
                }
            }

            /// Element-wise difference.
            pub fn sub(&self, other: &Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| self.data[i] - other.data[i]),
                }
            }

            /// Multiplies every entry by `s`.
            pub fn mul_s(&self, s: f32) -> Self {
                Self {
                    data: self.data.map(|e| e * s),
                }
            }

            /// Divides every entry by `s` (reciprocal computed once).
            ///
            /// `s == 0` yields non-finite entries.
            pub fn div_s(&self, s: f32) -> Self {
                let inv_s = 1.0 / s;
                self.mul_s(inv_s)
            }

            /// Returns the matrix with every entry negated.
            pub fn neg(&self) -> Self {
                self.mul_s(-1.0)
            }

            /// Returns the transpose. Diagonal entries are unchanged.
            pub fn transpose(&self) -> Self {
                Self {
                    data: core::array::from_fn(|i| {
                        let (row, col) = (i / $n, i % $n);
                        self.data[col * $n + row]
                    }),
                }
            }

            /// Transposes in place.
            pub fn transpose_in_place(&mut self) {
                *self = self.transpose();
            }

            /// Matrix product `self * rhs`.
            ///
            /// Not commutative: `self` is on the left.
            pub fn mul(&self, rhs: &Self) -> Self {
                let mut out = [0.0; $n * $n];
                for row in 0..$n {
                    for col in 0..$n {
                        let mut sum = 0.0;
                        for k in 0..$n {
                            sum += self.data[row * $n + k] * rhs.data[k * $n + col];
                        }
                        out[row * $n + col] = sum;
                    }
                }
                Self::new(out)
            }

            /// Matrix-vector product `self * v` (column vector on the right).
            pub fn mul_vec(&self, v: &$vec) -> $vec {
                $vec::from(core::array::from_fn::<f32, $n, _>(|row| {
                    self.row(row).dot(v)
                }))
            }

            /// Sum of the diagonal entries.
            pub fn trace(&self) -> f32 {
                (0..$n).fold(0.0, |acc, i| acc + self.data[i * $n + i])
            }

            /// `true` when every entry is within `eps` of the matching entry of
            /// `other`.
            pub fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(a, b)| crate::scalar::approx_eq(*a, *b, eps))
            }

            /// `true` when no entry is `NaN` or infinite.
            pub fn is_finite(&self) -> bool {
                self.data.iter().all(|e| e.is_finite())
            }
        }

        impl From<[f32; $n * $n]> for $name {
            fn from(value: [f32; $n * $n]) -> Self {
                Self { data: value }
            }
        }

        impl From<[[f32; $n]; $n]> for $name {
            fn from(value: [[f32; $n]; $n]) -> Self {
                Self::from_rows(value)
            }
        }

        impl From<$name> for [f32; $n * $n] {
            fn from(value: $name) -> Self {
                value.data
            }
        }

        impl core::ops::Index<(usize, usize)> for $name {
            type Output = f32;
            fn index(&self, (row, col): (usize, usize)) -> &f32 {
                &self.data[row * $n + col]
            }
        }

        impl core::ops::IndexMut<(usize, usize)> for $name {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
                &mut self.data[row * $n + col]
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

        impl core::ops::Mul<$vec> for $name {
            type Output = $vec;
            fn mul(self, rhs: $vec) -> $vec {
                self.mul_vec(&rhs)
            }
        }

        impl core::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                self.mul_s(rhs)
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

        impl core::ops::MulAssign<$name> for $name {
            fn mul_assign(&mut self, rhs: $name) {
                *self = $name::mul(self, &rhs);
            }
        }

        impl core::ops::MulAssign<&$name> for $name {
            fn mul_assign(&mut self, rhs: &$name) {
                *self = $name::mul(self, rhs);
            }
        }
    };
}

/// Generates the `m<row><col>()` accessors.
macro_rules! named_entries {
    ($name:ident, $n:literal; $($entry:ident => ($row:literal, $col:literal)),+ $(,)?) => {
        impl $name {
            $(
                #[doc = concat!(
                    "Entry at row ", stringify!($row), ", column ", stringify!($col), "."
                )]
                pub const fn $entry(&self) -> f32 {
                    self.data[$row * $n + $col]
                }
            )+
        }
    };
}

pub(crate) use {impl_matrix, named_entries};
