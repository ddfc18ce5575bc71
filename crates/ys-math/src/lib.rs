// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ys-math: fixed-size `f32` vectors and square matrices.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`]: component-wise arithmetic, length,
//!   normalization, dot, projection; [`Vec3::cross`].
//! - [`Mat2`], [`Mat3`], [`Mat4`]: row-major storage, product, transpose,
//!   trace, determinant, inverse; [`Mat4`] adds affine transform builders.
//! - [`Point2`]..[`Color4`]: aliases of the vector types for self-documenting
//!   signatures.
//!
//! The arithmetic is numerically unchecked. Dividing by zero, normalizing the
//! zero vector or inverting a singular matrix returns `inf`/`NaN` components
//! and never panics; callers that need a hard failure check `is_finite()`.
//!
//! Every type is a `#[repr(transparent)]` array implementing
//! [`bytemuck::Pod`], so slices of raw bytes can be viewed as slices of
//! vectors or matrices.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::should_implement_trait,
    clippy::float_cmp
)]

mod matrix;
mod vector;

mod mat2;
mod mat3;
mod mat4;
/// Scalar contract and the pluggable square root.
pub mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use scalar::{DefaultSqrt, SqrtBackend, StdSqrt, EPSILON};
#[cfg(feature = "libm")]
pub use scalar::LibmSqrt;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// A position in 2-D space.
pub type Point2 = Vec2;
/// A position in 3-D space.
pub type Point3 = Vec3;
/// A homogeneous position (`w = 1` for affine points).
pub type Point4 = Vec4;
/// A two-channel color (`r`, `g`).
pub type Color2 = Vec2;
/// An RGB color.
pub type Color3 = Vec3;
/// An RGBA color.
pub type Color4 = Vec4;
