// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]
#![doc = r"Ray primitives for ys.

This crate provides:
- `Ray2`, `Ray3`, `Ray4`: origin point plus direction vector.
- Parametric evaluation (`at`) and direction normalization.
- `Mat4` transforms for 3-D and homogeneous rays.

Design notes:
- Rays are plain `Copy` aggregates; the direction is never normalized
  implicitly, so `at(t)` keeps the caller's parameterization.
- Float32 throughout, inheriting the unchecked arithmetic of `ys-math`.
"]

/// Ray types.
pub mod ray;

pub use ray::{Ray2, Ray3, Ray4};
