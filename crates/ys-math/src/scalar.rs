// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar contract shared by every vector and matrix type.
//!
//! All arithmetic is `f32`. The only numeric routine the crate does not
//! compute itself is the square root, which goes through a [`SqrtBackend`]:
//!
//! - [`StdSqrt`] calls the platform `f32::sqrt` (the default).
//! - [`LibmSqrt`] calls the software `libm::sqrtf` (`libm` feature).
//!
//! [`DefaultSqrt`] names the backend selected at build time. Call sites that
//! need a different one use the `*_with::<S>()` variants on the vector types,
//! e.g. [`crate::Vec3::len_with`].

/// Square-root provider for lengths and normalization.
///
/// Implementations must return the non-negative square root for
/// non-negative finite input and propagate `NaN`/`inf` the way IEEE-754
/// `sqrt` does; nothing else is assumed.
pub trait SqrtBackend {
    /// Returns the square root of `value`.
    fn sqrt(value: f32) -> f32;
}

/// Platform square root (`f32::sqrt`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StdSqrt;

impl SqrtBackend for StdSqrt {
    #[inline]
    fn sqrt(value: f32) -> f32 {
        value.sqrt()
    }
}

/// Software square root from the `libm` crate.
#[cfg(feature = "libm")]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LibmSqrt;

#[cfg(feature = "libm")]
impl SqrtBackend for LibmSqrt {
    #[inline]
    fn sqrt(value: f32) -> f32 {
        libm::sqrtf(value)
    }
}

/// Backend used by `len`, `normal`, and `normalize`.
#[cfg(not(feature = "libm"))]
pub type DefaultSqrt = StdSqrt;

/// Backend used by `len`, `normal`, and `normalize`.
#[cfg(feature = "libm")]
pub type DefaultSqrt = LibmSqrt;

/// Square root through [`DefaultSqrt`].
#[inline]
pub fn sqrt(value: f32) -> f32 {
    DefaultSqrt::sqrt(value)
}

/// Tolerance used by the crate's own approximate comparisons.
pub const EPSILON: f32 = 1e-6;

/// Returns `true` when `a` and `b` differ by at most `eps`.
#[inline]
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Halving;

    impl SqrtBackend for Halving {
        fn sqrt(value: f32) -> f32 {
            value * 0.5
        }
    }

    #[test]
    fn default_backend_matches_platform_on_perfect_squares() {
        for (v, r) in [(0.0f32, 0.0f32), (1.0, 1.0), (4.0, 2.0), (25.0, 5.0)] {
            assert_eq!(sqrt(v), r);
        }
    }

    #[test]
    fn negative_input_is_nan() {
        assert!(sqrt(-1.0).is_nan());
    }

    #[test]
    fn custom_backend_is_used() {
        assert_eq!(<Halving as SqrtBackend>::sqrt(8.0), 4.0);
    }

    #[cfg(feature = "libm")]
    #[test]
    fn libm_backend_agrees_with_platform() {
        for v in [0.0f32, 2.0, 10.0, 1e-20, 3.5e30] {
            assert_eq!(LibmSqrt::sqrt(v), StdSqrt::sqrt(v));
        }
    }
}
