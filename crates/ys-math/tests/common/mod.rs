// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(dead_code)]

use ys_math::Mat4;

pub const EPS: f32 = 1e-6;

/// Absolute-or-relative closeness, scaled by the larger magnitude.
pub fn close(a: f32, b: f32, tol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs()).max(1.0);
    diff <= tol * scale
}

pub fn approx_eq(a: f32, b: f32) {
    assert!(close(a, b, EPS), "expected {b}, got {a} (diff {})", (a - b).abs());
}

pub fn approx_eq_slice(a: &[f32], b: &[f32], tol: f32) {
    assert_eq!(a.len(), b.len(), "length mismatch: {a:?} vs {b:?}");
    for i in 0..a.len() {
        assert!(close(a[i], b[i], tol), "index {i}: {a:?} vs {b:?}");
    }
}

pub fn approx_identity4(m: Mat4, tol: f32) {
    approx_eq_slice(m.as_array(), Mat4::identity().as_array(), tol);
}
