// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used)]
use ys_math::{Mat2, Mat4, Vec3};

#[test]
fn vectors_serialize_as_flat_arrays() {
    let json = serde_json::to_string(&Vec3::new(1.0, 2.0, 3.0)).unwrap();
    assert_eq!(json, "[1.0,2.0,3.0]");
    let back: Vec3 = serde_json::from_str("[4.0,5.0,6.0]").unwrap();
    assert_eq!(back, Vec3::new(4.0, 5.0, 6.0));
}

#[test]
fn matrices_serialize_row_major() {
    let json = serde_json::to_string(&Mat2::new([1.0, 2.0, 3.0, 4.0])).unwrap();
    assert_eq!(json, "[1.0,2.0,3.0,4.0]");
    let t = Mat4::translation(1.0, 2.0, 3.0);
    let back: Mat4 = serde_json::from_str(&serde_json::to_string(&t).unwrap()).unwrap();
    assert_eq!(back, t);
}

#[test]
fn wrong_length_is_rejected() {
    assert!(serde_json::from_str::<Vec3>("[1.0,2.0]").is_err());
}
