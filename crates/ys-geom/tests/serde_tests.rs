// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used)]
use ys_geom::{Ray2, Ray3};
use ys_math::{Point2, Point3, Vec2, Vec3};

#[test]
fn ray_serializes_origin_and_dir_as_flat_arrays() {
    let ray = Ray3::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
    let json = serde_json::to_string(&ray).unwrap();
    assert_eq!(json, r#"{"origin":[1.0,2.0,3.0],"dir":[0.0,0.0,-1.0]}"#);
    let back: Ray3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ray);
}

#[test]
fn ray_round_trips_through_json() {
    let ray = Ray2::new(Point2::new(-0.5, 4.0), Vec2::new(3.0, 4.0));
    let back: Ray2 = serde_json::from_str(&serde_json::to_string(&ray).unwrap()).unwrap();
    assert_eq!(back, ray);
}

#[test]
fn ray_missing_dir_is_rejected() {
    assert!(serde_json::from_str::<Ray3>(r#"{"origin":[1.0,2.0,3.0]}"#).is_err());
}
