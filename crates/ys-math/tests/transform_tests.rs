// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use common::{approx_eq_slice, EPS};
use core::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};
use ys_math::{Mat4, Vec3, Vec4};

fn approx_eq3(a: Vec3, b: [f32; 3]) {
    approx_eq_slice(&a.to_array(), &b, EPS);
}

#[test]
fn translation_lives_in_last_column() {
    let t = Mat4::translation(1.0, 2.0, 3.0);
    assert_eq!([t.m03(), t.m13(), t.m23()], [1.0, 2.0, 3.0]);
    assert_eq!(t.upper_left(), ys_math::Mat3::identity());
    assert_eq!(t.row(3), Vec4::UNIT_W);
}

#[test]
fn single_axis_translations() {
    assert_eq!(Mat4::translation_x(2.0), Mat4::translation(2.0, 0.0, 0.0));
    assert_eq!(Mat4::translation_y(2.0), Mat4::translation(0.0, 2.0, 0.0));
    assert_eq!(Mat4::translation_z(2.0), Mat4::translation(0.0, 0.0, 2.0));
    let v = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(Mat4::translation_vec3(v), Mat4::translation(4.0, 5.0, 6.0));
    assert_eq!(
        Mat4::translation_vec4(v.extend(9.0)),
        Mat4::translation(4.0, 5.0, 6.0)
    );
}

#[test]
fn translation_moves_points_not_directions() {
    let t = Mat4::translation(5.0, -3.0, 2.0);
    let p = Vec3::new(2.0, 4.0, -1.0);
    assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
    assert_eq!(t.transform_direction(&p), p);
}

#[test]
fn rot_z_maps_x_to_y() {
    approx_eq3(
        Mat4::rotation_z(FRAC_PI_2).transform_direction(&Vec3::UNIT_X),
        [0.0, 1.0, 0.0],
    );
}

#[test]
fn rot_y_maps_z_to_x() {
    approx_eq3(
        Mat4::rotation_y(FRAC_PI_2).transform_direction(&Vec3::UNIT_Z),
        [1.0, 0.0, 0.0],
    );
}

#[test]
fn rot_x_maps_y_to_z() {
    approx_eq3(
        Mat4::rotation_x(FRAC_PI_2).transform_direction(&Vec3::UNIT_Y),
        [0.0, 0.0, 1.0],
    );
}

#[test]
fn rotations_are_orthonormal_with_unit_det() {
    for m in [
        Mat4::rotation_x(FRAC_PI_3),
        Mat4::rotation_y(-FRAC_PI_4),
        Mat4::rotation_z(1.234),
        Mat4::rotation(0.4, -0.9, 2.2),
    ] {
        assert!((m.det() - 1.0).abs() <= 1e-5, "det {}", m.det());
        let r = m.upper_left();
        approx_eq_slice(
            r.mul(&r.transpose()).as_array(),
            ys_math::Mat3::identity().as_array(),
            1e-5,
        );
        assert_eq!(m.row(3), Vec4::UNIT_W);
        assert_eq!(m.col(3), Vec4::UNIT_W);
    }
}

#[test]
fn combined_rotation_is_z_y_x_order() {
    let (xr, yr, zr) = (0.3, -0.7, 1.1);
    let expected = Mat4::rotation_z(zr)
        .mul(&Mat4::rotation_y(yr))
        .mul(&Mat4::rotation_x(xr));
    assert_eq!(Mat4::rotation(xr, yr, zr), expected);

    // X applied first: +Y -> +Z under X, then +Z -> +X under Y.
    let v = Mat4::rotation(FRAC_PI_2, FRAC_PI_2, 0.0).transform_direction(&Vec3::UNIT_Y);
    approx_eq3(v, [1.0, 0.0, 0.0]);
}

#[test]
fn rotation_inverse_is_transpose() {
    let m = Mat4::rotation(0.2, 0.5, -1.3);
    approx_eq_slice(m.inverse().as_array(), m.transpose().as_array(), 1e-5);
}

#[test]
fn scale_builders() {
    let s = Mat4::scale(2.0, 3.0, 4.0);
    assert_eq!(s.transform_point(&Vec3::ONE).to_array(), [2.0, 3.0, 4.0]);
    assert_eq!(s.m33(), 1.0);
    assert_eq!(s.det(), 24.0);
    assert_eq!(Mat4::scale_x(2.0), Mat4::scale(2.0, 1.0, 1.0));
    assert_eq!(Mat4::scale_y(3.0), Mat4::scale(1.0, 3.0, 1.0));
    assert_eq!(Mat4::scale_z(4.0), Mat4::scale(1.0, 1.0, 4.0));
    assert_eq!(
        Mat4::scale_x(2.0).mul(&Mat4::scale_y(3.0)).mul(&Mat4::scale_z(4.0)),
        s
    );
}

#[test]
fn trs_applies_scale_then_rotation_then_translation() {
    let m = Mat4::translation(10.0, 0.0, 0.0)
        .mul(&Mat4::rotation_z(FRAC_PI_2))
        .mul(&Mat4::scale(2.0, 2.0, 2.0));
    // (1,0,0) -> scale (2,0,0) -> rot (0,2,0) -> translate (10,2,0)
    approx_eq3(m.transform_point(&Vec3::UNIT_X), [10.0, 2.0, 0.0]);
    let back = m.inverse().transform_point(&Vec3::new(10.0, 2.0, 0.0));
    approx_eq3(back, [1.0, 0.0, 0.0]);
}

#[test]
fn transform_point_matches_homogeneous_product() {
    let m = Mat4::translation(1.0, 2.0, 3.0).mul(&Mat4::rotation_y(FRAC_PI_3));
    let p = Vec3::new(0.5, -1.5, 2.0);
    let h = m.mul_vec(&Vec4::from_point(p));
    approx_eq3(m.transform_point(&p), h.truncate().to_array());
    assert_eq!(h.w(), 1.0);
}
