// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use zk3d_math::{MathError, Matrix3, Matrix4, Real64, Vector3};

fn r(value: f64) -> Real64 {
    Real64::from_f64(value)
}

fn v3(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::from_f64s(x, y, z)
}

fn translation(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::make_translation(r(x), r(y), r(z))
}

fn scale(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::make_scale(r(x), r(y), r(z))
}

#[test]
fn identity_is_default_and_neutral() {
    let m = translation(1.0, 2.0, 3.0).multiply(&scale(2.0, 4.0, 5.0));
    assert_eq!(Matrix4::default(), Matrix4::identity());
    assert_eq!(m * Matrix4::identity(), m);
    assert_eq!(Matrix4::identity() * m, m);
    assert_eq!(Matrix4::identity().determinant(), Real64::ONE);
}

#[test]
fn translation_lives_in_the_last_row() {
    let t = translation(1.0, 2.0, 3.0);
    assert_eq!(t.entry(3, 0).unwrap(), r(1.0));
    assert_eq!(t.entry(3, 1).unwrap(), r(2.0));
    assert_eq!(t.entry(3, 2).unwrap(), r(3.0));
    assert_eq!(t.entry(0, 3).unwrap(), Real64::ZERO);
    assert_eq!(t.position(), v3(1.0, 2.0, 3.0));
}

#[test]
fn entry_and_set_at_are_range_checked() {
    let mut m = Matrix4::identity();
    assert_eq!(m.entry(3, 3), Ok(Real64::ONE));
    assert_eq!(
        m.entry(4, 0),
        Err(MathError::IndexOutOfRange { index: 4, arity: 4 })
    );
    assert_eq!(
        m.entry(0, 9),
        Err(MathError::IndexOutOfRange { index: 9, arity: 4 })
    );
    m.set_at(0, 3, r(0.5)).expect("in range");
    assert_eq!(m.entry(0, 3).unwrap(), r(0.5));
    assert!(m.set_at(4, 4, Real64::ONE).is_err());
}

#[test]
fn position_accessors() {
    let mut m = scale(2.0, 2.0, 2.0);
    m.set_position(&v3(-1.0, 0.5, 7.0));
    assert_eq!(m.position(), v3(-1.0, 0.5, 7.0));
    assert_eq!(m.entry(0, 0).unwrap(), r(2.0));

    let mut other = Matrix4::identity();
    other.copy_position(&m);
    assert_eq!(other, translation(-1.0, 0.5, 7.0));
}

#[test]
fn scale_determinant_and_inverse_are_exact() {
    let s = scale(2.0, 4.0, 5.0);
    assert_eq!(s.determinant(), r(40.0));
    assert_eq!(s.invert(), scale(0.5, 0.25, 0.2));
    assert_eq!(scale(2.0, 3.0, 4.0).determinant(), r(24.0));
}

#[test]
fn translation_inverts_to_opposite_translation() {
    let t = translation(1.0, 2.0, 3.0);
    assert_eq!(t.determinant(), Real64::ONE);
    assert_eq!(t.invert(), translation(-1.0, -2.0, -3.0));
    assert_eq!(t.multiply(&t.invert()), Matrix4::identity());
}

#[test]
fn scale_then_translate_inverts_in_reverse_order() {
    let m = scale(2.0, 4.0, 5.0).multiply(&translation(1.0, 2.0, 3.0));
    let expected = Matrix4::from_f64s([
        0.5, 0.0, 0.0, 0.0, //
        0.0, 0.25, 0.0, 0.0, //
        0.0, 0.0, 0.2, 0.0, //
        -0.5, -0.5, -0.6, 1.0,
    ]);
    assert_eq!(m.checked_invert(), Some(expected));
}

#[test]
fn shear_inverts_exactly() {
    let shear = Matrix4::make_shear(r(0.5), Real64::ZERO, Real64::ZERO);
    assert_eq!(shear.entry(1, 0).unwrap(), r(0.5));
    assert_eq!(shear.entry(2, 0).unwrap(), r(0.5));
    assert_eq!(shear.determinant(), Real64::ONE);
    assert_eq!(
        shear.invert(),
        Matrix4::make_shear(r(-0.5), Real64::ZERO, Real64::ZERO)
    );
}

#[test]
fn singular_matrix_falls_back_to_zero() {
    let singular = Matrix4::from_f64s([
        1.0, 2.0, 3.0, 4.0, //
        2.0, 4.0, 6.0, 8.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    assert_eq!(singular.determinant(), Real64::ZERO);
    assert_eq!(singular.checked_invert(), None);
    assert_eq!(singular.invert(), Matrix4::zero());
    assert_eq!(Matrix4::zero().invert(), Matrix4::zero());
}

#[test]
fn singular_fallbacks_differ_between_sizes() {
    assert_eq!(Matrix3::zero().invert(), Matrix3::identity());
    assert_eq!(Matrix4::zero().invert(), Matrix4::zero());
}

#[test]
fn scale_premultiplies_rows() {
    let t = translation(1.0, 2.0, 3.0);
    let factors = v3(2.0, 3.0, 4.0);
    assert_eq!(t.scale(&factors), scale(2.0, 3.0, 4.0).multiply(&t));
    // The translation row is untouched.
    assert_eq!(t.scale(&factors).position(), t.position());
}

#[test]
fn transpose_moves_translation_to_last_column() {
    let t = translation(1.0, 2.0, 3.0).transpose();
    assert_eq!(t.entry(0, 3).unwrap(), r(1.0));
    assert_eq!(t.entry(2, 3).unwrap(), r(3.0));
    assert_eq!(t.position(), Vector3::ZERO);
    assert_eq!(t.transpose(), translation(1.0, 2.0, 3.0));
}

#[test]
fn multiplication_composes_left_to_right() {
    let a = translation(1.0, 0.0, 0.0);
    let b = scale(2.0, 2.0, 2.0);
    let c = translation(0.0, -1.0, 0.0);
    assert_eq!(a.multiply(&b).multiply(&c), a.multiply(&b.multiply(&c)));
    assert_eq!(c.premultiply(&a.multiply(&b)), (a * b) * c);
    let mut acc = a;
    acc *= b;
    assert_eq!(acc, Matrix4::multiply_matrices(&a, &b));
    assert_eq!(acc.position(), v3(2.0, 0.0, 0.0));
}

#[test]
fn multiply_scalar_scales_every_entry() {
    let m = Matrix4::identity().multiply_scalar(r(3.0));
    assert!(m.to_array().iter().enumerate().all(|(i, v)| {
        if i % 5 == 0 {
            *v == r(3.0)
        } else {
            v.is_zero()
        }
    }));
}

#[test]
fn basis_round_trip_and_matrix3_embedding() {
    let x = v3(0.0, 0.0, -1.0);
    let y = v3(0.0, 1.0, 0.0);
    let z = v3(1.0, 0.0, 0.0);
    let m = Matrix4::make_basis(&x, &y, &z);
    assert_eq!(m.extract_basis(), (x, y, z));
    assert_eq!(m.position(), Vector3::ZERO);
    assert_eq!(m.entry(3, 3).unwrap(), Real64::ONE);
    assert_eq!(Matrix3::from_matrix4(&m), Matrix3::make_basis(&x, &y, &z));
    assert_eq!(Matrix4::from_matrix3(&Matrix3::identity()), Matrix4::identity());
}

#[test]
fn array_conversions_preserve_order() {
    let values: [Real64; 16] =
        core::array::from_fn(|i| Real64::from_int(i64::try_from(i).unwrap()));
    let m = Matrix4::from(values);
    assert_eq!(m, Matrix4::from_elements(values));
    assert_eq!(m.to_array(), values);
    assert_eq!(m.entry(2, 1).unwrap(), Real64::from_int(9));
}
