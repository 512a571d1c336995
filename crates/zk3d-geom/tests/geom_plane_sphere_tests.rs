// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Integration tests for `Plane` and `Sphere`.

use zk3d_geom::{Box3, Plane, Sphere};
use zk3d_math::{Real64, Vector3};

fn r(value: f64) -> Real64 {
    Real64::from_f64(value)
}

fn v3(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::from_f64s(x, y, z)
}

/// The plane `y = 5`.
fn ground() -> Plane {
    Plane::new(Vector3::UNIT_Y, r(-5.0))
}

#[test]
fn distance_to_point_is_signed() {
    let plane = ground();
    assert_eq!(plane.distance_to_point(&v3(1.0, 10.0, 2.0)), r(5.0));
    assert_eq!(plane.distance_to_point(&v3(0.0, 2.0, 0.0)), r(-3.0));
    assert_eq!(plane.negate().distance_to_point(&v3(1.0, 10.0, 2.0)), r(-5.0));
}

#[test]
fn constructors_agree() {
    let through = Plane::from_normal_and_coplanar_point(&Vector3::UNIT_Y, &v3(3.0, 5.0, -2.0));
    assert_eq!(through, ground());
    let parts = Plane::from_components(Real64::ZERO, Real64::ONE, Real64::ZERO, r(-5.0));
    assert_eq!(parts, ground());
    assert_eq!(ground().to_array(), [Real64::ZERO, Real64::ONE, Real64::ZERO, r(-5.0)]);
    assert_eq!(ground().normal(), Vector3::UNIT_Y);
    assert_eq!(ground().constant(), r(-5.0));
}

#[test]
fn setters_overwrite_both_fields() {
    let mut plane = Plane::default();
    assert_eq!(plane.normal(), Vector3::UNIT_X);
    assert_eq!(plane.constant(), Real64::ZERO);
    plane.set(Vector3::UNIT_Y, r(-5.0));
    assert_eq!(plane, ground());
    plane.set_components(Real64::ZERO, Real64::ZERO, Real64::ONE, r(2.0));
    assert_eq!(plane, Plane::new(Vector3::UNIT_Z, r(2.0)));
}

#[test]
fn projection_and_coplanar_point_land_on_the_plane() {
    let plane = ground();
    let projected = plane.project_point(&v3(1.0, 10.0, 2.0));
    assert_eq!(projected, v3(1.0, 5.0, 2.0));
    assert_eq!(plane.distance_to_point(&projected), Real64::ZERO);
    assert_eq!(plane.coplanar_point(), v3(0.0, 5.0, 0.0));
}

#[test]
fn translate_shifts_the_constant() {
    let moved = ground().translate(&v3(4.0, 2.0, 0.0));
    assert_eq!(moved, Plane::new(Vector3::UNIT_Y, r(-7.0)));
    assert_eq!(moved.distance_to_point(&v3(0.0, 7.0, 0.0)), Real64::ZERO);
}

#[test]
fn intersects_line_checks_sides() {
    let plane = ground();
    assert!(plane.intersects_line(&Vector3::ZERO, &v3(0.0, 10.0, 0.0)));
    assert!(!plane.intersects_line(&v3(0.0, 6.0, 0.0), &v3(0.0, 10.0, 0.0)));
    // A point on the plane sits on the non-positive side.
    assert!(plane.intersects_line(&v3(0.0, 5.0, 0.0), &v3(0.0, 10.0, 0.0)));
    assert!(!plane.intersects_line(&v3(0.0, 5.0, 0.0), &Vector3::ZERO));
}

#[test]
fn intersect_line_solves_for_the_crossing() {
    let plane = ground();
    assert_eq!(
        plane.intersect_line(&Vector3::ZERO, &v3(0.0, 10.0, 2.0)),
        Some(v3(0.0, 5.0, 1.0))
    );
    // The parameter is not clamped to the segment.
    assert_eq!(
        plane.intersect_line(&Vector3::ZERO, &v3(0.0, 2.0, 0.0)),
        Some(v3(0.0, 5.0, 0.0))
    );
}

#[test]
fn intersect_line_parallel_to_plane_is_none() {
    let plane = ground();
    assert_eq!(plane.intersect_line(&Vector3::ZERO, &v3(1.0, 0.0, 0.0)), None);
    assert_eq!(plane.intersect_line(&v3(0.0, 5.0, 0.0), &v3(3.0, 5.0, 0.0)), None);
}

#[test]
fn sphere_distance_and_overlap() {
    let plane = ground();
    let above = Sphere::from_f64s(0.0, 10.0, 0.0, 2.0);
    assert_eq!(plane.distance_to_sphere(&above), r(3.0));
    assert!(!plane.intersects_sphere(&above));
    assert!(plane.intersects_sphere(&Sphere::from_f64s(0.0, 7.0, 0.0, 2.0)));
    assert!(!plane.intersects_sphere(&Sphere::from_f64s(0.0, 7.0, 0.0, 1.9999)));
    // Either side of the plane counts.
    assert!(plane.intersects_sphere(&Sphere::from_f64s(0.0, 3.0, 0.0, 2.0)));
    assert!(!plane.intersects_sphere(&Sphere::empty()));
}

#[test]
fn plane_box_test_delegates() {
    let plane = ground();
    let straddling = Box3::from_array([0.0, 4.0, 0.0, 1.0, 6.0, 1.0]);
    let below = Box3::from_array([0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    assert!(plane.intersects_box(&straddling));
    assert!(!plane.intersects_box(&below));
    assert_eq!(plane.intersects_box(&below), below.intersects_plane(&plane));
}

#[test]
fn sphere_contains_point_inclusively() {
    let sphere = Sphere::new(v3(1.0, 2.0, 3.0), r(5.0));
    assert!(sphere.contains_point(&v3(3.0, 3.0, 3.0)));
    assert!(sphere.contains_point(&v3(6.0, 2.0, 3.0)));
    assert!(!sphere.contains_point(&v3(6.0001, 2.0, 3.0)));
}

#[test]
fn empty_sphere_contains_and_intersects_nothing() {
    let empty = Sphere::default();
    assert_eq!(empty, Sphere::empty());
    assert!(empty.is_empty());
    assert_eq!(empty.radius(), Real64::from_int(-1));
    assert!(!empty.contains_point(&Vector3::ZERO));
    assert!(!empty.intersects_sphere(&Sphere::from_f64s(0.0, 0.0, 0.0, 10.0)));
    assert!(!Sphere::from_f64s(0.0, 0.0, 0.0, 10.0).intersects_sphere(&empty));
    assert!(!empty.intersects_box(&Box3::from_array([-1.0, -1.0, -1.0, 1.0, 1.0, 1.0])));
}

#[test]
fn zero_radius_sphere_is_a_point() {
    let point = Sphere::from_f64s(1.0, 1.0, 1.0, 0.0);
    assert!(!point.is_empty());
    assert!(point.contains_point(&v3(1.0, 1.0, 1.0)));
    assert!(!point.contains_point(&v3(1.0, 1.0, 1.01)));
}

#[test]
fn touching_spheres_intersect() {
    let a = Sphere::from_f64s(0.0, 0.0, 0.0, 1.0);
    assert!(a.intersects_sphere(&Sphere::from_f64s(2.0, 0.0, 0.0, 1.0)));
    assert!(!a.intersects_sphere(&Sphere::from_f64s(2.0001, 0.0, 0.0, 1.0)));
}

#[test]
fn sphere_plane_and_box_predicates() {
    let sphere = Sphere::from_f64s(0.0, 6.0, 0.0, 1.0);
    assert!(sphere.intersects_plane(&ground()));
    assert!(!sphere.translate(&v3(0.0, 0.5, 0.0)).intersects_plane(&ground()));
    let b = Box3::from_array([1.0, 5.0, -1.0, 2.0, 7.0, 1.0]);
    assert!(sphere.intersects_box(&b));
    assert!(!sphere.translate(&v3(-1.0, 0.0, 0.0)).intersects_box(&b));
}

#[test]
fn sphere_setters() {
    let mut sphere = Sphere::empty();
    sphere.set(v3(1.0, 0.0, 0.0), r(2.0));
    assert_eq!(sphere.center(), v3(1.0, 0.0, 0.0));
    assert_eq!(sphere.radius(), r(2.0));
    sphere.make_empty();
    assert!(sphere.is_empty());
}
