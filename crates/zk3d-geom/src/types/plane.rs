// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;
use zk3d_math::{Real64, Vector3};

use crate::{Box3, Sphere};

/// Plane `normal · p + constant = 0`.
///
/// `normal` is expected to be unit length. Nothing enforces this (there is no
/// fixed-point normalize), and distances are only true distances when it
/// holds.
///
/// # Examples
/// ```
/// use zk3d_geom::Plane;
/// use zk3d_math::{Real64, Vector3};
/// let ground = Plane::new(Vector3::UNIT_Y, Real64::from_int(-5));
/// let d = ground.distance_to_point(&Vector3::from_f64s(1.0, 10.0, 2.0));
/// assert_eq!(d, Real64::from_int(5));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vector3,
    constant: Real64,
}

impl Default for Plane {
    /// The `x = 0` plane.
    fn default() -> Self {
        Self::new(Vector3::UNIT_X, Real64::ZERO)
    }
}

impl Plane {
    /// Constructs a plane from its normal and constant.
    pub const fn new(normal: Vector3, constant: Real64) -> Self {
        Self { normal, constant }
    }

    /// Constructs a plane from `(x, y, z)` normal components and constant
    /// `w`.
    pub const fn from_components(x: Real64, y: Real64, z: Real64, w: Real64) -> Self {
        Self::new(Vector3::new(x, y, z), w)
    }

    /// Plane through `point` with the given normal (`constant = -normal ·
    /// point`).
    pub fn from_normal_and_coplanar_point(normal: &Vector3, point: &Vector3) -> Self {
        Self::new(*normal, -normal.dot(point))
    }

    /// Plane normal.
    pub const fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Signed offset from the origin along `-normal`.
    pub const fn constant(&self) -> Real64 {
        self.constant
    }

    /// Overwrites normal and constant.
    pub fn set(&mut self, normal: Vector3, constant: Real64) -> &mut Self {
        self.normal = normal;
        self.constant = constant;
        self
    }

    /// Overwrites normal components and constant.
    pub fn set_components(&mut self, x: Real64, y: Real64, z: Real64, w: Real64) -> &mut Self {
        *self = Self::from_components(x, y, z, w);
        self
    }

    /// `[normal.x, normal.y, normal.z, constant]`.
    pub const fn to_array(&self) -> [Real64; 4] {
        let [x, y, z] = self.normal.to_array();
        [x, y, z, self.constant]
    }

    /// Same plane with the opposite orientation.
    pub fn negate(&self) -> Self {
        Self::new(self.normal.negate(), -self.constant)
    }

    /// Signed distance from `point`; positive on the side the normal points
    /// to.
    pub fn distance_to_point(&self, point: &Vector3) -> Real64 {
        self.normal.dot(point) + self.constant
    }

    /// Signed distance from the sphere surface (center distance minus
    /// radius).
    pub fn distance_to_sphere(&self, sphere: &Sphere) -> Real64 {
        self.distance_to_point(&sphere.center()) - sphere.radius()
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point(&self, point: &Vector3) -> Vector3 {
        self.normal
            .multiply_scalar(-self.distance_to_point(point))
            .add(point)
    }

    /// `true` when the endpoints lie on different sides.
    ///
    /// Sides are split by [`Real64::is_positive`], so an endpoint exactly on
    /// the plane counts as the negative side.
    pub fn intersects_line(&self, start: &Vector3, end: &Vector3) -> bool {
        let start_side = self.distance_to_point(start).is_positive();
        let end_side = self.distance_to_point(end).is_positive();
        start_side != end_side
    }

    /// Point where the line through `start` and `end` meets the plane.
    ///
    /// Solves `t = d(start) / (d(start) - d(end))` and returns
    /// `start + (end - start) * t`. `t` is not clamped to the segment. Returns
    /// `None` when the line is parallel to the plane (`d(start) == d(end)`).
    pub fn intersect_line(&self, start: &Vector3, end: &Vector3) -> Option<Vector3> {
        let start_distance = self.distance_to_point(start);
        let end_distance = self.distance_to_point(end);
        let Some(t) = start_distance.checked_div(start_distance - end_distance) else {
            debug!(
                distance = %start_distance,
                "segment is parallel to plane; no intersection point"
            );
            return None;
        };
        Some(end.sub(start).multiply_scalar(t).add(start))
    }

    /// `true` when the sphere touches the plane; see
    /// [`Sphere::intersects_plane`].
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        sphere.intersects_plane(self)
    }

    /// `true` when the plane passes through the box; see
    /// [`Box3::intersects_plane`].
    pub fn intersects_box(&self, aabb: &Box3) -> bool {
        aabb.intersects_plane(self)
    }

    /// The point on the plane closest to the origin.
    pub fn coplanar_point(&self) -> Vector3 {
        self.normal.multiply_scalar(-self.constant)
    }

    /// Plane moved by `offset`.
    pub fn translate(&self, offset: &Vector3) -> Self {
        Self::new(self.normal, self.constant - self.normal.dot(offset))
    }
}
