// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use zk3d_math::{Real64, Vector3};

use crate::{Box3, Plane};

/// Sphere with a center and radius.
///
/// A negative radius marks the empty sphere. Empty spheres contain and
/// intersect nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    center: Vector3,
    radius: Real64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self::empty()
    }
}

impl Sphere {
    /// Constructs a sphere.
    pub const fn new(center: Vector3, radius: Real64) -> Self {
        Self { center, radius }
    }

    /// Constructs a sphere from decimals, rounding each to fixed point.
    pub fn from_f64s(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self::new(Vector3::from_f64s(x, y, z), Real64::from_f64(radius))
    }

    /// The canonical empty sphere: origin center, radius `-1`.
    pub const fn empty() -> Self {
        Self::new(Vector3::ZERO, Real64::from_int(-1))
    }

    /// Center point.
    pub const fn center(&self) -> Vector3 {
        self.center
    }

    /// Radius; negative when empty.
    pub const fn radius(&self) -> Real64 {
        self.radius
    }

    /// Overwrites center and radius.
    pub fn set(&mut self, center: Vector3, radius: Real64) -> &mut Self {
        self.center = center;
        self.radius = radius;
        self
    }

    /// Resets `self` to the empty sphere.
    pub fn make_empty(&mut self) -> &mut Self {
        *self = Self::empty();
        self
    }

    /// `true` when `radius < 0`.
    pub const fn is_empty(&self) -> bool {
        self.radius.is_negative()
    }

    /// Inclusive containment: `|point - center|² <= radius²`.
    pub fn contains_point(&self, point: &Vector3) -> bool {
        if self.is_empty() {
            return false;
        }
        point.distance_to_squared(&self.center) <= self.radius * self.radius
    }

    /// `true` when the spheres touch or overlap.
    pub fn intersects_sphere(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let reach = self.radius + other.radius;
        other.center.distance_to_squared(&self.center) <= reach * reach
    }

    /// `true` when `|plane distance of center| <= radius`.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        if self.is_empty() {
            return false;
        }
        plane
            .distance_to_point(&self.center)
            .magnitude_le(self.radius)
    }

    /// `true` when the sphere touches or overlaps the box.
    pub fn intersects_box(&self, aabb: &Box3) -> bool {
        aabb.intersects_sphere(self)
    }

    /// Sphere moved by `offset`.
    pub fn translate(&self, offset: &Vector3) -> Self {
        Self::new(self.center.add(offset), self.radius)
    }
}
