// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use zk3d_math::{Matrix4, Real64, Vector3};

use crate::{Plane, Sphere};

/// Axis-aligned box in fixed point.
///
/// Invariants:
/// - A non-empty box has `min <= max` on every axis.
/// - The empty box is `min = (MAX, MAX, MAX)`, `max = (MIN, MIN, MIN)`. It
///   contains and intersects nothing, and is the identity for
///   [`Box3::union`] and [`Box3::expand_by_point`].
/// - Every comparison is signed, so boxes may straddle the origin.
///
/// # Examples
/// ```
/// use zk3d_geom::Box3;
/// use zk3d_math::Vector3;
/// let b = Box3::new(Vector3::from_f64s(0.0, 0.0, 0.0), Vector3::from_f64s(1.0, 1.0, 1.0));
/// assert!(b.contains_point(&Vector3::from_f64s(0.5, 0.5, 0.5)));
/// let grown = b.expand_by_vector(&Vector3::from_f64s(0.5, 0.5, 0.5));
/// assert_eq!(grown.min(), Vector3::from_f64s(-0.5, -0.5, -0.5));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Box3 {
    min: Vector3,
    max: Vector3,
}

impl Default for Box3 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Box3 {
    /// Constructs a box from its corners. No ordering is enforced; a box with
    /// `min > max` on any axis reports [`Box3::is_empty`].
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// The canonical empty box.
    pub const fn empty() -> Self {
        Self {
            min: Vector3::splat(Real64::MAX),
            max: Vector3::splat(Real64::MIN),
        }
    }

    /// Builds a box from `[min_x, min_y, min_z, max_x, max_y, max_z]`.
    pub fn from_array(values: [f64; 6]) -> Self {
        let [ax, ay, az, bx, by, bz] = values;
        Self::new(Vector3::from_f64s(ax, ay, az), Vector3::from_f64s(bx, by, bz))
    }

    /// Builds a box centered at `center` with full extents `size`.
    pub fn from_center_and_size(center: &Vector3, size: &Vector3) -> Self {
        let half = size.multiply_scalar(Real64::from_raw(5_000));
        Self::new(center.sub(&half), center.add(&half))
    }

    /// Smallest box containing every point; empty for an empty slice.
    pub fn from_points(points: &[Vector3]) -> Self {
        points
            .iter()
            .fold(Self::empty(), |acc, p| acc.expand_by_point(p))
    }

    /// Minimum corner.
    pub const fn min(&self) -> Vector3 {
        self.min
    }

    /// Maximum corner.
    pub const fn max(&self) -> Vector3 {
        self.max
    }

    /// Overwrites both corners.
    pub fn set(&mut self, min: Vector3, max: Vector3) -> &mut Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Resets `self` to the empty box.
    pub fn make_empty(&mut self) -> &mut Self {
        *self = Self::empty();
        self
    }

    /// `true` when `max < min` on any axis.
    pub fn is_empty(&self) -> bool {
        let min = self.min.to_array();
        let max = self.max.to_array();
        (0..3).any(|i| max[i] < min[i])
    }

    /// Midpoint of the corners; zero for an empty box.
    pub fn center(&self) -> Vector3 {
        if self.is_empty() {
            return Vector3::ZERO;
        }
        self.min.add(&self.max).multiply_scalar(Real64::from_raw(5_000))
    }

    /// Extents along each axis; zero for an empty box.
    pub fn size(&self) -> Vector3 {
        if self.is_empty() {
            return Vector3::ZERO;
        }
        self.max.sub(&self.min)
    }

    /// Grows the box to include `point`.
    pub fn expand_by_point(&self, point: &Vector3) -> Self {
        Self::new(self.min.min(point), self.max.max(point))
    }

    /// Moves `min` down by `v` and `max` up by `v`.
    pub fn expand_by_vector(&self, v: &Vector3) -> Self {
        Self::new(self.min.sub(v), self.max.add(v))
    }

    /// Inflates the box by a uniform margin `s` in all directions.
    pub fn expand_by_scalar(&self, s: Real64) -> Self {
        self.expand_by_vector(&Vector3::splat(s))
    }

    /// Inclusive containment test; always `false` for an empty box.
    pub fn contains_point(&self, point: &Vector3) -> bool {
        let p = point.to_array();
        let min = self.min.to_array();
        let max = self.max.to_array();
        (0..3).all(|i| min[i] <= p[i] && p[i] <= max[i])
    }

    /// `true` when `other` lies entirely inside `self` (faces may touch).
    ///
    /// An empty `self` contains nothing; an empty `other` is contained in
    /// every non-empty box.
    pub fn contains_box(&self, other: &Self) -> bool {
        if self.is_empty() {
            return false;
        }
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        (0..3).all(|i| a_min[i] <= b_min[i] && b_max[i] <= a_max[i])
    }

    /// Inclusive overlap test; touching faces count as intersecting.
    ///
    /// Empty boxes, canonical or inverted, intersect nothing.
    pub fn intersects_box(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        (0..3).all(|i| b_max[i] >= a_min[i] && b_min[i] <= a_max[i])
    }

    /// Closest point inside the box to `point`.
    pub fn clamp_point(&self, point: &Vector3) -> Vector3 {
        point.clamp(&self.min, &self.max)
    }

    /// Squared distance from `point` to the nearest point of the box; zero
    /// when inside.
    pub fn distance_to_point_squared(&self, point: &Vector3) -> Real64 {
        self.clamp_point(point).distance_to_squared(point)
    }

    /// `true` when the sphere touches or overlaps the box.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        if self.is_empty() || sphere.is_empty() {
            return false;
        }
        let r = sphere.radius();
        self.distance_to_point_squared(&sphere.center()) <= r * r
    }

    /// `true` when the plane passes through the box.
    ///
    /// Projects the box onto the plane normal and checks that `-constant`
    /// falls inside the projected interval.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        if self.is_empty() {
            return false;
        }
        let n = plane.normal().to_array();
        let lo = self.min.to_array();
        let hi = self.max.to_array();
        let mut near = Real64::ZERO;
        let mut far = Real64::ZERO;
        for ((n, lo), hi) in n.into_iter().zip(lo).zip(hi) {
            if n.is_positive() {
                near += n * lo;
                far += n * hi;
            } else {
                near += n * hi;
                far += n * lo;
            }
        }
        let target = -plane.constant();
        near <= target && far >= target
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(&other.min), self.max.max(&other.max))
    }

    /// Overlap of both boxes; the canonical empty box when they are disjoint.
    pub fn intersect(&self, other: &Self) -> Self {
        let out = Self::new(self.min.max(&other.min), self.max.min(&other.max));
        if out.is_empty() {
            return Self::empty();
        }
        out
    }

    /// Shifts both corners by `offset`. The empty box is returned unchanged.
    pub fn translate(&self, offset: &Vector3) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self::new(self.min.add(offset), self.max.add(offset))
    }

    /// Bounds of the box after transforming its eight corners by `m`.
    ///
    /// The empty box is returned unchanged.
    pub fn apply_matrix4(&self, m: &Matrix4) -> Self {
        if self.is_empty() {
            return *self;
        }
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        let corners = [
            Vector3::new(minx, miny, minz),
            Vector3::new(minx, miny, maxz),
            Vector3::new(minx, maxy, minz),
            Vector3::new(minx, maxy, maxz),
            Vector3::new(maxx, miny, minz),
            Vector3::new(maxx, miny, maxz),
            Vector3::new(maxx, maxy, minz),
            Vector3::new(maxx, maxy, maxz),
        ];
        corners
            .iter()
            .fold(Self::empty(), |acc, c| acc.expand_by_point(&c.apply_matrix4(m)))
    }
}
