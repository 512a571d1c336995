// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{MathError, Matrix3, Matrix4, Real64};

/// 3D vector over [`Real64`].
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Every arithmetic method returns a new vector; the `set*` family is the
///   only in-place API and reassigns each touched component explicitly.
/// * There is no `length`/`normalize`: square roots have no exact fixed-point
///   form, so [`Vector3::length_sq`] is terminal.
///
/// # Examples
/// ```
/// use zk3d_math::{Real64, Vector3};
/// let a = Vector3::from_f64s(1.0, 0.0, 0.0);
/// let b = Vector3::from_f64s(0.0, 1.0, 0.0);
/// assert_eq!(a.cross(&b), Vector3::from_f64s(0.0, 0.0, 1.0));
/// assert_eq!(a.dot(&b), Real64::ZERO);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    data: [Real64; 3],
}

impl Vector3 {
    /// Number of components.
    pub const ARITY: usize = 3;

    /// The zero vector.
    pub const ZERO: Self = Self::splat(Real64::ZERO);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(Real64::ONE, Real64::ZERO, Real64::ZERO);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(Real64::ZERO, Real64::ONE, Real64::ZERO);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(Real64::ZERO, Real64::ZERO, Real64::ONE);

    /// Creates a vector from components.
    pub const fn new(x: Real64, y: Real64, z: Real64) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector from decimals, rounding each to fixed point.
    pub fn from_f64s(x: f64, y: f64, z: f64) -> Self {
        Self::new(Real64::from_f64(x), Real64::from_f64(y), Real64::from_f64(z))
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: Real64) -> Self {
        Self::new(value, value, value)
    }

    /// Reads three components starting at `offset`.
    pub fn from_slice(values: &[Real64], offset: usize) -> Result<Self, MathError> {
        match values.get(offset..offset.saturating_add(Self::ARITY)) {
            Some(&[x, y, z]) => Ok(Self::new(x, y, z)),
            _ => Err(MathError::SliceTooShort {
                needed: Self::ARITY,
                offset,
                len: values.len(),
            }),
        }
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Real64; 3] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> Real64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> Real64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> Real64 {
        self.data[2]
    }

    /// Returns the component at `index` (0 = x, 1 = y, 2 = z).
    pub fn component(&self, index: usize) -> Result<Real64, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange {
                index,
                arity: Self::ARITY,
            })
    }

    /// Overwrites the component at `index`.
    pub fn set_component(&mut self, index: usize, value: Real64) -> Result<&mut Self, MathError> {
        let slot = self.data.get_mut(index).ok_or(MathError::IndexOutOfRange {
            index,
            arity: Self::ARITY,
        })?;
        *slot = value;
        Ok(self)
    }

    /// Overwrites all three components.
    pub fn set(&mut self, x: Real64, y: Real64, z: Real64) -> &mut Self {
        self.data = [x, y, z];
        self
    }

    /// Overwrites all three components with `value`.
    pub fn set_scalar(&mut self, value: Real64) -> &mut Self {
        self.data = [value; 3];
        self
    }

    /// Overwrites the x component.
    pub fn set_x(&mut self, x: Real64) -> &mut Self {
        self.data[0] = x;
        self
    }

    /// Overwrites the y component.
    pub fn set_y(&mut self, y: Real64) -> &mut Self {
        self.data[1] = y;
        self
    }

    /// Overwrites the z component.
    pub fn set_z(&mut self, z: Real64) -> &mut Self {
        self.data[2] = z;
        self
    }

    /// Copies every component of `other` into `self`.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.data = other.data;
        self
    }

    fn map(&self, f: impl Fn(Real64) -> Real64) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(Real64, Real64) -> Real64) -> Self {
        Self::new(
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
        )
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Adds `s` to every component.
    pub fn add_scalar(&self, s: Real64) -> Self {
        self.map(|a| a + s)
    }

    /// `self + v * s`.
    pub fn add_scaled_vector(&self, v: &Self, s: Real64) -> Self {
        self.zip_with(v, |a, b| a + b * s)
    }

    /// `a + b`.
    pub fn add_vectors(a: &Self, b: &Self) -> Self {
        a.add(b)
    }

    /// Componentwise difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Subtracts `s` from every component.
    pub fn sub_scalar(&self, s: Real64) -> Self {
        self.map(|a| a - s)
    }

    /// `a - b`.
    pub fn sub_vectors(a: &Self, b: &Self) -> Self {
        a.sub(b)
    }

    /// Componentwise product.
    pub fn multiply(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }

    /// Scales every component by `s`.
    pub fn multiply_scalar(&self, s: Real64) -> Self {
        self.map(|a| a * s)
    }

    /// Componentwise product of `a` and `b`.
    pub fn multiply_vectors(a: &Self, b: &Self) -> Self {
        a.multiply(b)
    }

    /// Componentwise quotient.
    pub fn divide(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a / b)
    }

    /// Divides by `s` via its reciprocal.
    pub fn divide_scalar(&self, s: Real64) -> Self {
        self.multiply_scalar(s.inv())
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        self.map(|a| -a)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> Real64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::cross_vectors(self, other)
    }

    /// Cross product `a × b`.
    pub fn cross_vectors(a: &Self, b: &Self) -> Self {
        let (ax, ay, az) = (a.x(), a.y(), a.z());
        let (bx, by, bz) = (b.x(), b.y(), b.z());
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared magnitude.
    pub fn length_sq(&self) -> Real64 {
        self.dot(self)
    }

    /// Sum of absolute components.
    pub fn manhattan_length(&self) -> Real64 {
        self.x().abs() + self.y().abs() + self.z().abs()
    }

    /// Squared distance to `other`.
    pub fn distance_to_squared(&self, other: &Self) -> Real64 {
        other.sub(self).length_sq()
    }

    /// `self + (target - self) * alpha`.
    pub fn lerp(&self, target: &Self, alpha: Real64) -> Self {
        self.zip_with(target, |a, b| a + (b - a) * alpha)
    }

    /// `v1 + (v2 - v1) * alpha`.
    pub fn lerp_vectors(v1: &Self, v2: &Self, alpha: Real64) -> Self {
        v2.sub(v1).multiply_scalar(alpha).add(v1)
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.zip_with(other, Ord::min)
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.zip_with(other, Ord::max)
    }

    /// Clamps each component into `[min, max]`.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        self.max(min).min(max)
    }

    /// Multiplies by a 3×3 matrix as a row vector (`[x y z] · m`).
    pub fn apply_matrix3(&self, m: &Matrix3) -> Self {
        let (x, y, z) = (self.x(), self.y(), self.z());
        Self::new(
            m.at(0, 0) * x + m.at(1, 0) * y + m.at(2, 0) * z,
            m.at(0, 1) * x + m.at(1, 1) * y + m.at(2, 1) * z,
            m.at(0, 2) * x + m.at(1, 2) * y + m.at(2, 2) * z,
        )
    }

    fn project(&self, m: &Matrix4) -> (Self, Real64) {
        let (x, y, z) = (self.x(), self.y(), self.z());
        let w = m.at(0, 3) * x + m.at(1, 3) * y + m.at(2, 3) * z + m.at(3, 3);
        let p = Self::new(
            m.at(0, 0) * x + m.at(1, 0) * y + m.at(2, 0) * z + m.at(3, 0),
            m.at(0, 1) * x + m.at(1, 1) * y + m.at(2, 1) * z + m.at(3, 1),
            m.at(0, 2) * x + m.at(1, 2) * y + m.at(2, 2) * z + m.at(3, 2),
        );
        (p, w)
    }

    /// Transforms a point (`[x y z 1] · m`) with a full homogeneous divide.
    ///
    /// `w = n14·x + n24·y + n34·z + n44`; each coordinate is divided by `w`.
    /// A zero `w` saturates like any other zero division; use
    /// [`Vector3::checked_apply_matrix4`] for projective input that may hit
    /// it.
    pub fn apply_matrix4(&self, m: &Matrix4) -> Self {
        let (p, w) = self.project(m);
        p.map(|c| c / w)
    }

    /// Like [`Vector3::apply_matrix4`] but returns `None` when `w == 0`.
    pub fn checked_apply_matrix4(&self, m: &Matrix4) -> Option<Self> {
        let (p, w) = self.project(m);
        if w.is_zero() {
            return None;
        }
        Some(p.map(|c| c / w))
    }
}

impl From<[Real64; 3]> for Vector3 {
    fn from(value: [Real64; 3]) -> Self {
        Self { data: value }
    }
}

impl core::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl core::ops::Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl core::ops::Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl core::ops::Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::Mul<Real64> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: Real64) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl core::ops::Mul<Vector3> for Real64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.multiply_scalar(self)
    }
}

impl core::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign<Real64> for Vector3 {
    fn mul_assign(&mut self, rhs: Real64) {
        *self = *self * rhs;
    }
}
