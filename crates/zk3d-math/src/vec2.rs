// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{MathError, Matrix3, Real64};

/// 2D vector over [`Real64`].
///
/// Pure methods (`add`, `lerp`, …) return a new vector and leave the receiver
/// untouched. The `set*` family mutates in place and returns `&mut Self` so
/// calls can be chained.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    data: [Real64; 2],
}

impl Vector2 {
    /// Number of components.
    pub const ARITY: usize = 2;

    /// The zero vector.
    pub const ZERO: Self = Self::new(Real64::ZERO, Real64::ZERO);

    /// Creates a vector from components.
    pub const fn new(x: Real64, y: Real64) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector from decimals, rounding each to fixed point.
    pub fn from_f64s(x: f64, y: f64) -> Self {
        Self::new(Real64::from_f64(x), Real64::from_f64(y))
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: Real64) -> Self {
        Self::new(value, value)
    }

    /// Reads two components starting at `offset`.
    pub fn from_slice(values: &[Real64], offset: usize) -> Result<Self, MathError> {
        match values.get(offset..offset.saturating_add(Self::ARITY)) {
            Some(&[x, y]) => Ok(Self::new(x, y)),
            _ => Err(MathError::SliceTooShort {
                needed: Self::ARITY,
                offset,
                len: values.len(),
            }),
        }
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Real64; 2] {
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

    /// Returns the component at `index` (0 = x, 1 = y).
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

    /// Overwrites both components.
    pub fn set(&mut self, x: Real64, y: Real64) -> &mut Self {
        self.data = [x, y];
        self
    }

    /// Overwrites both components with `value`.
    pub fn set_scalar(&mut self, value: Real64) -> &mut Self {
        self.data = [value; 2];
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

    /// Copies every component of `other` into `self`.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.data = other.data;
        self
    }

    fn map(&self, f: impl Fn(Real64) -> Real64) -> Self {
        Self::new(f(self.x()), f(self.y()))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(Real64, Real64) -> Real64) -> Self {
        Self::new(f(self.x(), other.x()), f(self.y(), other.y()))
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

    /// Divides by `s` via its reciprocal, so the result carries the error of
    /// both `inv` and `mul`.
    pub fn divide_scalar(&self, s: Real64) -> Self {
        self.multiply_scalar(s.inv())
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        self.map(|a| -a)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> Real64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Pseudo-cross pair `(ay·bx − ax·by, ax·by − ay·bx)`.
    ///
    /// This is not the scalar 2D cross product; both components carry the
    /// same magnitude with opposite sign.
    pub fn cross(&self, other: &Self) -> Self {
        Self::cross_vectors(self, other)
    }

    /// Pseudo-cross pair of `a` and `b`; see [`Vector2::cross`].
    pub fn cross_vectors(a: &Self, b: &Self) -> Self {
        let (ax, ay) = (a.x(), a.y());
        let (bx, by) = (b.x(), b.y());
        Self::new(ay * bx - ax * by, ax * by - ay * bx)
    }

    /// Squared length. There is no `length`: square roots are not available
    /// in fixed point.
    pub fn length_sq(&self) -> Real64 {
        self.dot(self)
    }

    /// Sum of absolute components.
    pub fn manhattan_length(&self) -> Real64 {
        self.x().abs() + self.y().abs()
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

    /// Applies a 3×3 affine transform (`[x y 1] · m`).
    pub fn apply_matrix3(&self, m: &Matrix3) -> Self {
        let (x, y) = (self.x(), self.y());
        Self::new(
            m.at(0, 0) * x + m.at(1, 0) * y + m.at(2, 0),
            m.at(0, 1) * x + m.at(1, 1) * y + m.at(2, 1),
        )
    }
}

impl From<[Real64; 2]> for Vector2 {
    fn from(value: [Real64; 2]) -> Self {
        Self { data: value }
    }
}

impl core::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vector2({}, {})", self.x(), self.y())
    }
}

impl core::ops::Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl core::ops::Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl core::ops::Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::Mul<Real64> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: Real64) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl core::ops::Mul<Vector2> for Real64 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs.multiply_scalar(self)
    }
}

impl core::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign<Real64> for Vector2 {
    fn mul_assign(&mut self, rhs: Real64) {
        *self = *self * rhs;
    }
}
