// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::warn;

use crate::{MathError, Matrix4, Real64, Vector3};

/// Row‑major 3×3 matrix over [`Real64`].
///
/// - Entry `n{row}{col}` (one-based) lives at `at(row - 1, col - 1)`;
///   [`Matrix3::to_array`] yields `n11, n12, n13, n21, …`.
/// - Points are row vectors multiplied on the left, so 2D translation sits in
///   the last row (`n31`, `n32`). See [`crate::Vector2::apply_matrix3`].
/// - Every product truncates; compare results with a tolerance.
///
/// # Examples
/// ```
/// use zk3d_math::{Matrix3, Real64};
/// let m = Matrix3::make_scale(Real64::from_int(2), Real64::from_int(4));
/// assert_eq!(m.determinant(), Real64::from_int(8));
/// assert_eq!(m.multiply(&Matrix3::identity()), m);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3 {
    data: [Real64; 9],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        const O: Real64 = Real64::ZERO;
        const I: Real64 = Real64::ONE;
        Self {
            data: [
                I, O, O, // row 1
                O, I, O, // row 2
                O, O, I, // row 3
            ],
        }
    }

    /// Returns the all-zero matrix.
    pub const fn zero() -> Self {
        Self {
            data: [Real64::ZERO; 9],
        }
    }

    /// Creates a matrix from row-major entries.
    pub const fn from_elements(data: [Real64; 9]) -> Self {
        Self { data }
    }

    /// Creates a matrix from row-major decimals, rounding each entry.
    pub fn from_f64s(values: [f64; 9]) -> Self {
        Self {
            data: values.map(Real64::from_f64),
        }
    }

    /// Returns the entries in row-major order.
    pub const fn to_array(self) -> [Real64; 9] {
        self.data
    }

    /// Entry at zero-based `row`, `col`; callers pass in-range indices.
    pub(crate) fn at(&self, row: usize, col: usize) -> Real64 {
        assert!(row < 3 && col < 3, "Matrix3 index out of range: ({row}, {col})");
        self.data[row * 3 + col]
    }

    /// Range-checked entry access.
    pub fn entry(&self, row: usize, col: usize) -> Result<Real64, MathError> {
        Self::flat_index(row, col).map(|i| self.data[i])
    }

    /// Overwrites the entry at zero-based `row`, `col`.
    pub fn set_at(&mut self, row: usize, col: usize, value: Real64) -> Result<&mut Self, MathError> {
        let i = Self::flat_index(row, col)?;
        self.data[i] = value;
        Ok(self)
    }

    fn flat_index(row: usize, col: usize) -> Result<usize, MathError> {
        if row >= 3 {
            return Err(MathError::IndexOutOfRange {
                index: row,
                arity: 3,
            });
        }
        if col >= 3 {
            return Err(MathError::IndexOutOfRange {
                index: col,
                arity: 3,
            });
        }
        Ok(row * 3 + col)
    }

    /// Upper-left 3×3 block of a 4×4 matrix.
    pub fn from_matrix4(m: &Matrix4) -> Self {
        let mut data = [Real64::ZERO; 9];
        for row in 0..3 {
            for col in 0..3 {
                data[row * 3 + col] = m.at(row, col);
            }
        }
        Self { data }
    }

    /// Standard row × column product `a · b`.
    pub fn multiply_matrices(a: &Self, b: &Self) -> Self {
        let mut out = [Real64::ZERO; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = Real64::ZERO;
                for k in 0..3 {
                    sum += a.at(row, k) * b.at(k, col);
                }
                out[row * 3 + col] = sum;
            }
        }
        Self { data: out }
    }

    /// `self · rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::multiply_matrices(self, rhs)
    }

    /// `lhs · self`.
    pub fn premultiply(&self, lhs: &Self) -> Self {
        Self::multiply_matrices(lhs, self)
    }

    /// Scales every entry by `s`.
    pub fn multiply_scalar(&self, s: Real64) -> Self {
        Self {
            data: self.data.map(|v| v * s),
        }
    }

    /// Six-term rule. Product order is fixed because truncation makes it
    /// observable.
    pub fn determinant(&self) -> Real64 {
        let [a, b, c, d, e, f, g, h, i] = self.data;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Inverse via the adjugate, or `None` when the determinant is exactly
    /// zero.
    ///
    /// `1/det` is computed once and reused for every entry.
    pub fn checked_invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det.is_zero() {
            return None;
        }
        let inv_det = det.inv();
        let [a, b, c, d, e, f, g, h, i] = self.data;
        Some(Self {
            data: [
                (e * i - f * h) * inv_det,
                (c * h - b * i) * inv_det,
                (b * f - c * e) * inv_det,
                (f * g - d * i) * inv_det,
                (a * i - c * g) * inv_det,
                (c * d - a * f) * inv_det,
                (d * h - e * g) * inv_det,
                (b * g - a * h) * inv_det,
                (a * e - b * d) * inv_det,
            ],
        })
    }

    /// Inverse, falling back to the identity matrix when singular.
    ///
    /// The fallback is a safe default, not an inverse. Note that
    /// [`Matrix4::invert`] falls back to the zero matrix instead.
    pub fn invert(&self) -> Self {
        self.checked_invert().unwrap_or_else(|| {
            warn!(matrix = ?self.data, "Matrix3 determinant is zero; falling back to identity");
            Self::identity()
        })
    }

    /// Swaps off-diagonal pairs.
    pub fn transpose(&self) -> Self {
        let [a, b, c, d, e, f, g, h, i] = self.data;
        Self {
            data: [a, d, g, b, e, h, c, f, i],
        }
    }

    /// Returns the three basis axes (the matrix rows).
    pub fn extract_basis(&self) -> (Vector3, Vector3, Vector3) {
        let [a, b, c, d, e, f, g, h, i] = self.data;
        (
            Vector3::new(a, b, c),
            Vector3::new(d, e, f),
            Vector3::new(g, h, i),
        )
    }

    /// Builds a matrix whose rows are the given axes; inverse of
    /// [`Matrix3::extract_basis`].
    pub fn make_basis(x_axis: &Vector3, y_axis: &Vector3, z_axis: &Vector3) -> Self {
        let [a, b, c] = x_axis.to_array();
        let [d, e, f] = y_axis.to_array();
        let [g, h, i] = z_axis.to_array();
        Self {
            data: [a, b, c, d, e, f, g, h, i],
        }
    }

    /// Scales columns 1–3 by the components of `s`.
    pub fn scale(&self, s: &Vector3) -> Self {
        let factors = s.to_array();
        let mut data = self.data;
        for (i, v) in data.iter_mut().enumerate() {
            *v *= factors[i % 3];
        }
        Self { data }
    }

    /// 2D translation by `(x, y)`.
    pub fn make_translation(x: Real64, y: Real64) -> Self {
        let mut m = Self::identity();
        m.data[6] = x;
        m.data[7] = y;
        m
    }

    /// 2D scale by `(x, y)`.
    pub fn make_scale(x: Real64, y: Real64) -> Self {
        let mut m = Self::identity();
        m.data[0] = x;
        m.data[4] = y;
        m
    }

    /// 2D shear: `n12 = x`, `n21 = y`.
    pub fn make_shear(x: Real64, y: Real64) -> Self {
        let mut m = Self::identity();
        m.data[1] = x;
        m.data[3] = y;
        m
    }
}

impl From<[Real64; 9]> for Matrix3 {
    fn from(value: [Real64; 9]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Matrix3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Matrix3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}
