// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::warn;

use crate::{MathError, Matrix3, Real64, Vector3};

/// Row‑major 4×4 matrix over [`Real64`].
///
/// - Entry `n{row}{col}` (one-based) lives at `at(row - 1, col - 1)`;
///   [`Matrix4::to_array`] yields `n11, n12, n13, n14, n21, …`.
/// - Points are row vectors: `[x y z 1] · M`. Translation therefore occupies
///   the last row (`n41`, `n42`, `n43`) and the projective column is the
///   last column (`n14`, `n24`, `n34`, `n44`).
/// - The closed-form determinant and inverse keep a fixed product order so
///   truncation is reproducible; compare against floating point with a loose
///   tolerance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4 {
    data: [Real64; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

/// `a * (b * c)`, the nesting every closed-form term uses.
fn p3(a: Real64, b: Real64, c: Real64) -> Real64 {
    a * (b * c)
}

impl Matrix4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        const O: Real64 = Real64::ZERO;
        const I: Real64 = Real64::ONE;
        Self {
            data: [
                I, O, O, O, // row 1
                O, I, O, O, // row 2
                O, O, I, O, // row 3
                O, O, O, I, // row 4
            ],
        }
    }

    /// Returns the all-zero matrix.
    pub const fn zero() -> Self {
        Self {
            data: [Real64::ZERO; 16],
        }
    }

    /// Creates a matrix from row-major entries.
    pub const fn from_elements(data: [Real64; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from row-major decimals, rounding each entry.
    pub fn from_f64s(values: [f64; 16]) -> Self {
        Self {
            data: values.map(Real64::from_f64),
        }
    }

    /// Returns the entries in row-major order.
    pub const fn to_array(self) -> [Real64; 16] {
        self.data
    }

    /// Entry at zero-based `row`, `col`; callers pass in-range indices.
    pub(crate) fn at(&self, row: usize, col: usize) -> Real64 {
        assert!(row < 4 && col < 4, "Matrix4 index out of range: ({row}, {col})");
        self.data[row * 4 + col]
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
        for index in [row, col] {
            if index >= 4 {
                return Err(MathError::IndexOutOfRange { index, arity: 4 });
            }
        }
        Ok(row * 4 + col)
    }

    /// Embeds `m` in the upper-left block; the rest is identity.
    pub fn from_matrix3(m: &Matrix3) -> Self {
        let mut out = Self::identity();
        for row in 0..3 {
            for col in 0..3 {
                out.data[row * 4 + col] = m.at(row, col);
            }
        }
        out
    }

    /// Translation part (`n41`, `n42`, `n43`).
    pub fn position(&self) -> Vector3 {
        Vector3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Overwrites the translation part with `v`.
    pub fn set_position(&mut self, v: &Vector3) -> &mut Self {
        let [x, y, z] = v.to_array();
        self.data[12] = x;
        self.data[13] = y;
        self.data[14] = z;
        self
    }

    /// Copies the translation part of `other` into `self`.
    pub fn copy_position(&mut self, other: &Self) -> &mut Self {
        self.data[12..15].copy_from_slice(&other.data[12..15]);
        self
    }

    /// Standard row × column product `a · b`.
    pub fn multiply_matrices(a: &Self, b: &Self) -> Self {
        let mut out = [Real64::ZERO; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = Real64::ZERO;
                for k in 0..4 {
                    sum += a.at(row, k) * b.at(k, col);
                }
                out[row * 4 + col] = sum;
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

    /// Cofactor expansion along the last row.
    pub fn determinant(&self) -> Real64 {
        let [n11, n12, n13, n14, n21, n22, n23, n24, n31, n32, n33, n34, n41, n42, n43, n44] =
            self.data;

        let c41 = p3(n14, n23, n32) - p3(n13, n24, n32) - p3(n14, n22, n33)
            + p3(n12, n24, n33)
            + p3(n13, n22, n34)
            - p3(n12, n23, n34);
        let c42 = p3(n11, n23, n34) - p3(n11, n24, n33) + p3(n14, n21, n33)
            - p3(n13, n21, n34)
            + p3(n13, n24, n31)
            - p3(n14, n23, n31);
        let c43 = p3(n11, n24, n32) - p3(n11, n22, n34) - p3(n14, n21, n32)
            + p3(n12, n21, n34)
            + p3(n14, n22, n31)
            - p3(n12, n24, n31);
        let c44 = -p3(n13, n22, n31) - p3(n11, n23, n32)
            + p3(n11, n22, n33)
            + p3(n13, n21, n32)
            - p3(n12, n21, n33)
            + p3(n12, n23, n31);

        n41 * c41 + n42 * c42 + n43 * c43 + n44 * c44
    }

    /// Closed-form inverse, or `None` when the determinant is exactly zero.
    ///
    /// The determinant is rebuilt from the first-column cofactors and
    /// `1/det` is computed once and reused for every entry.
    pub fn checked_invert(&self) -> Option<Self> {
        let [n11, n12, n13, n14, n21, n22, n23, n24, n31, n32, n33, n34, n41, n42, n43, n44] =
            self.data;

        let t11 = p3(n23, n34, n42) - p3(n24, n33, n42) + p3(n24, n32, n43)
            - p3(n22, n34, n43)
            - p3(n23, n32, n44)
            + p3(n22, n33, n44);
        let t12 = p3(n14, n33, n42) - p3(n13, n34, n42) - p3(n14, n32, n43)
            + p3(n12, n34, n43)
            + p3(n13, n32, n44)
            - p3(n12, n33, n44);
        let t13 = p3(n13, n24, n42) - p3(n14, n23, n42) + p3(n14, n22, n43)
            - p3(n12, n24, n43)
            - p3(n13, n22, n44)
            + p3(n12, n23, n44);
        let t14 = p3(n14, n23, n32) - p3(n13, n24, n32) - p3(n14, n22, n33)
            + p3(n12, n24, n33)
            + p3(n13, n22, n34)
            - p3(n12, n23, n34);

        let det = n11 * t11 + n21 * t12 + n31 * t13 + n41 * t14;
        if det.is_zero() {
            return None;
        }
        let inv_det = det.inv();

        let a21 = p3(n24, n33, n41) - p3(n23, n34, n41) - p3(n24, n31, n43)
            + p3(n21, n34, n43)
            + p3(n23, n31, n44)
            - p3(n21, n33, n44);
        let a22 = p3(n13, n34, n41) - p3(n14, n33, n41) + p3(n14, n31, n43)
            - p3(n11, n34, n43)
            - p3(n13, n31, n44)
            + p3(n11, n33, n44);
        let a23 = p3(n14, n23, n41) - p3(n13, n24, n41) - p3(n14, n21, n43)
            + p3(n11, n24, n43)
            + p3(n13, n21, n44)
            - p3(n11, n23, n44);
        let a24 = p3(n13, n24, n31) - p3(n14, n23, n31) + p3(n14, n21, n33)
            - p3(n11, n24, n33)
            - p3(n13, n21, n34)
            + p3(n11, n23, n34);

        let a31 = p3(n22, n34, n41) - p3(n24, n32, n41) + p3(n24, n31, n42)
            - p3(n21, n34, n42)
            - p3(n22, n31, n44)
            + p3(n21, n32, n44);
        let a32 = p3(n14, n32, n41) - p3(n12, n34, n41) - p3(n14, n31, n42)
            + p3(n11, n34, n42)
            + p3(n12, n31, n44)
            - p3(n11, n32, n44);
        let a33 = p3(n12, n24, n41) - p3(n14, n22, n41) + p3(n14, n21, n42)
            - p3(n11, n24, n42)
            - p3(n12, n21, n44)
            + p3(n11, n22, n44);
        let a34 = p3(n14, n22, n31) - p3(n12, n24, n31) - p3(n14, n21, n32)
            + p3(n11, n24, n32)
            + p3(n12, n21, n34)
            - p3(n11, n22, n34);

        let a41 = p3(n23, n32, n41) - p3(n22, n33, n41) - p3(n23, n31, n42)
            + p3(n21, n33, n42)
            + p3(n22, n31, n43)
            - p3(n21, n32, n43);
        let a42 = p3(n12, n33, n41) - p3(n13, n32, n41) + p3(n13, n31, n42)
            - p3(n11, n33, n42)
            - p3(n12, n31, n43)
            + p3(n11, n32, n43);
        let a43 = p3(n13, n22, n41) - p3(n12, n23, n41) - p3(n13, n21, n42)
            + p3(n11, n23, n42)
            + p3(n12, n21, n43)
            - p3(n11, n22, n43);
        let a44 = p3(n12, n23, n31) - p3(n13, n22, n31) + p3(n13, n21, n32)
            - p3(n11, n23, n32)
            - p3(n12, n21, n33)
            + p3(n11, n22, n33);

        let adjugate = [
            t11, t12, t13, t14, // row 1
            a21, a22, a23, a24, // row 2
            a31, a32, a33, a34, // row 3
            a41, a42, a43, a44, // row 4
        ];
        Some(Self {
            data: adjugate.map(|c| c * inv_det),
        })
    }

    /// Inverse, falling back to the all-zero matrix when singular.
    ///
    /// [`Matrix3::invert`] falls back to identity instead; callers that need
    /// to tell the cases apart should use [`Matrix4::checked_invert`].
    pub fn invert(&self) -> Self {
        self.checked_invert().unwrap_or_else(|| {
            warn!(matrix = ?self.data, "Matrix4 determinant is zero; falling back to zero matrix");
            Self::zero()
        })
    }

    /// Swaps off-diagonal pairs.
    pub fn transpose(&self) -> Self {
        let mut data = self.data;
        for row in 0..4 {
            for col in 0..4 {
                data[col * 4 + row] = self.data[row * 4 + col];
            }
        }
        Self { data }
    }

    /// Returns the three basis axes (the first three components of rows
    /// 1–3).
    pub fn extract_basis(&self) -> (Vector3, Vector3, Vector3) {
        let row = |r: usize| Vector3::new(self.at(r, 0), self.at(r, 1), self.at(r, 2));
        (row(0), row(1), row(2))
    }

    /// Builds a matrix whose first three rows hold the given axes, with no
    /// translation or projection; inverse of [`Matrix4::extract_basis`].
    pub fn make_basis(x_axis: &Vector3, y_axis: &Vector3, z_axis: &Vector3) -> Self {
        Self::from_matrix3(&Matrix3::make_basis(x_axis, y_axis, z_axis))
    }

    /// Scales rows 1–3 by `v.x`, `v.y`, `v.z`; equivalent to applying the
    /// scale before this transform.
    pub fn scale(&self, v: &Vector3) -> Self {
        let factors = v.to_array();
        let mut data = self.data;
        for (i, entry) in data.iter_mut().take(12).enumerate() {
            *entry *= factors[i / 4];
        }
        Self { data }
    }

    /// Translation by `(x, y, z)`.
    pub fn make_translation(x: Real64, y: Real64, z: Real64) -> Self {
        let mut m = Self::identity();
        m.data[12] = x;
        m.data[13] = y;
        m.data[14] = z;
        m
    }

    /// Axis-aligned scale by `(x, y, z)`.
    pub fn make_scale(x: Real64, y: Real64, z: Real64) -> Self {
        let mut m = Self::identity();
        m.data[0] = x;
        m.data[5] = y;
        m.data[10] = z;
        m
    }

    /// Shear with rows `[1 y z 0]`, `[x 1 z 0]`, `[x y 1 0]`, `[0 0 0 1]`.
    pub fn make_shear(x: Real64, y: Real64, z: Real64) -> Self {
        const O: Real64 = Real64::ZERO;
        const I: Real64 = Real64::ONE;
        Self {
            data: [
                I, y, z, O, // row 1
                x, I, z, O, // row 2
                x, y, I, O, // row 3
                O, O, O, I, // row 4
            ],
        }
    }
}

impl From<[Real64; 16]> for Matrix4 {
    fn from(value: [Real64; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}
