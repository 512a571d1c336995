// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-point scalar with a decimal scale of `10^4`.
//!
//! The representation is an `i64` storing an integer scaled by [`SCALE`]:
//!
//! ```text
//! real_value = raw / 10_000
//! ```
//!
//! Determinism contract:
//! - Only integer addition, subtraction, multiplication and division are used;
//!   no floating point is involved once a value has been constructed.
//! - Multiplication and division truncate toward zero. Every product loses up
//!   to `SCALE - 1` units in the last place, so chained expressions drift and
//!   callers comparing against floating-point results need a tolerance.
//! - Intermediates are widened to `i128`; results saturate at the `i64`
//!   bounds instead of wrapping.
//! - Division by zero yields a saturated value (`0 / 0 → 0`). It is never a
//!   meaningful result; use [`Real64::checked_div`] / [`Real64::checked_inv`]
//!   to branch on it.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Number of raw units in `1.0`.
pub const SCALE: i64 = 10_000;

/// Decimal digits carried after the point (`SCALE == 10^DECIMALS`).
pub const DECIMALS: usize = 4;

/// Signed fixed-point number backed by a scaled `i64`.
///
/// # Examples
/// ```
/// use zk3d_math::Real64;
/// let a = Real64::from_f64(0.1234);
/// let b = Real64::from_f64(2.3456);
/// assert_eq!((a + b).raw(), 24_690);
/// assert_eq!((a + b).to_string(), "2.469");
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Real64 {
    raw: i64,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Real64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Real64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

impl Real64 {
    /// The fixed-point zero value.
    pub const ZERO: Self = Self { raw: 0 };

    /// The fixed-point one value.
    pub const ONE: Self = Self { raw: SCALE };

    /// Largest representable value; doubles as the `+∞` sentinel.
    pub const MAX: Self = Self { raw: i64::MAX };

    /// Smallest representable value; doubles as the `-∞` sentinel.
    pub const MIN: Self = Self { raw: i64::MIN };

    /// Constructs a value from its raw scaled integer (no rounding).
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Returns the underlying scaled integer.
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Constructs a value from a whole number, saturating on overflow.
    #[must_use]
    pub const fn from_int(value: i64) -> Self {
        Self {
            raw: value.saturating_mul(SCALE),
        }
    }

    /// Converts a decimal to fixed point, rounding `value * SCALE` to the
    /// nearest integer with ties away from zero.
    ///
    /// Non-finite input is a caller error. It follows Rust's saturating cast:
    /// `NaN` maps to zero and infinities saturate to [`Real64::MAX`] /
    /// [`Real64::MIN`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_f64(value: f64) -> Self {
        Self {
            raw: (value * SCALE as f64).round() as i64,
        }
    }

    /// Converts back to `f64` for interop, diagnostics and oracle checks.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / SCALE as f64
    }

    fn saturate(value: i128) -> i64 {
        i64::try_from(value).unwrap_or_else(|_| {
            if value.is_negative() {
                i64::MIN
            } else {
                i64::MAX
            }
        })
    }

    fn mul_raw(a: i64, b: i64) -> i64 {
        // i128 division truncates toward zero.
        Self::saturate(i128::from(a) * i128::from(b) / i128::from(SCALE))
    }

    fn div_raw(a: i64, b: i64) -> i64 {
        if b == 0 {
            if a == 0 {
                return 0;
            }
            return if a.is_negative() { i64::MIN } else { i64::MAX };
        }
        Self::saturate(i128::from(a) * i128::from(SCALE) / i128::from(b))
    }

    /// Division that reports a zero divisor instead of saturating.
    #[must_use]
    pub fn checked_div(self, other: Self) -> Option<Self> {
        if other.raw == 0 {
            return None;
        }
        Some(self / other)
    }

    /// Reciprocal, `(SCALE * SCALE) / raw`.
    ///
    /// A zero input saturates to [`Real64::MAX`]; see [`Real64::checked_inv`].
    #[must_use]
    pub fn inv(self) -> Self {
        Self::ONE / self
    }

    /// Reciprocal that reports a zero input.
    #[must_use]
    pub fn checked_inv(self) -> Option<Self> {
        Self::ONE.checked_div(self)
    }

    /// Absolute value, saturating `MIN` to `MAX`.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self {
            raw: self.raw.saturating_abs(),
        }
    }

    /// Exact raw equality (no tolerance).
    pub const fn equals(self, other: Self) -> bool {
        self.raw == other.raw
    }

    /// `true` when `raw > 0`; zero is not positive.
    pub const fn is_positive(self) -> bool {
        self.raw > 0
    }

    /// `true` when `raw < 0`.
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// `true` when `raw == 0`.
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Orders `|self|` against `|other|`.
    pub fn magnitude_cmp(self, other: Self) -> Ordering {
        self.raw.unsigned_abs().cmp(&other.raw.unsigned_abs())
    }

    /// `|self| < |other|`.
    pub fn magnitude_lt(self, other: Self) -> bool {
        self.magnitude_cmp(other) == Ordering::Less
    }

    /// `|self| <= |other|`.
    pub fn magnitude_le(self, other: Self) -> bool {
        self.magnitude_cmp(other) != Ordering::Greater
    }

    /// `|self| > |other|`.
    pub fn magnitude_gt(self, other: Self) -> bool {
        self.magnitude_cmp(other) == Ordering::Greater
    }

    /// `|self| >= |other|`.
    pub fn magnitude_ge(self, other: Self) -> bool {
        self.magnitude_cmp(other) != Ordering::Less
    }
}

impl fmt::Display for Real64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.raw < 0 { "-" } else { "" };
        let abs = self.raw.unsigned_abs();
        let scale = SCALE.unsigned_abs();
        let whole = abs / scale;
        let frac = abs % scale;
        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{frac:0width$}", width = DECIMALS);
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl From<f64> for Real64 {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<Real64> for f64 {
    fn from(value: Real64) -> Self {
        value.to_f64()
    }
}

/// Exact addition, saturating at the `i64` bounds.
impl Add for Real64 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.saturating_add(rhs.raw))
    }
}

/// Exact subtraction, saturating at the `i64` bounds.
impl Sub for Real64 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.saturating_sub(rhs.raw))
    }
}

/// `(a.raw * b.raw) / SCALE`, truncated toward zero.
impl Mul for Real64 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(Self::mul_raw(self.raw, rhs.raw))
    }
}

/// `(a.raw * SCALE) / b.raw`, truncated toward zero.
///
/// A zero divisor saturates; see [`Real64::checked_div`].
impl Div for Real64 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::from_raw(Self::div_raw(self.raw, rhs.raw))
    }
}

/// Negation, saturating `MIN` to `MAX`.
impl Neg for Real64 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_raw(self.raw.saturating_neg())
    }
}

impl AddAssign for Real64 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Real64 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Real64 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Real64 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl core::iter::Sum for Real64 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
