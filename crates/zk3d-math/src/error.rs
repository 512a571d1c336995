// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors reported by vector and matrix accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A component index was outside `0..arity`.
    #[error("index is out of range: {index} (arity {arity})")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of components the value has.
        arity: usize,
    },
    /// A slice did not hold enough elements past the requested offset.
    #[error("slice too short: need {needed} elements from offset {offset}, found {len}")]
    SliceTooShort {
        /// Elements required.
        needed: usize,
        /// Offset into the slice.
        offset: usize,
        /// Actual slice length.
        len: usize,
    },
}
