// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Box, plane and sphere value types.

/// Axis-aligned box with min/max corners.
pub mod box3;
/// Plane as unit normal plus signed constant.
pub mod plane;
/// Sphere as center plus radius.
pub mod sphere;
