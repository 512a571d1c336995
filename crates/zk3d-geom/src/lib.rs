// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]
#![doc = r"Geometry primitives for zk3d.

This crate provides:
- Axis-aligned boxes (`Box3`) with an explicit empty state.
- Planes in Hessian normal form (`Plane`).
- Spheres (`Sphere`) with a negative-radius empty sentinel.

Design notes:
- Deterministic: every value is `zk3d_math::Real64`; no floating point runs
  after construction.
- Pure values: operations return new boxes, planes and spheres. Only the
  `set*` / `make_empty` helpers mutate in place.
- Empty inputs never report containment or intersection.
"]

/// Foundational geometric types.
pub mod types;

pub use types::box3::Box3;
pub use types::plane::Plane;
pub use types::sphere::Sphere;
