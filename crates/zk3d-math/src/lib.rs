// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! zk3d-math: deterministic fixed-point 3D math.
//!
//! Every value is built on [`Real64`], a signed `i64` scaled by [`SCALE`]
//! (`10^4`). Only integer arithmetic runs after construction, so results are
//! bit-identical on every platform and can be re-derived inside an
//! arithmetic circuit.
//!
//! Layering is one-way: scalars, then vectors, then matrices. Geometric
//! aggregates (boxes, planes, spheres) live in `zk3d-geom`.
//!
//! Conventions:
//! - Points are row vectors multiplied on the left (`[x y z 1] · M`), so
//!   translation lives in the last matrix row.
//! - Multiplication and division truncate toward zero. Chained operations
//!   drift by a few units in the last place; compare with a tolerance.
//! - There is no square root, so vectors expose squared lengths only.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::multiple_crate_versions
)]

mod error;
mod mat3;
mod mat4;
/// Fixed-point scalar and its scale constants.
pub mod real64;
mod vec2;
mod vec3;

pub use error::MathError;
pub use mat3::Matrix3;
pub use mat4::Matrix4;
pub use real64::{Real64, DECIMALS, SCALE};
pub use vec2::Vector2;
pub use vec3::Vector3;
