//! Planar and spatial vector math for the OpenModel geometry toolkit.
//!
//! # Motivation
//!
//! OpenModel exposes small fixed-size vector types in its public APIs, so the
//! types need to come from somewhere stable and easy to hold. Existing Rust
//! libraries have problems and limitations that make them unsuitable for this
//! use case:
//!
//! - Some of them aim for maximum flexibility (arbitrary dimensions, generic
//!   scalars, storage abstraction), and pay the complexity cost associated
//!   with that. Exposing types from such a library makes OpenModel
//!   unnecessarily difficult to use.
//! - Many libraries still see frequent breaking changes. Exposing their types
//!   in public APIs would cause unnecessary churn for dependants.
//! - Most of them let degenerate inputs (zero-length normalization, division
//!   by a zero scalar) silently produce NaN or infinite components, which the
//!   geometry code downstream then has to chase.
//!
//! # Goals & Non-Goals
//!
//! - Support exactly two dimensionalities, [`Vec2`] and [`Vec3`], behind the
//!   [`Vector`] capability trait, so callers can write dimension-agnostic
//!   code (see [`angle_between`]) while each variant keeps its own
//!   componentwise semantics.
//! - Operations are pure: operands are never mutated, every result is a new
//!   value. The types are plain `Copy` data and freely cross threads.
//! - Degenerate inputs surface as typed [`VectorError`] outcomes instead of
//!   NaN propagation or panics.
//! - Equality is componentwise within a tolerance ([`approx`]), never a
//!   magnitude comparison: two vectors that happen to share a length but
//!   point in different directions must not compare equal.
//! - No matrices or transforms, no SIMD, no serialization.
//!
//! # Examples
//!
//! ```
//! use openmodel_linalg::{vec3, Vector};
//!
//! let up = vec3(0.0, 0.0, 4.0).normalize()?;
//! assert_eq!(up, vec3(0.0, 0.0, 1.0));
//!
//! let forward = vec3(0.0, 1.0, 0.0);
//! let right = forward.cross(up);
//! assert_eq!(right, vec3(1.0, 0.0, 0.0));
//! # Ok::<(), openmodel_linalg::VectorError>(())
//! ```

pub mod approx;
mod error;
mod traits;
mod vector;

pub use error::*;
pub use traits::*;
pub use vector::*;
