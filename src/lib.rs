//! A non-positional 2-dimensional Euclidean vector.
//! Provides arithmetic, normalization and rotation over `f32` components.
//! The vector caches its own length, recomputing it on every mutation,
//! so reading the length is always free and never stale.

pub use crate::error::ZeroVector;
pub use crate::vector::Vector2d;

/// The one degenerate case: the zero vector has no direction.
mod error;
/// The vector type and all its operations.
mod vector;
