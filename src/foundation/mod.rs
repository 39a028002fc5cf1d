//! Leaf value types consumed throughout the crate.

/// Opaque color values and their weighted mean.
pub mod color;
/// Boundary error type and result alias.
pub mod error;
/// Plane geometry: kurbo re-exports and polar conversion.
pub mod geom;
