//! Functional image composition.
//!
//! An image here is not a pixel buffer: it is a pure function from a
//! plane [`Point`] to a sample, held behind the shared [`Field`] handle.
//! Three instantiations cover the compositing vocabulary:
//!
//! - [`Region`]: membership masks (`bool` samples)
//! - [`Blend`]: interpolation weights ([`Fraction`] samples)
//! - [`Image`]: colors ([`Color`] samples)
//!
//! Everything combines through two kernel operations: [`compose`] chains
//! point remaps in front of a field and [`lift`] raises a value-level
//! function to act pointwise over several fields. Generators such as
//! [`checker`] and [`circle`] build fields from nothing, the transforms
//! [`rotate`], [`translate`] and [`scale`] remap them, and the operators
//! [`cond`], [`lerp`], [`darken`] and [`lighten`] merge them. The [`dsl`]
//! module adds a declarative JSON boundary over the same surface, and the
//! `imago` binary drives it from the command line.
//!
//! Evaluation is the only consumer operation: [`Field::eval`] at a point.
//! There is no rasterization, no pixel buffer and no finite extent
//! anywhere in the crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod composite;
pub mod dsl;
pub mod field;
pub mod foundation;
pub mod generate;
pub mod kernel;
pub mod transform;

pub use composite::{cond, darken, lerp, lighten};
pub use dsl::{BlendExpr, ImageExpr, RegionExpr};
pub use field::{Blend, Field, Fraction, Image, Region};
pub use foundation::color::Color;
pub use foundation::error::{ImagoError, ImagoResult};
pub use foundation::geom::{Point, Polar, Vec2, from_polar, to_polar};
pub use generate::{checker, circle, constant, polar_checker, rings, vertical_stripe};
pub use kernel::{compose, lift};
pub use transform::{rotate, scale, translate};
