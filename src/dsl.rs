//! Declarative scene descriptions.
//!
//! A scene is a JSON expression tree mirroring the combinator API one to
//! one. The wire types accept the flexible spellings scene authors expect
//! (`[x, y]` points, `"#rrggbb"` colors), `validate` enforces every
//! boundary invariant, and `build` realizes the tree into an evaluable
//! field. The core combinators themselves stay unvalidated; all checks
//! live here.

use serde::{Deserialize, Serialize};

use crate::composite;
use crate::field::{Blend, Image, Region};
use crate::foundation::color::Color;
use crate::foundation::error::{ImagoError, ImagoResult};
use crate::foundation::geom::{Point, Vec2};
use crate::generate;
use crate::transform;

/// Wire form of a Cartesian point.
///
/// Deserializes from `[x, y]` or `{"x": .., "y": ..}` and serializes as
/// the object form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PointDef {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl PointDef {
    /// Convert to the geometry type the core evaluates with.
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl<'de> Deserialize<'de> for PointDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

/// Wire form of a translation offset.
///
/// Deserializes from `[x, y]` or `{"x": .., "y": ..}` and serializes as
/// the object form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VecDef {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl VecDef {
    /// Convert to the geometry type the core evaluates with.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl<'de> Deserialize<'de> for VecDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

/// Wire form of an RGB color with normalized `0..=1` channels.
///
/// Deserializes from `"#rrggbb"` hex strings, `{"r", "g", "b"}` objects,
/// or `[r, g, b]` arrays; serializes as the object form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDef {
    /// Red channel, `0..=1`.
    pub r: f64,
    /// Green channel, `0..=1`.
    pub g: f64,
    /// Blue channel, `0..=1`.
    pub b: f64,
}

impl ColorDef {
    /// Create a color from normalized channels.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Quantize to the 8-bit [`Color`] the core evaluates with.
    ///
    /// Channels clamp to `[0, 1]` first, so out-of-range wire values never
    /// wrap.
    pub fn to_color(self) -> Color {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        Color::new(to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: f64, g: f64, b: f64 },
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Self::rgb(r, g, b)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self::rgb(v[0], v[1], v[2]))
                } else {
                    Err(serde::de::Error::custom(
                        "rgb array must have len 3 ([r,g,b])",
                    ))
                }
            }
        }
    }
}

fn parse_hex(s: &str) -> Result<ColorDef, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }
    let r = hex_byte(&s[0..2])?;
    let g = hex_byte(&s[2..4])?;
    let b = hex_byte(&s[4..6])?;

    Ok(ColorDef::rgb(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ))
}

/// Expression tree describing a [`Region`].
///
/// Generator variants fix the two region values: `true` inside the shape
/// (or on the origin cell's parity), `false` elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RegionExpr {
    /// One membership value over the whole plane.
    Constant {
        /// Membership everywhere.
        value: bool,
    },
    /// True inside and on a circle.
    Circle {
        /// Circle center.
        center: PointDef,
        /// Circle radius, `>= 0`.
        radius: f64,
    },
    /// True on the checkerboard cells of even index sum.
    Checker {
        /// Cell side length, `> 0`.
        size: f64,
    },
    /// Checkerboard bent around the origin.
    PolarChecker {
        /// Radial band width, `> 0`.
        size: f64,
        /// Angular repeats per turn, `>= 1`.
        sectors: u32,
    },
    /// True on alternating concentric rings, innermost included.
    Rings {
        /// Ring center.
        center: PointDef,
        /// Ring width, `> 0`.
        width: f64,
    },
    /// True inside a vertical band centered on the y axis.
    VerticalStripe {
        /// Band width, `> 0`.
        width: f64,
    },
    /// The inner region rotated counterclockwise about the origin.
    Rotate {
        /// Rotation angle in degrees.
        angle_deg: f64,
        /// Region to rotate.
        inner: Box<RegionExpr>,
    },
    /// The inner region shifted by an offset.
    Translate {
        /// Translation offset.
        offset: VecDef,
        /// Region to shift.
        inner: Box<RegionExpr>,
    },
    /// The inner region scaled about the origin.
    Scale {
        /// Scale factor, finite and non-zero.
        factor: f64,
        /// Region to scale.
        inner: Box<RegionExpr>,
    },
}

impl RegionExpr {
    /// Check every boundary invariant in the tree.
    pub fn validate(&self) -> ImagoResult<()> {
        match self {
            Self::Constant { .. } => Ok(()),
            Self::Circle { center, radius } => {
                finite_point("circle center", *center)?;
                circle_radius(*radius)
            }
            Self::Checker { size } => positive("checker size", *size),
            Self::PolarChecker { size, sectors } => {
                positive("polar_checker size", *size)?;
                polar_sectors(*sectors)
            }
            Self::Rings { center, width } => {
                finite_point("rings center", *center)?;
                positive("rings width", *width)
            }
            Self::VerticalStripe { width } => positive("vertical_stripe width", *width),
            Self::Rotate { angle_deg, inner } => {
                finite("rotate angle_deg", *angle_deg)?;
                inner.validate()
            }
            Self::Translate { offset, inner } => {
                finite_vec("translate offset", *offset)?;
                inner.validate()
            }
            Self::Scale { factor, inner } => {
                scale_factor(*factor)?;
                inner.validate()
            }
        }
    }

    /// Validate, then realize the tree into an evaluable [`Region`].
    #[tracing::instrument(skip(self))]
    pub fn build(&self) -> ImagoResult<Region> {
        self.validate()?;
        Ok(self.realize())
    }

    fn realize(&self) -> Region {
        match self {
            Self::Constant { value } => generate::constant(*value),
            Self::Circle { center, radius } => {
                generate::circle(center.to_point(), *radius, true, false)
            }
            Self::Checker { size } => generate::checker(*size, true, false),
            Self::PolarChecker { size, sectors } => {
                generate::polar_checker(*size, *sectors, true, false)
            }
            Self::Rings { center, width } => {
                generate::rings(center.to_point(), *width, true, false)
            }
            Self::VerticalStripe { width } => generate::vertical_stripe(*width, true, false),
            Self::Rotate { angle_deg, inner } => {
                transform::rotate(inner.realize(), angle_deg.to_radians())
            }
            Self::Translate { offset, inner } => {
                transform::translate(inner.realize(), offset.to_vec2())
            }
            Self::Scale { factor, inner } => transform::scale(inner.realize(), *factor),
        }
    }
}

/// Expression tree describing a [`Blend`].
///
/// Generator variants carry their two fraction values inline. Values are
/// conventionally in `[0, 1]` but only finiteness is enforced; the core
/// extrapolates out-of-range weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BlendExpr {
    /// One weight over the whole plane.
    Constant {
        /// Weight everywhere.
        value: f64,
    },
    /// One weight inside and on a circle, another outside.
    Circle {
        /// Circle center.
        center: PointDef,
        /// Circle radius, `>= 0`.
        radius: f64,
        /// Weight inside and on the boundary.
        inner: f64,
        /// Weight outside.
        outer: f64,
    },
    /// Checkerboard of two weights.
    Checker {
        /// Cell side length, `> 0`.
        size: f64,
        /// Weight on cells of even index sum.
        a: f64,
        /// Weight on the remaining cells.
        b: f64,
    },
    /// Checkerboard of two weights bent around the origin.
    PolarChecker {
        /// Radial band width, `> 0`.
        size: f64,
        /// Angular repeats per turn, `>= 1`.
        sectors: u32,
        /// Weight on sectors of even parity.
        a: f64,
        /// Weight on the remaining sectors.
        b: f64,
    },
    /// Concentric rings of two weights.
    Rings {
        /// Ring center.
        center: PointDef,
        /// Ring width, `> 0`.
        width: f64,
        /// Weight on the innermost ring and every second ring out.
        a: f64,
        /// Weight on the remaining rings.
        b: f64,
    },
    /// A vertical band of one weight over a background of another.
    VerticalStripe {
        /// Band width, `> 0`.
        width: f64,
        /// Weight inside the band.
        inner: f64,
        /// Weight outside.
        outer: f64,
    },
    /// The inner blend rotated counterclockwise about the origin.
    Rotate {
        /// Rotation angle in degrees.
        angle_deg: f64,
        /// Blend to rotate.
        inner: Box<BlendExpr>,
    },
    /// The inner blend shifted by an offset.
    Translate {
        /// Translation offset.
        offset: VecDef,
        /// Blend to shift.
        inner: Box<BlendExpr>,
    },
    /// The inner blend scaled about the origin.
    Scale {
        /// Scale factor, finite and non-zero.
        factor: f64,
        /// Blend to scale.
        inner: Box<BlendExpr>,
    },
}

impl BlendExpr {
    /// Check every boundary invariant in the tree.
    pub fn validate(&self) -> ImagoResult<()> {
        match self {
            Self::Constant { value } => finite("constant value", *value),
            Self::Circle {
                center,
                radius,
                inner,
                outer,
            } => {
                finite_point("circle center", *center)?;
                circle_radius(*radius)?;
                finite("circle inner value", *inner)?;
                finite("circle outer value", *outer)
            }
            Self::Checker { size, a, b } => {
                positive("checker size", *size)?;
                finite("checker a value", *a)?;
                finite("checker b value", *b)
            }
            Self::PolarChecker {
                size,
                sectors,
                a,
                b,
            } => {
                positive("polar_checker size", *size)?;
                polar_sectors(*sectors)?;
                finite("polar_checker a value", *a)?;
                finite("polar_checker b value", *b)
            }
            Self::Rings {
                center,
                width,
                a,
                b,
            } => {
                finite_point("rings center", *center)?;
                positive("rings width", *width)?;
                finite("rings a value", *a)?;
                finite("rings b value", *b)
            }
            Self::VerticalStripe {
                width,
                inner,
                outer,
            } => {
                positive("vertical_stripe width", *width)?;
                finite("vertical_stripe inner value", *inner)?;
                finite("vertical_stripe outer value", *outer)
            }
            Self::Rotate { angle_deg, inner } => {
                finite("rotate angle_deg", *angle_deg)?;
                inner.validate()
            }
            Self::Translate { offset, inner } => {
                finite_vec("translate offset", *offset)?;
                inner.validate()
            }
            Self::Scale { factor, inner } => {
                scale_factor(*factor)?;
                inner.validate()
            }
        }
    }

    /// Validate, then realize the tree into an evaluable [`Blend`].
    #[tracing::instrument(skip(self))]
    pub fn build(&self) -> ImagoResult<Blend> {
        self.validate()?;
        Ok(self.realize())
    }

    fn realize(&self) -> Blend {
        match self {
            Self::Constant { value } => generate::constant(*value),
            Self::Circle {
                center,
                radius,
                inner,
                outer,
            } => generate::circle(center.to_point(), *radius, *inner, *outer),
            Self::Checker { size, a, b } => generate::checker(*size, *a, *b),
            Self::PolarChecker {
                size,
                sectors,
                a,
                b,
            } => generate::polar_checker(*size, *sectors, *a, *b),
            Self::Rings {
                center,
                width,
                a,
                b,
            } => generate::rings(center.to_point(), *width, *a, *b),
            Self::VerticalStripe {
                width,
                inner,
                outer,
            } => generate::vertical_stripe(*width, *inner, *outer),
            Self::Rotate { angle_deg, inner } => {
                transform::rotate(inner.realize(), angle_deg.to_radians())
            }
            Self::Translate { offset, inner } => {
                transform::translate(inner.realize(), offset.to_vec2())
            }
            Self::Scale { factor, inner } => transform::scale(inner.realize(), *factor),
        }
    }
}

/// Expression tree describing an [`Image`].
///
/// Generator variants carry colors; the compositing variants nest region
/// and blend trees alongside image subtrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ImageExpr {
    /// One color over the whole plane.
    Constant {
        /// Color everywhere.
        value: ColorDef,
    },
    /// One color inside and on a circle, another outside.
    Circle {
        /// Circle center.
        center: PointDef,
        /// Circle radius, `>= 0`.
        radius: f64,
        /// Color inside and on the boundary.
        inner: ColorDef,
        /// Color outside.
        outer: ColorDef,
    },
    /// Checkerboard of two colors.
    Checker {
        /// Cell side length, `> 0`.
        size: f64,
        /// Color on cells of even index sum.
        a: ColorDef,
        /// Color on the remaining cells.
        b: ColorDef,
    },
    /// Checkerboard of two colors bent around the origin.
    PolarChecker {
        /// Radial band width, `> 0`.
        size: f64,
        /// Angular repeats per turn, `>= 1`.
        sectors: u32,
        /// Color on sectors of even parity.
        a: ColorDef,
        /// Color on the remaining sectors.
        b: ColorDef,
    },
    /// Concentric rings of two colors.
    Rings {
        /// Ring center.
        center: PointDef,
        /// Ring width, `> 0`.
        width: f64,
        /// Color on the innermost ring and every second ring out.
        a: ColorDef,
        /// Color on the remaining rings.
        b: ColorDef,
    },
    /// A vertical band of one color over a background of another.
    VerticalStripe {
        /// Band width, `> 0`.
        width: f64,
        /// Color inside the band.
        inner: ColorDef,
        /// Color outside.
        outer: ColorDef,
    },
    /// The inner image rotated counterclockwise about the origin.
    Rotate {
        /// Rotation angle in degrees.
        angle_deg: f64,
        /// Image to rotate.
        inner: Box<ImageExpr>,
    },
    /// The inner image shifted by an offset.
    Translate {
        /// Translation offset.
        offset: VecDef,
        /// Image to shift.
        inner: Box<ImageExpr>,
    },
    /// The inner image scaled about the origin.
    Scale {
        /// Scale factor, finite and non-zero.
        factor: f64,
        /// Image to scale.
        inner: Box<ImageExpr>,
    },
    /// Point-by-point selection between two images.
    Cond {
        /// Where to sample `if_true`.
        region: RegionExpr,
        /// Image used where the region holds.
        if_true: Box<ImageExpr>,
        /// Image used elsewhere.
        if_false: Box<ImageExpr>,
    },
    /// Mix of two images through a blend mask.
    Lerp {
        /// Mask weighting the mix; 0 picks `a`, 1 picks `b`.
        blend: BlendExpr,
        /// First image.
        a: Box<ImageExpr>,
        /// Second image.
        b: Box<ImageExpr>,
    },
    /// The inner image pulled toward black by the blend weight.
    Darken {
        /// Image to darken.
        inner: Box<ImageExpr>,
        /// Darkening weight per point.
        blend: BlendExpr,
    },
    /// The inner image pulled toward white by the blend weight.
    Lighten {
        /// Image to lighten.
        inner: Box<ImageExpr>,
        /// Lightening weight per point.
        blend: BlendExpr,
    },
}

impl ImageExpr {
    /// Parse a scene from its JSON text.
    pub fn from_json_str(s: &str) -> ImagoResult<Self> {
        serde_json::from_str(s).map_err(|e| ImagoError::serde(e.to_string()))
    }

    /// Check every boundary invariant in the tree, including nested
    /// region and blend subtrees.
    pub fn validate(&self) -> ImagoResult<()> {
        match self {
            Self::Constant { .. } => Ok(()),
            Self::Circle { center, radius, .. } => {
                finite_point("circle center", *center)?;
                circle_radius(*radius)
            }
            Self::Checker { size, .. } => positive("checker size", *size),
            Self::PolarChecker { size, sectors, .. } => {
                positive("polar_checker size", *size)?;
                polar_sectors(*sectors)
            }
            Self::Rings { center, width, .. } => {
                finite_point("rings center", *center)?;
                positive("rings width", *width)
            }
            Self::VerticalStripe { width, .. } => positive("vertical_stripe width", *width),
            Self::Rotate { angle_deg, inner } => {
                finite("rotate angle_deg", *angle_deg)?;
                inner.validate()
            }
            Self::Translate { offset, inner } => {
                finite_vec("translate offset", *offset)?;
                inner.validate()
            }
            Self::Scale { factor, inner } => {
                scale_factor(*factor)?;
                inner.validate()
            }
            Self::Cond {
                region,
                if_true,
                if_false,
            } => {
                region.validate()?;
                if_true.validate()?;
                if_false.validate()
            }
            Self::Lerp { blend, a, b } => {
                blend.validate()?;
                a.validate()?;
                b.validate()
            }
            Self::Darken { inner, blend } | Self::Lighten { inner, blend } => {
                blend.validate()?;
                inner.validate()
            }
        }
    }

    /// Validate, then realize the tree into an evaluable [`Image`].
    #[tracing::instrument(skip(self))]
    pub fn build(&self) -> ImagoResult<Image> {
        self.validate()?;
        Ok(self.realize())
    }

    fn realize(&self) -> Image {
        match self {
            Self::Constant { value } => generate::constant(value.to_color()),
            Self::Circle {
                center,
                radius,
                inner,
                outer,
            } => generate::circle(
                center.to_point(),
                *radius,
                inner.to_color(),
                outer.to_color(),
            ),
            Self::Checker { size, a, b } => generate::checker(*size, a.to_color(), b.to_color()),
            Self::PolarChecker {
                size,
                sectors,
                a,
                b,
            } => generate::polar_checker(*size, *sectors, a.to_color(), b.to_color()),
            Self::Rings {
                center,
                width,
                a,
                b,
            } => generate::rings(center.to_point(), *width, a.to_color(), b.to_color()),
            Self::VerticalStripe {
                width,
                inner,
                outer,
            } => generate::vertical_stripe(*width, inner.to_color(), outer.to_color()),
            Self::Rotate { angle_deg, inner } => {
                transform::rotate(inner.realize(), angle_deg.to_radians())
            }
            Self::Translate { offset, inner } => {
                transform::translate(inner.realize(), offset.to_vec2())
            }
            Self::Scale { factor, inner } => transform::scale(inner.realize(), *factor),
            Self::Cond {
                region,
                if_true,
                if_false,
            } => composite::cond(region.realize(), if_true.realize(), if_false.realize()),
            Self::Lerp { blend, a, b } => {
                composite::lerp(blend.realize(), a.realize(), b.realize())
            }
            Self::Darken { inner, blend } => composite::darken(inner.realize(), blend.realize()),
            Self::Lighten { inner, blend } => composite::lighten(inner.realize(), blend.realize()),
        }
    }
}

fn finite(name: &str, value: f64) -> ImagoResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ImagoError::validation(format!("{name} must be finite")))
    }
}

fn positive(name: &str, value: f64) -> ImagoResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ImagoError::validation(format!(
            "{name} must be finite and > 0"
        )))
    }
}

fn finite_point(name: &str, p: PointDef) -> ImagoResult<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(ImagoError::validation(format!("{name} must be finite")))
    }
}

fn finite_vec(name: &str, v: VecDef) -> ImagoResult<()> {
    if v.x.is_finite() && v.y.is_finite() {
        Ok(())
    } else {
        Err(ImagoError::validation(format!("{name} must be finite")))
    }
}

fn circle_radius(radius: f64) -> ImagoResult<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(ImagoError::validation(
            "circle radius must be finite and >= 0",
        ))
    }
}

fn polar_sectors(sectors: u32) -> ImagoResult<()> {
    if sectors >= 1 {
        Ok(())
    } else {
        Err(ImagoError::validation("polar_checker sectors must be >= 1"))
    }
}

fn scale_factor(factor: f64) -> ImagoResult<()> {
    if factor.is_finite() && factor != 0.0 {
        Ok(())
    } else {
        Err(ImagoError::validation(
            "scale factor must be finite and non-zero",
        ))
    }
}
