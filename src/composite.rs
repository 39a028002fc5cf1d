//! Per-point compositing operators.
//!
//! Each operator lifts a plain value-level selector over its operand
//! fields with [`lift`], so composition cost is one closure call per
//! operand per sample and nothing is evaluated ahead of time.

use crate::field::{Blend, Field, Fraction, Image, Region};
use crate::foundation::color::Color;
use crate::kernel::lift;

/// Select between two fields point by point: where `region` holds,
/// sample `if_true`, elsewhere sample `if_false`.
pub fn cond<T: 'static>(region: Region, if_true: Field<T>, if_false: Field<T>) -> Field<T> {
    Field::new(lift(
        |c: bool, a: T, b: T| if c { a } else { b },
        (region.into_fn(), if_true.into_fn(), if_false.into_fn()),
    ))
}

/// Mix two images through a blend mask.
///
/// At each point the result is `a`'s color pulled toward `b`'s by the
/// mask weight: weight 0 reproduces `a`, weight 1 reproduces `b`.
pub fn lerp(blend: Blend, a: Image, b: Image) -> Image {
    Field::new(lift(
        |w: Fraction, ca: Color, cb: Color| ca.mean(cb, w),
        (blend.into_fn(), a.into_fn(), b.into_fn()),
    ))
}

/// Darken an image toward black, by the blend weight at each point.
pub fn darken(image: Image, blend: Blend) -> Image {
    Field::new(lift(
        |c: Color, w: Fraction| c.mean(Color::BLACK, w),
        (image.into_fn(), blend.into_fn()),
    ))
}

/// Lighten an image toward white, by the blend weight at each point.
pub fn lighten(image: Image, blend: Blend) -> Image {
    Field::new(lift(
        |c: Color, w: Fraction| c.mean(Color::WHITE, w),
        (image.into_fn(), blend.into_fn()),
    ))
}
