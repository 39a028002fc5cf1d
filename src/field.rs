//! The abstract image model: pure functions from plane points to samples.

use std::fmt;
use std::sync::Arc;

use crate::foundation::color::Color;
use crate::foundation::geom::Point;

/// Interpolation weight produced by a [`Blend`].
///
/// Compositing conventionally expects `[0, 1]`, but nothing clamps here:
/// out-of-range values extrapolate through [`Color::mean`].
pub type Fraction = f64;

/// Point membership over the plane.
pub type Region = Field<bool>;

/// Interpolation weights over the plane.
pub type Blend = Field<Fraction>;

/// Colors over the plane.
pub type Image = Field<Color>;

/// A pure function from a plane [`Point`] to a sample of type `T`.
///
/// A field owns its definition behind a shared immutable handle: cloning is
/// an `Arc` bump, clones evaluate identically forever, and a composed field
/// stays valid after the scope that built it returns. Evaluation never
/// fails and never mutates captured state, so the same point always
/// yields the same sample.
pub struct Field<T> {
    f: Arc<dyn Fn(Point) -> T + Send + Sync>,
}

impl<T> Field<T> {
    /// Wrap a closure as a field.
    pub fn new(f: impl Fn(Point) -> T + Send + Sync + 'static) -> Self {
        Self { f: Arc::new(f) }
    }

    /// Evaluate the field at `p`.
    ///
    /// This is the only operation consumers invoke; a rasterizer calls it
    /// once per output sample.
    pub fn eval(&self, p: Point) -> T {
        (self.f)(p)
    }

    /// Consume the handle, yielding a plain closure over the same function.
    ///
    /// This is the bridge into [`compose`](crate::kernel::compose) /
    /// [`lift`](crate::kernel::lift) operand tuples.
    pub fn into_fn(self) -> impl Fn(Point) -> T {
        move |p| (self.f)(p)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_is_repeatable() {
        let f = Field::new(|p: Point| p.x + p.y);
        let p = Point::new(1.5, 2.25);
        assert_eq!(f.eval(p), 3.75);
        assert_eq!(f.eval(p), 3.75);
    }

    #[test]
    fn clones_share_the_same_function() {
        let f = Field::new(|p: Point| p.x > 0.0);
        let g = f.clone();
        let p = Point::new(2.0, -1.0);
        assert_eq!(f.eval(p), g.eval(p));
    }

    #[test]
    fn handle_outlives_constructing_scope() {
        let f = {
            let offset = 10.0;
            Field::new(move |p: Point| p.x + offset)
        };
        assert_eq!(f.eval(Point::new(1.0, 0.0)), 11.0);
    }

    #[test]
    fn into_fn_evaluates_like_the_field() {
        let f = Field::new(|p: Point| p.y.floor());
        let g = f.clone().into_fn();
        assert_eq!(g(Point::new(0.0, 2.7)), f.eval(Point::new(0.0, 2.7)));
    }
}
