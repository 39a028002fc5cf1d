//! Function-composition kernel.
//!
//! Two higher-order operations carry the whole crate: [`compose`] chains
//! unary functions left to right, and [`lift`] applies an n-ary combining
//! function to the pointwise results of several functions evaluated at the
//! same input. Every transform in this crate is `compose((remap, field))`
//! and every compositing operator is `lift(selector, (fields...))`.
//!
//! Operands are passed as tuples, so the operand count is fixed when the
//! composition is constructed, not dispatched at evaluation time. Impls
//! cover tuples up to arity 6.

/// A tuple of unary functions applied in sequence, left to right.
///
/// Each stage's output type must match the next stage's input type; the
/// compiler enforces this through the per-arity impls. The empty tuple is
/// the identity chain.
pub trait Chain<X> {
    /// Result of feeding `X` through every stage.
    type Output;

    /// Apply every stage in order.
    fn apply(&self, x: X) -> Self::Output;
}

impl<X> Chain<X> for () {
    type Output = X;

    fn apply(&self, x: X) -> X {
        x
    }
}

impl<X, F1, R1> Chain<X> for (F1,)
where
    F1: Fn(X) -> R1,
{
    type Output = R1;

    fn apply(&self, x: X) -> R1 {
        (self.0)(x)
    }
}

impl<X, F1, R1, F2, R2> Chain<X> for (F1, F2)
where
    F1: Fn(X) -> R1,
    F2: Fn(R1) -> R2,
{
    type Output = R2;

    fn apply(&self, x: X) -> R2 {
        (self.1)((self.0)(x))
    }
}

impl<X, F1, R1, F2, R2, F3, R3> Chain<X> for (F1, F2, F3)
where
    F1: Fn(X) -> R1,
    F2: Fn(R1) -> R2,
    F3: Fn(R2) -> R3,
{
    type Output = R3;

    fn apply(&self, x: X) -> R3 {
        (self.2)((self.1)((self.0)(x)))
    }
}

impl<X, F1, R1, F2, R2, F3, R3, F4, R4> Chain<X> for (F1, F2, F3, F4)
where
    F1: Fn(X) -> R1,
    F2: Fn(R1) -> R2,
    F3: Fn(R2) -> R3,
    F4: Fn(R3) -> R4,
{
    type Output = R4;

    fn apply(&self, x: X) -> R4 {
        (self.3)((self.2)((self.1)((self.0)(x))))
    }
}

impl<X, F1, R1, F2, R2, F3, R3, F4, R4, F5, R5> Chain<X> for (F1, F2, F3, F4, F5)
where
    F1: Fn(X) -> R1,
    F2: Fn(R1) -> R2,
    F3: Fn(R2) -> R3,
    F4: Fn(R3) -> R4,
    F5: Fn(R4) -> R5,
{
    type Output = R5;

    fn apply(&self, x: X) -> R5 {
        (self.4)((self.3)((self.2)((self.1)((self.0)(x)))))
    }
}

impl<X, F1, R1, F2, R2, F3, R3, F4, R4, F5, R5, F6, R6> Chain<X> for (F1, F2, F3, F4, F5, F6)
where
    F1: Fn(X) -> R1,
    F2: Fn(R1) -> R2,
    F3: Fn(R2) -> R3,
    F4: Fn(R3) -> R4,
    F5: Fn(R4) -> R5,
    F6: Fn(R5) -> R6,
{
    type Output = R6;

    fn apply(&self, x: X) -> R6 {
        (self.5)((self.4)((self.3)((self.2)((self.1)((self.0)(x))))))
    }
}

/// Build the left-to-right composition of `stages`.
///
/// `compose(())` is the identity function, and `compose((f, g))(x)` equals
/// `g(f(x))`: sequential application order, not mathematical right-to-left
/// notation. Construction allocates nothing beyond the returned closure.
pub fn compose<X, S>(stages: S) -> impl Fn(X) -> S::Output
where
    S: Chain<X>,
{
    move |x| stages.apply(x)
}

/// A tuple of functions of a shared input, combined by an n-ary function.
///
/// Arity of the combining function matches the tuple arity; the per-arity
/// impls enforce this at compile time.
pub trait Operands<X, F> {
    /// Result of combining the tuple's outputs with `F`.
    type Output;

    /// Evaluate every operand at `x`, then combine the results with `f`.
    fn combine(&self, f: &F, x: X) -> Self::Output;
}

impl<X, F, G1, R1, O> Operands<X, F> for (G1,)
where
    G1: Fn(X) -> R1,
    F: Fn(R1) -> O,
{
    type Output = O;

    fn combine(&self, f: &F, x: X) -> O {
        f((self.0)(x))
    }
}

impl<X, F, G1, R1, G2, R2, O> Operands<X, F> for (G1, G2)
where
    X: Clone,
    G1: Fn(X) -> R1,
    G2: Fn(X) -> R2,
    F: Fn(R1, R2) -> O,
{
    type Output = O;

    fn combine(&self, f: &F, x: X) -> O {
        f((self.0)(x.clone()), (self.1)(x))
    }
}

impl<X, F, G1, R1, G2, R2, G3, R3, O> Operands<X, F> for (G1, G2, G3)
where
    X: Clone,
    G1: Fn(X) -> R1,
    G2: Fn(X) -> R2,
    G3: Fn(X) -> R3,
    F: Fn(R1, R2, R3) -> O,
{
    type Output = O;

    fn combine(&self, f: &F, x: X) -> O {
        f((self.0)(x.clone()), (self.1)(x.clone()), (self.2)(x))
    }
}

impl<X, F, G1, R1, G2, R2, G3, R3, G4, R4, O> Operands<X, F> for (G1, G2, G3, G4)
where
    X: Clone,
    G1: Fn(X) -> R1,
    G2: Fn(X) -> R2,
    G3: Fn(X) -> R3,
    G4: Fn(X) -> R4,
    F: Fn(R1, R2, R3, R4) -> O,
{
    type Output = O;

    fn combine(&self, f: &F, x: X) -> O {
        f(
            (self.0)(x.clone()),
            (self.1)(x.clone()),
            (self.2)(x.clone()),
            (self.3)(x),
        )
    }
}

impl<X, F, G1, R1, G2, R2, G3, R3, G4, R4, G5, R5, O> Operands<X, F> for (G1, G2, G3, G4, G5)
where
    X: Clone,
    G1: Fn(X) -> R1,
    G2: Fn(X) -> R2,
    G3: Fn(X) -> R3,
    G4: Fn(X) -> R4,
    G5: Fn(X) -> R5,
    F: Fn(R1, R2, R3, R4, R5) -> O,
{
    type Output = O;

    fn combine(&self, f: &F, x: X) -> O {
        f(
            (self.0)(x.clone()),
            (self.1)(x.clone()),
            (self.2)(x.clone()),
            (self.3)(x.clone()),
            (self.4)(x),
        )
    }
}

impl<X, F, G1, R1, G2, R2, G3, R3, G4, R4, G5, R5, G6, R6, O> Operands<X, F>
    for (G1, G2, G3, G4, G5, G6)
where
    X: Clone,
    G1: Fn(X) -> R1,
    G2: Fn(X) -> R2,
    G3: Fn(X) -> R3,
    G4: Fn(X) -> R4,
    G5: Fn(X) -> R5,
    G6: Fn(X) -> R6,
    F: Fn(R1, R2, R3, R4, R5, R6) -> O,
{
    type Output = O;

    fn combine(&self, f: &F, x: X) -> O {
        f(
            (self.0)(x.clone()),
            (self.1)(x.clone()),
            (self.2)(x.clone()),
            (self.3)(x.clone()),
            (self.4)(x.clone()),
            (self.5)(x),
        )
    }
}

/// Apply `f` to the pointwise results of every operand at the same input.
///
/// `lift(f, (g1, g2))(x)` equals `f(g1(x), g2(x))`. Operands are evaluated
/// exactly once per call, in tuple order.
pub fn lift<X, F, G>(f: F, operands: G) -> impl Fn(X) -> G::Output
where
    G: Operands<X, F>,
{
    move |x| operands.combine(&f, x)
}
