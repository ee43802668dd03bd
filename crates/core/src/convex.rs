use std::any::{TypeId, type_name};
use std::fmt;
use std::marker::PhantomData;

use crate::LinearFunction;

/// A stable identity for an abstract convex function.
///
/// Implement this on a zero-sized marker type. The type owns its definition,
/// so a handle's type alone decides what it evaluates: a second definition
/// needs a second type. The pair (algebra type, [`Identity::NAME`]) selects
/// the minimizer used for subproblems built from a [`ConvexFunction`] with
/// this identity.
///
/// ```
/// use mirror_core::Identity;
///
/// struct HalfSquare;
///
/// impl Identity for HalfSquare {
///     const NAME: &'static str = "half_square";
///
///     fn definition(x: f64) -> f64 {
///         0.5 * x * x
///     }
/// }
/// ```
pub trait Identity: 'static {
    /// Name used for dispatch and diagnostics.
    const NAME: &'static str;

    /// The underlying convex function `ℝ → ℝ`.
    fn definition(x: f64) -> f64;
}

/// Key selecting a minimizer: an algebra type paired with an identity name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DispatchKey {
    algebra: TypeId,
    algebra_name: &'static str,
    name: &'static str,
}

impl DispatchKey {
    /// Returns the key for algebra `L` and identity `I`.
    #[must_use]
    pub fn of<L: 'static, I: Identity>() -> Self {
        Self {
            algebra: TypeId::of::<L>(),
            algebra_name: type_name::<L>(),
            name: I::NAME,
        }
    }

    /// Returns the algebra's type name.
    #[must_use]
    pub fn algebra(&self) -> &'static str {
        self.algebra_name
    }

    /// Returns the identity name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for DispatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.algebra_name, self.name)
    }
}

/// A typed handle for an abstract convex function over algebra `L`.
///
/// The handle is zero-sized: its algebra and identity live in its type, and
/// calling it evaluates [`Identity::definition`]. The type is also the
/// dispatch key for subproblem minimizers, so a minimizer registered for a
/// handle type always sees subproblems built from that one definition.
///
/// ```
/// use mirror_core::{ConvexFunction, Identity};
///
/// struct HalfSquare;
///
/// impl Identity for HalfSquare {
///     const NAME: &'static str = "half_square";
///
///     fn definition(x: f64) -> f64 {
///         0.5 * x * x
///     }
/// }
///
/// let phi = ConvexFunction::<f64, HalfSquare>::declare();
/// assert_eq!(phi.call(2.0), 2.0);
/// assert_eq!(phi.name(), "half_square");
/// ```
pub struct ConvexFunction<L, I> {
    marker: PhantomData<fn() -> (L, I)>,
}

impl<L, I> ConvexFunction<L, I>
where
    L: LinearFunction + 'static,
    I: Identity,
{
    /// Declares the convex function `I` over algebra `L`.
    #[must_use]
    pub fn declare() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Evaluates the underlying definition at `x`.
    #[must_use]
    pub fn call(&self, x: f64) -> f64 {
        I::definition(x)
    }

    /// Returns the identity name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        I::NAME
    }

    /// Returns the key used to select this function's minimizer.
    #[must_use]
    pub fn key() -> DispatchKey {
        DispatchKey::of::<L, I>()
    }
}

impl<L, I> Clone for ConvexFunction<L, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, I> Copy for ConvexFunction<L, I> {}

impl<L, I: Identity> fmt::Debug for ConvexFunction<L, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvexFunction")
            .field("algebra", &type_name::<L>())
            .field("name", &I::NAME)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Polynomial;

    struct HalfSquare;

    impl Identity for HalfSquare {
        const NAME: &'static str = "half_square";

        fn definition(x: f64) -> f64 {
            0.5 * x * x
        }
    }

    struct QuarterQuartic;

    impl Identity for QuarterQuartic {
        const NAME: &'static str = "quarter_quartic";

        fn definition(x: f64) -> f64 {
            0.25 * x.powi(4)
        }
    }

    struct AbsoluteValue;

    impl Identity for AbsoluteValue {
        const NAME: &'static str = "abs";

        fn definition(x: f64) -> f64 {
            x.abs()
        }
    }

    #[test]
    fn call_evaluates_definition() {
        let phi = ConvexFunction::<f64, HalfSquare>::declare();

        assert_relative_eq!(phi.call(-2.0), 2.0);
        assert_relative_eq!(phi.call(0.0), 0.0);
        assert_eq!(phi.name(), "half_square");
    }

    #[test]
    fn handle_type_fixes_the_definition() {
        // Every handle of one type evaluates the same function.
        let first = ConvexFunction::<f64, HalfSquare>::declare();
        let second = ConvexFunction::<f64, HalfSquare>::declare();
        for x in [-1.5, 0.0, 0.5, 2.0] {
            assert_eq!(first.call(x).to_bits(), second.call(x).to_bits());
        }

        // Another definition is another type, with its own key.
        let quartic = ConvexFunction::<f64, QuarterQuartic>::declare();
        assert_relative_eq!(quartic.call(2.0), 4.0);
        assert_relative_eq!(first.call(2.0), 2.0);
        assert_ne!(
            ConvexFunction::<f64, QuarterQuartic>::key(),
            ConvexFunction::<f64, HalfSquare>::key()
        );
        assert_eq!(std::mem::size_of::<ConvexFunction<f64, HalfSquare>>(), 0);
    }

    #[test]
    fn keys_distinguish_algebra_and_identity() {
        let scalar_square = ConvexFunction::<f64, HalfSquare>::key();
        let scalar_abs = ConvexFunction::<f64, AbsoluteValue>::key();
        let poly_square = ConvexFunction::<Polynomial<3>, HalfSquare>::key();

        assert_ne!(scalar_square, scalar_abs);
        assert_ne!(scalar_square, poly_square);
        assert_eq!(scalar_square, DispatchKey::of::<f64, HalfSquare>());
        assert_eq!(scalar_square.algebra(), "f64");
        assert_eq!(scalar_square.to_string(), "(f64, half_square)");
    }

    #[test]
    fn handles_are_copy() {
        let phi = ConvexFunction::<f64, AbsoluteValue>::declare();
        let copy = phi;

        assert_relative_eq!(phi.call(-3.0), copy.call(-3.0));
    }
}
