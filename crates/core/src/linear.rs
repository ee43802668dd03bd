use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// An element of an abstract algebra of "linear" functions over the domain.
///
/// Mirror descent never looks at raw gradients. It works entirely with values
/// of a user-chosen vector space `L` of real-valued functionals, which only
/// need to support the vector-space operations and evaluation at a point.
///
/// Implementors must keep the representation linear:
///
/// ```text
/// (u + v)(x) = u(x) + v(x)
/// (u - v)(x) = u(x) - v(x)
/// (-u)(x)    = -u(x)
/// (u * s)(x) = s * u(x)
/// ```
///
/// The engine relies on these identities but does not check them.
///
/// Negation must be fully defined for every value, and every operation must
/// be closed over `Self`. Values are treated as immutable: each iteration
/// builds new values rather than mutating old ones.
///
/// Left scalar multiplication (`s * u`) cannot be required by a trait bound
/// on `Self`, so concrete algebras are encouraged to also implement
/// `Mul<Self> for f64`. Generic code uses [`LinearFunction::scale`].
pub trait LinearFunction:
    Clone
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
{
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Returns `true` if every component of the representation is finite.
    ///
    /// Used to reject values produced from NaN or infinite inputs.
    fn is_finite(&self) -> bool;

    /// Returns `s · self`.
    #[must_use]
    fn scale(&self, s: f64) -> Self {
        self.clone() * s
    }
}

/// The scalar algebra `L = ℝ`, where the value `a` represents `x ↦ a·x`.
impl LinearFunction for f64 {
    fn eval(&self, x: f64) -> f64 {
        self * x
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}
