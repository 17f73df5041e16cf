use crate::state::State;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the integrators.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {
    /// Converts an f64 literal, yielding NaN if the type cannot represent it.
    fn lit(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }
}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// An autonomous vector field on the two-dimensional state space.
pub trait VectorField<T: Scalar> {
    /// Evaluates the instantaneous rate of change at `state`.
    fn derivative(&self, state: &State<T>) -> State<T>;
}

impl<T: Scalar, F: Fn(&State<T>) -> State<T>> VectorField<T> for F {
    fn derivative(&self, state: &State<T>) -> State<T> {
        self(state)
    }
}

/// A trait for fixed-step solvers that advance a state by one step.
pub trait Steppable<T: Scalar> {
    /// Returns the state one step of size `dt` after `state`.
    /// The input is never modified.
    fn step(&self, field: &impl VectorField<T>, state: &State<T>, dt: T) -> State<T>;
}
