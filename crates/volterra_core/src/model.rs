use crate::state::State;
use crate::traits::{Scalar, VectorField};
use serde::{Deserialize, Serialize};

/// Lotka-Volterra predator-prey system.
///
/// ```text
/// dx/dt =  x (alpha - beta y)
/// dy/dt = -y (gamma - delta x)
/// ```
///
/// The record is the whole parameter set of a run and is never mutated while
/// a trajectory is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Scalar + Deserialize<'de>"))]
pub struct LotkaVolterra<T> {
    /// Prey growth rate.
    pub alpha: T,
    /// Predation rate.
    pub beta: T,
    /// Predator death rate.
    pub gamma: T,
    /// Predator growth rate from predation.
    pub delta: T,
}

impl<T: Scalar> LotkaVolterra<T> {
    pub fn new(alpha: T, beta: T, gamma: T, delta: T) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            delta,
        }
    }

    /// Right-hand side at `state`. Defined for every real input, negative
    /// populations included.
    pub fn derivative(&self, state: &State<T>) -> State<T> {
        let State { x, y } = *state;
        State::new(
            x * (self.alpha - self.beta * y),
            -y * (self.gamma - self.delta * x),
        )
    }
}

impl<T: Scalar> Default for LotkaVolterra<T> {
    fn default() -> Self {
        Self::new(T::lit(1.0), T::lit(1.2), T::lit(4.0), T::lit(1.0))
    }
}

impl<T: Scalar> VectorField<T> for LotkaVolterra<T> {
    fn derivative(&self, state: &State<T>) -> State<T> {
        LotkaVolterra::derivative(self, state)
    }
}

#[cfg(test)]
mod tests {
    use super::LotkaVolterra;
    use crate::state::State;
    use approx::assert_relative_eq;

    #[test]
    fn derivative_matches_closed_form() {
        let system = LotkaVolterra::new(1.0, 1.2, 4.0, 1.0);
        let rate = system.derivative(&State::new(10.0, 2.0));
        assert_relative_eq!(rate.x, 10.0 * (1.0 - 1.2 * 2.0), epsilon = 1e-12);
        assert_relative_eq!(rate.y, -2.0 * (4.0 - 10.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_parameters_give_zero_derivative_everywhere() {
        let system = LotkaVolterra::new(0.0, 0.0, 0.0, 0.0);
        for state in [
            State::new(10.0, 2.0),
            State::new(-3.0, 7.5),
            State::new(0.0, 0.0),
            State::new(1e6, -1e6),
        ] {
            let rate = system.derivative(&state);
            assert_eq!(rate.x, 0.0);
            assert_eq!(rate.y, 0.0);
        }
    }

    #[test]
    fn coexistence_point_is_stationary() {
        let system = LotkaVolterra::new(1.0, 1.2, 4.0, 1.0);
        let rate = system.derivative(&State::new(4.0, 1.0 / 1.2));
        assert_relative_eq!(rate.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rate.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_states_are_not_rejected() {
        let system = LotkaVolterra::new(1.0, 1.2, 4.0, 1.0);
        let rate = system.derivative(&State::new(-4.0, 14.0));
        assert_relative_eq!(rate.x, -4.0 * (1.0 - 1.2 * 14.0), epsilon = 1e-12);
        assert_relative_eq!(rate.y, -14.0 * (4.0 + 4.0), epsilon = 1e-12);
    }

    #[test]
    fn default_is_reference_parameter_set() {
        let system: LotkaVolterra<f64> = LotkaVolterra::default();
        assert_eq!(system, LotkaVolterra::new(1.0, 1.2, 4.0, 1.0));
    }
}
