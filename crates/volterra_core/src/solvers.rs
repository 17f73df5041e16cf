use crate::error::IntegrationError;
use crate::state::State;
use crate::traits::{Scalar, Steppable, VectorField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One explicit Euler step: `u + dt f(u)`.
pub fn euler_step<T: Scalar>(field: &impl VectorField<T>, state: &State<T>, dt: T) -> State<T> {
    *state + field.derivative(state) * dt
}

/// One classic fourth-order Runge-Kutta step.
pub fn rk4_step<T: Scalar>(field: &impl VectorField<T>, state: &State<T>, dt: T) -> State<T> {
    let half = dt * T::lit(0.5);
    let two = T::lit(2.0);

    // k1 = f(y)
    let k1 = field.derivative(state);
    // k2 = f(y + dt*k1/2)
    let k2 = field.derivative(&(*state + k1 * half));
    // k3 = f(y + dt*k2/2)
    let k3 = field.derivative(&(*state + k2 * half));
    // k4 = f(y + dt*k3)
    let k4 = field.derivative(&(*state + k3 * dt));

    // y_next = y + dt/6 * (k1 + 2k2 + 2k3 + k4)
    *state + (k1 + k2 * two + k3 * two + k4) * (dt / T::lit(6.0))
}

/// Forward Euler Solver
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardEuler;

impl<T: Scalar> Steppable<T> for ForwardEuler {
    fn step(&self, field: &impl VectorField<T>, state: &State<T>, dt: T) -> State<T> {
        euler_step(field, state, dt)
    }
}

/// Classic Runge-Kutta 4th Order Solver
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4;

impl<T: Scalar> Steppable<T> for RK4 {
    fn step(&self, field: &impl VectorField<T>, state: &State<T>, dt: T) -> State<T> {
        rk4_step(field, state, dt)
    }
}

/// Selects which fixed-step scheme a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Euler,
    Rk4,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Euler, Method::Rk4];

    pub fn name(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Rk4 => "rk4",
        }
    }

    /// Order of the global truncation error.
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Rk4 => 4,
        }
    }
}

impl<T: Scalar> Steppable<T> for Method {
    fn step(&self, field: &impl VectorField<T>, state: &State<T>, dt: T) -> State<T> {
        match self {
            Method::Euler => ForwardEuler.step(field, state, dt),
            Method::Rk4 => RK4.step(field, state, dt),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = IntegrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" | "forward_euler" => Ok(Method::Euler),
            "rk4" => Ok(Method::Rk4),
            _ => Err(IntegrationError::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{euler_step, rk4_step, ForwardEuler, Method, RK4};
    use crate::model::LotkaVolterra;
    use crate::state::State;
    use crate::traits::Steppable;
    use approx::assert_relative_eq;

    #[test]
    fn euler_step_matches_hand_computed_values() {
        let system = LotkaVolterra::new(1.0, 1.2, 4.0, 1.0);
        let next = euler_step(&system, &State::new(10.0, 2.0), 0.01);
        assert_relative_eq!(next.x, 9.86, epsilon = 1e-12);
        assert_relative_eq!(next.y, 2.12, epsilon = 1e-12);
    }

    #[test]
    fn rk4_step_is_exact_for_linear_growth() {
        // y' = y over one step of size h gives 1 + h + h^2/2 + h^3/6 + h^4/24.
        let growth = |s: &State<f64>| *s;
        let h: f64 = 0.1;
        let next = rk4_step(&growth, &State::new(1.0, 2.0), h);
        let taylor = 1.0 + h + h * h / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert_relative_eq!(next.x, taylor, epsilon = 1e-14);
        assert_relative_eq!(next.y, 2.0 * taylor, epsilon = 1e-14);
    }

    #[test]
    fn rk4_integrates_exponential_growth() {
        let growth = |s: &State<f64>| *s * 2.0;
        let mut state = State::new(1.0, 1.0);
        for _ in 0..1000 {
            state = rk4_step(&growth, &state, 1.0 / 1000.0);
        }
        assert!((state.x - f64::exp(2.0)).abs() <= 1e-8);
        assert_eq!(state.x, state.y);
    }

    #[test]
    fn both_steppers_fix_the_state_with_zero_parameters() {
        let system = LotkaVolterra::new(0.0, 0.0, 0.0, 0.0);
        let start = State::new(10.0, 2.0);
        assert_eq!(ForwardEuler.step(&system, &start, 0.5), start);
        assert_eq!(RK4.step(&system, &start, 0.5), start);
    }

    #[test]
    fn method_dispatch_matches_free_functions() {
        let system = LotkaVolterra::new(1.0, 1.2, 4.0, 1.0);
        let start = State::new(10.0, 2.0);
        assert_eq!(
            Method::Euler.step(&system, &start, 0.01),
            euler_step(&system, &start, 0.01)
        );
        assert_eq!(
            Method::Rk4.step(&system, &start, 0.01),
            rk4_step(&system, &start, 0.01)
        );
    }

    #[test]
    fn euler_step_does_not_clamp_negative_populations() {
        let system = LotkaVolterra::new(1.0, 1.2, 4.0, 1.0);
        let next = euler_step(&system, &State::new(10.0, 2.0), 1.0);
        assert_relative_eq!(next.x, -4.0, epsilon = 1e-12);
        assert_relative_eq!(next.y, 14.0, epsilon = 1e-12);
    }

    #[test]
    fn method_names_parse_back() {
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>().unwrap(), method);
            assert_eq!(method.to_string(), method.name());
        }
        assert_eq!(" RK4 ".parse::<Method>().unwrap(), Method::Rk4);
        assert_eq!("forward_euler".parse::<Method>().unwrap(), Method::Euler);
        let err = "tsit5".parse::<Method>().expect_err("expected unknown method");
        assert!(err.to_string().contains("tsit5"));
    }

    #[test]
    fn method_orders() {
        assert_eq!(Method::Euler.order(), 1);
        assert_eq!(Method::Rk4.order(), 4);
    }
}
