//! Serializable run descriptions and the recommended parameter bounds used by
//! interactive front ends.

use crate::error::IntegrationError;
use crate::model::LotkaVolterra;
use crate::solvers::Method;
use crate::state::State;
use crate::trajectory::{integrate, TimeGrid, Trajectory};
use serde::{Deserialize, Serialize};

/// Everything needed to reproduce one run.
///
/// Missing fields deserialize to the reference scenario: alpha=1.0, beta=1.2,
/// gamma=4.0, delta=1.0, T=15.0, dt=0.01, (x0, y0)=(10.0, 2.0), Euler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub method: Method,
    pub parameters: LotkaVolterra<f64>,
    pub grid: TimeGrid<f64>,
    pub initial: State<f64>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            method: Method::Euler,
            parameters: LotkaVolterra::default(),
            grid: TimeGrid::default(),
            initial: State::new(10.0, 2.0),
        }
    }
}

impl Scenario {
    pub fn with_method(self, method: Method) -> Self {
        Self { method, ..self }
    }

    pub fn with_parameters(self, parameters: LotkaVolterra<f64>) -> Self {
        Self { parameters, ..self }
    }

    /// Computes a fresh trajectory. Nothing is cached between calls.
    pub fn run(&self) -> Result<Trajectory<f64>, IntegrationError> {
        integrate(&self.parameters, self.method, &self.grid, self.initial)
    }
}

/// Recommended slider interval for one parameter. Advisory only: the
/// integrators accept any value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// NaN maps to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRanges {
    pub alpha: ParameterRange,
    pub beta: ParameterRange,
    pub gamma: ParameterRange,
    pub delta: ParameterRange,
}

impl ParameterRanges {
    pub const RECOMMENDED: ParameterRanges = ParameterRanges {
        alpha: ParameterRange::new(0.0, 4.0, 1.0),
        beta: ParameterRange::new(0.001, 6.0, 1.2),
        gamma: ParameterRange::new(1.0, 10.0, 4.0),
        delta: ParameterRange::new(0.0, 5.0, 1.0),
    };

    pub fn defaults(&self) -> LotkaVolterra<f64> {
        LotkaVolterra::new(
            self.alpha.default,
            self.beta.default,
            self.gamma.default,
            self.delta.default,
        )
    }

    pub fn contains(&self, parameters: &LotkaVolterra<f64>) -> bool {
        self.alpha.contains(parameters.alpha)
            && self.beta.contains(parameters.beta)
            && self.gamma.contains(parameters.gamma)
            && self.delta.contains(parameters.delta)
    }

    /// Pulls each parameter into its slider interval.
    pub fn clamp(&self, parameters: &LotkaVolterra<f64>) -> LotkaVolterra<f64> {
        LotkaVolterra::new(
            self.alpha.clamp(parameters.alpha),
            self.beta.clamp(parameters.beta),
            self.gamma.clamp(parameters.gamma),
            self.delta.clamp(parameters.delta),
        )
    }
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}
