//! Recompute-on-demand entry points.

use crate::js_error;
use js_sys::Float64Array;
use serde_wasm_bindgen::to_value;
use volterra_core::solvers::Method;
use volterra_core::state::State;
use volterra_core::traits::Steppable;
use volterra_core::trajectory::{integrate as core_integrate, TimeGrid, Trajectory};
use volterra_core::LotkaVolterra;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTrajectory {
    method: Method,
    trajectory: Trajectory<f64>,
}

#[wasm_bindgen]
impl WasmTrajectory {
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    pub fn method(&self) -> String {
        self.method.to_string()
    }

    /// Convergence order of the scheme that produced the run.
    pub fn order(&self) -> u32 {
        self.method.order()
    }

    pub fn times(&self) -> Float64Array {
        Float64Array::from(self.trajectory.times())
    }

    pub fn prey(&self) -> Float64Array {
        Float64Array::from(self.trajectory.x_series().as_slice())
    }

    pub fn predators(&self) -> Float64Array {
        Float64Array::from(self.trajectory.y_series().as_slice())
    }

    /// Serializes to `{ times: number[], states: { x, y }[] }`.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        to_value(&self.trajectory)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl WasmTrajectory {
    pub fn trajectory(&self) -> &Trajectory<f64> {
        &self.trajectory
    }
}

/// Runs one complete integration from the arguments alone.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn integrate(
    method: &str,
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    final_time: f64,
    dt: f64,
    x0: f64,
    y0: f64,
) -> Result<WasmTrajectory, JsValue> {
    console_error_panic_hook::set_once();

    let method: Method = method.parse().map_err(js_error)?;
    let system = LotkaVolterra::new(alpha, beta, gamma, delta);
    let grid = TimeGrid::new(final_time, dt);
    let trajectory = core_integrate(&system, method, &grid, State::new(x0, y0))
        .map_err(|e| JsValue::from_str(&format!("Integration failed: {}", e)))?;

    Ok(WasmTrajectory { method, trajectory })
}

/// Single step of the chosen method; returns `[x, y]`.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn step_state(
    method: &str,
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    x: f64,
    y: f64,
    dt: f64,
) -> Result<Vec<f64>, JsValue> {
    let method: Method = method.parse().map_err(js_error)?;
    let system = LotkaVolterra::new(alpha, beta, gamma, delta);
    let next: [f64; 2] = method.step(&system, &State::new(x, y), dt).into();
    Ok(next.to_vec())
}
