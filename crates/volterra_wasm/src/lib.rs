//! WASM bridge for the volterra core library.
//!
//! A browser front end calls [`integrate`] again every time a control changes;
//! nothing computed here outlives the returned [`WasmTrajectory`].

pub mod scenario;
pub mod trajectory;

pub use scenario::{clamp_parameters, default_parameters, parameter_ranges, reference_scenario};
pub use trajectory::{integrate, step_state, WasmTrajectory};

use wasm_bindgen::JsValue;

pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
