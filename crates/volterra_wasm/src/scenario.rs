//! Constants a front end seeds its controls with.

use crate::js_error;
use serde_wasm_bindgen::to_value;
use volterra_core::scenario::{ParameterRanges, Scenario};
use volterra_core::LotkaVolterra;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn reference_scenario() -> Result<JsValue, JsValue> {
    to_value(&Scenario::default()).map_err(js_error)
}

#[wasm_bindgen]
pub fn parameter_ranges() -> Result<JsValue, JsValue> {
    to_value(&ParameterRanges::RECOMMENDED).map_err(js_error)
}

/// Slider defaults as `[alpha, beta, gamma, delta]`.
#[wasm_bindgen]
pub fn default_parameters() -> Vec<f64> {
    let defaults = ParameterRanges::RECOMMENDED.defaults();
    vec![defaults.alpha, defaults.beta, defaults.gamma, defaults.delta]
}

/// Clamps `[alpha, beta, gamma, delta]` into the recommended slider ranges.
#[wasm_bindgen]
pub fn clamp_parameters(alpha: f64, beta: f64, gamma: f64, delta: f64) -> Vec<f64> {
    let clamped =
        ParameterRanges::RECOMMENDED.clamp(&LotkaVolterra::new(alpha, beta, gamma, delta));
    vec![clamped.alpha, clamped.beta, clamped.gamma, clamped.delta]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_parameters_pulls_values_into_range() {
        assert_eq!(
            clamp_parameters(-1.0, 10.0, 0.0, 2.5),
            vec![0.0, 6.0, 1.0, 2.5]
        );
    }

    #[test]
    fn clamp_parameters_keeps_reference_values() {
        assert_eq!(clamp_parameters(1.0, 1.2, 4.0, 1.0), vec![1.0, 1.2, 4.0, 1.0]);
    }

    #[test]
    fn default_parameters_are_the_reference_set() {
        assert_eq!(default_parameters(), vec![1.0, 1.2, 4.0, 1.0]);
        let defaults = default_parameters();
        assert_eq!(
            clamp_parameters(defaults[0], defaults[1], defaults[2], defaults[3]),
            defaults
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::{parameter_ranges, reference_scenario};
    use serde_wasm_bindgen::from_value;
    use volterra_core::scenario::{ParameterRanges, Scenario};
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn reference_scenario_reads_back_as_the_default() {
        let value = reference_scenario().expect("serialization");
        let scenario: Scenario = from_value(value).expect("deserialization");
        assert_eq!(scenario, Scenario::default());
    }

    #[wasm_bindgen_test]
    fn parameter_ranges_read_back_as_recommended() {
        let value = parameter_ranges().expect("serialization");
        let ranges: ParameterRanges = from_value(value).expect("deserialization");
        assert_eq!(ranges, ParameterRanges::RECOMMENDED);
    }
}
