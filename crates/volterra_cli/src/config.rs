use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use volterra_core::scenario::Scenario;
use volterra_core::solvers::Method;

/// Configuration file format for the volterra executable.
///
/// Every key is optional; missing keys take the reference scenario's values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Verbosity of logging. Overridden by `--log-level`.
    pub log_level: Option<String>,
    #[serde(flatten)]
    pub scenario: Scenario,
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse config file")
    }

    /// Reads the file named by `--config`, or returns the reference run.
    pub fn load(matches: &ArgMatches) -> Result<Self> {
        let Some(path) = matches.get_one::<String>("config") else {
            return Ok(Self::default());
        };

        let source =
            std::fs::read_to_string(path).context(format!("Failed to read {} file", path))?;
        Self::from_toml(&source)
    }

    /// Command line flags take precedence over the file.
    pub fn apply_overrides(&mut self, matches: &ArgMatches) -> Result<()> {
        if let Some(method) = matches.get_one::<String>("method") {
            self.scenario = self.scenario.with_method(method.parse::<Method>()?);
        }

        let scenario = &mut self.scenario;
        let overrides: [(&str, &mut f64); 8] = [
            ("alpha", &mut scenario.parameters.alpha),
            ("beta", &mut scenario.parameters.beta),
            ("gamma", &mut scenario.parameters.gamma),
            ("delta", &mut scenario.parameters.delta),
            ("final-time", &mut scenario.grid.final_time),
            ("dt", &mut scenario.grid.dt),
            ("x0", &mut scenario.initial.x),
            ("y0", &mut scenario.initial.y),
        ];
        for (name, slot) in overrides {
            if let Some(&value) = matches.get_one::<f64>(name) {
                *slot = value;
            }
        }

        if let Some(level) = matches.get_one::<String>("log-level") {
            self.log_level = Some(level.clone());
        }

        Ok(())
    }

    pub fn log_filter(&self) -> Result<log::LevelFilter> {
        match &self.log_level {
            Some(level) => level
                .parse()
                .map_err(|_| anyhow!("Unknown logging level \"{}\"", level)),
            None => Ok(log::LevelFilter::Warn),
        }
    }
}
