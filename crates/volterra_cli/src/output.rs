use anyhow::Result;
use serde::{Serialize, Serializer};
use std::io::Write;
use volterra_core::trajectory::Trajectory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(Format::Csv),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// One line of CSV output.
#[derive(Debug, Clone, Copy, Serialize)]
struct Row {
    t: f64,
    x: f64,
    y: f64,
}

/// JSON has no literal for infinities or NaN; those are written as the
/// strings `"inf"`, `"-inf"` and `"NaN"` instead of collapsing to `null`.
#[derive(Debug, Clone, Copy)]
struct Real(f64);

impl Serialize for Real {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.collect_str(&self.0)
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonState {
    x: Real,
    y: Real,
}

#[derive(Debug, Serialize)]
struct JsonTrajectory {
    times: Vec<Real>,
    states: Vec<JsonState>,
}

impl From<&Trajectory<f64>> for JsonTrajectory {
    fn from(trajectory: &Trajectory<f64>) -> Self {
        Self {
            times: trajectory.times().iter().copied().map(Real).collect(),
            states: trajectory
                .states()
                .iter()
                .map(|s| JsonState {
                    x: Real(s.x),
                    y: Real(s.y),
                })
                .collect(),
        }
    }
}

pub fn write_trajectory(
    trajectory: &Trajectory<f64>,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        Format::Csv => write_csv(trajectory, out),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonTrajectory::from(trajectory))?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Header `t,x,y`, then one row per sample.
fn write_csv(trajectory: &Trajectory<f64>, out: &mut impl Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for (t, state) in trajectory.iter() {
        writer.serialize(Row {
            t,
            x: state.x,
            y: state.y,
        })?;
    }
    writer.flush()?;
    Ok(())
}
