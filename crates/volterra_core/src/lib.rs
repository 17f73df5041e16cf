//! The `volterra_core` crate integrates the Lotka-Volterra predator-prey system with
//! fixed-step explicit schemes and hands the resulting trajectories to whatever front end
//! asked for them. Every entry point is a pure, synchronous function of its arguments.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `VectorField` (right-hand sides), `Steppable` (Solvers).
//! - **State**: the two-component vector the steppers do arithmetic on.
//! - **Model**: `LotkaVolterra`, the immutable parameter record and its derivative.
//! - **Solvers**: Forward Euler and RK4, as free functions and as `Method`.
//! - **Trajectory**: the fixed-horizon driver and its immutable output.
//! - **Scenario**: serializable run descriptions and recommended slider ranges.
pub mod error;
pub mod model;
pub mod scenario;
pub mod solvers;
pub mod state;
pub mod traits;
pub mod trajectory;

pub use error::IntegrationError;
pub use model::LotkaVolterra;
pub use scenario::{ParameterRange, ParameterRanges, Scenario};
pub use solvers::{euler_step, rk4_step, ForwardEuler, Method, RK4};
pub use state::State;
pub use trajectory::{integrate, integrate_series, integrate_with, TimeGrid, Trajectory};
