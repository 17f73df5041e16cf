use crate::error::IntegrationError;
use crate::model::LotkaVolterra;
use crate::solvers::Method;
use crate::state::State;
use crate::traits::{Scalar, Steppable, VectorField};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of samples a single run may allocate.
pub const MAX_SAMPLES: usize = 1 << 27;

/// Uniform time grid `0, dt, 2 dt, ...` up to `final_time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Scalar + Deserialize<'de>"))]
pub struct TimeGrid<T> {
    pub final_time: T,
    pub dt: T,
}

impl<T: Scalar> TimeGrid<T> {
    pub fn new(final_time: T, dt: T) -> Self {
        Self { final_time, dt }
    }

    /// Number of samples, `floor(final_time / dt) + 1`.
    pub fn samples(&self) -> Result<usize, IntegrationError> {
        let dt = to_f64(self.dt);
        let final_time = to_f64(self.final_time);
        if !self.dt.is_finite() {
            return Err(IntegrationError::NonFiniteStep(dt));
        }
        if self.dt <= T::zero() {
            return Err(IntegrationError::NonPositiveStep(dt));
        }
        if !self.final_time.is_finite() || self.final_time < T::zero() {
            return Err(IntegrationError::InvalidFinalTime(final_time));
        }

        (self.final_time / self.dt)
            .floor()
            .to_usize()
            .and_then(|steps| steps.checked_add(1))
            .filter(|&samples| samples <= MAX_SAMPLES)
            .ok_or(IntegrationError::TooManySteps { final_time, dt })
    }

    /// Time stamp of sample `index`, computed as `index * dt` rather than by
    /// accumulation so every stamp is exact to one rounding.
    pub fn time_at(&self, index: usize) -> T {
        T::from_usize(index).unwrap_or_else(T::nan) * self.dt
    }
}

impl<T: Scalar> Default for TimeGrid<T> {
    fn default() -> Self {
        Self::new(T::lit(15.0), T::lit(0.01))
    }
}

/// Time series produced by one run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory<T> {
    times: Vec<T>,
    states: Vec<State<T>>,
}

impl<T: Scalar> Trajectory<T> {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn times(&self) -> &[T] {
        &self.times
    }

    pub fn states(&self) -> &[State<T>] {
        &self.states
    }

    /// Prey series x(t).
    pub fn x_series(&self) -> Vec<T> {
        self.states.iter().map(|s| s.x).collect()
    }

    /// Predator series y(t).
    pub fn y_series(&self) -> Vec<T> {
        self.states.iter().map(|s| s.y).collect()
    }

    /// (x, y) pairs for a phase-plane plot.
    pub fn phase_plane(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.states.iter().map(|s| (s.x, s.y))
    }

    /// (t, state) pairs in step order.
    pub fn iter(&self) -> impl Iterator<Item = (T, State<T>)> + '_ {
        self.times.iter().copied().zip(self.states.iter().copied())
    }

    pub fn initial(&self) -> Option<&State<T>> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&State<T>> {
        self.states.last()
    }

    /// Splits into `(x_series, y_series, t_series)`.
    pub fn into_series(self) -> (Vec<T>, Vec<T>, Vec<T>) {
        let (xs, ys) = self.states.iter().map(|s| (s.x, s.y)).unzip();
        (xs, ys, self.times)
    }
}

/// Runs `stepper` over `grid`, starting from `initial` at t = 0.
///
/// The first sample is `initial` itself; every later sample is one step of
/// the previous one. No clamping or finiteness checks are applied to states.
pub fn integrate_with<T, S, F>(
    stepper: &S,
    field: &F,
    grid: &TimeGrid<T>,
    initial: State<T>,
) -> Result<Trajectory<T>, IntegrationError>
where
    T: Scalar,
    S: Steppable<T>,
    F: VectorField<T>,
{
    let samples = grid.samples()?;
    let mut times = Vec::with_capacity(samples);
    let mut states = Vec::with_capacity(samples);

    let mut state = initial;
    times.push(grid.time_at(0));
    states.push(state);
    for index in 1..samples {
        state = stepper.step(field, &state, grid.dt);
        times.push(grid.time_at(index));
        states.push(state);
    }

    Ok(Trajectory { times, states })
}

/// Integrates the Lotka-Volterra system with the chosen method.
pub fn integrate<T: Scalar>(
    system: &LotkaVolterra<T>,
    method: Method,
    grid: &TimeGrid<T>,
    initial: State<T>,
) -> Result<Trajectory<T>, IntegrationError> {
    log::debug!(
        "integrating with {method}: final_time={:?} dt={:?} initial={:?}",
        grid.final_time,
        grid.dt,
        initial
    );
    let trajectory = integrate_with(&method, system, grid, initial)?;
    log::debug!("{method} run finished with {} samples", trajectory.len());
    Ok(trajectory)
}

/// Flat form of [`integrate`] returning `(x_series, y_series, t_series)`.
#[allow(clippy::too_many_arguments)]
pub fn integrate_series<T: Scalar>(
    method: Method,
    alpha: T,
    beta: T,
    gamma: T,
    delta: T,
    final_time: T,
    dt: T,
    x0: T,
    y0: T,
) -> Result<(Vec<T>, Vec<T>, Vec<T>), IntegrationError> {
    let system = LotkaVolterra::new(alpha, beta, gamma, delta);
    let grid = TimeGrid::new(final_time, dt);
    integrate(&system, method, &grid, State::new(x0, y0)).map(Trajectory::into_series)
}

fn to_f64<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
