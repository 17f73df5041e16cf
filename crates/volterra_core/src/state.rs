use crate::traits::Scalar;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Point in the (prey, predator) plane.
///
/// Components are plain reals: nothing here keeps them non-negative, so an
/// integrator taking large steps can and will walk into negative populations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State<T> {
    /// Prey population.
    pub x: T,
    /// Predator population.
    pub y: T,
}

impl<T: Scalar> State<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn norm(&self) -> T {
        self.x.hypot(self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Scalar> Add for State<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for State<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul<T> for State<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Neg for State<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> From<[T; 2]> for State<T> {
    fn from(value: [T; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl<T: Scalar> From<State<T>> for [T; 2] {
    fn from(value: State<T>) -> Self {
        [value.x, value.y]
    }
}
