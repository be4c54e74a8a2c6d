use crate::objective::ObjectiveFunction;
use crate::trace::{DescentTrace, IterationRecord};
use descent_common::numeric::{floor5, magnitude};
use thiserror::Error;

pub struct SteepestParams {
    pub max_iterations: usize,
    pub step_size: f64,
    pub tolerance: f64,
}

/// Plain steepest descent with a fixed step size. Every scalar feeding
/// the coordinate update is truncated with [`floor5`] first; skipping the
/// truncation anywhere yields a different trajectory.
pub struct SteepestDescent {
    params: SteepestParams,
    grad: Vec<f64>,
}

#[derive(Debug, Error, PartialEq)]
pub enum DescentError {
    #[error("initial point is empty")]
    EmptyPoint,
    #[error("point carries {actual} coordinates but the solver was sized for {expected}")]
    DimensionalityMismatch { expected: usize, actual: usize },
    #[error("{function} needs at least {minimum} coordinates, got {actual}")]
    TooFewCoordinates {
        function: &'static str,
        minimum: usize,
        actual: usize,
    },
}

/// Terminal outcome of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Converged { iterations: usize },
    Exhausted { iterations: usize },
}

impl Verdict {
    pub fn converged(&self) -> bool {
        matches!(self, Verdict::Converged { .. })
    }
}

impl SteepestDescent {
    pub fn new(params: SteepestParams, dimensionality: usize) -> Self {
        Self {
            params,
            grad: vec![0.0; dimensionality],
        }
    }

    /// Minimizes `objective` from `x`, mutating the point in place, and
    /// reports every iteration through `trace`.
    ///
    /// Callers validate run parameters upstream; the structural contract
    /// is still enforced here so the solver never indexes out of range.
    pub fn optimize(
        &mut self,
        objective: &ObjectiveFunction,
        x: &mut [f64],
        trace: &mut dyn DescentTrace,
    ) -> Result<Verdict, DescentError> {
        if x.is_empty() {
            return Err(DescentError::EmptyPoint);
        }
        if x.len() != self.grad.len() {
            return Err(DescentError::DimensionalityMismatch {
                expected: self.grad.len(),
                actual: x.len(),
            });
        }
        if x.len() < objective.min_dimensionality() {
            return Err(DescentError::TooFewCoordinates {
                function: objective.name(),
                minimum: objective.min_dimensionality(),
                actual: x.len(),
            });
        }

        // Iteration 1 reports the initial state; no gradient is taken and
        // no convergence test runs.
        trace.record(IterationRecord {
            iteration: 1,
            value: objective.value(x),
            point: x,
            gradient_magnitude: None,
        });

        for n in 2..=self.params.max_iterations {
            objective.gradient_into(x, &mut self.grad);

            for (xi, gi) in x.iter_mut().zip(self.grad.iter()) {
                *xi = floor5(*xi) - self.params.step_size * floor5(*gi);
            }
            if let ObjectiveFunction::Quadratic = objective {
                // Quadratic runs additionally step one ULP toward negative
                // infinity after the update; recorded legacy trajectories
                // depend on it.
                for xi in x.iter_mut() {
                    *xi = xi.next_down();
                }
            }

            // Convergence is judged on the gradient taken before the
            // update, not one recomputed at the new point.
            let value = objective.value(x);
            let grad_magnitude = magnitude(&self.grad);

            trace.record(IterationRecord {
                iteration: n,
                value,
                point: x,
                gradient_magnitude: Some(grad_magnitude),
            });

            if grad_magnitude < self.params.tolerance {
                log::info!(
                    "Converged: gradient magnitude {:e} below tolerance at iteration {}",
                    grad_magnitude,
                    n
                );
                return Ok(Verdict::Converged { iterations: n });
            }
        }

        log::warn!("Iteration cap reached without meeting the tolerance.");
        Ok(Verdict::Exhausted {
            iterations: self.params.max_iterations,
        })
    }
}
