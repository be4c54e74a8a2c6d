use crate::run::core::RunSetup;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
    #[error("dimensionality must be at least 1")]
    NonPositiveDimensionality,
    #[error("iteration cap must be at least 1")]
    NonPositiveIterations,
    #[error("initial point carries {actual} coordinates, expected {expected}")]
    DimensionalityMismatch { expected: usize, actual: usize },
    #[error("{function} requires dimensionality of at least {minimum}")]
    DimensionalityTooSmall {
        function: &'static str,
        minimum: usize,
    },
    #[error("initial point coordinate {value} is outside the bounds [{low}, {high}]")]
    OutOfBounds { value: f64, low: f64, high: f64 },
}

/// Refuses a run setup that would violate the solver's preconditions.
/// `bounds` and `min_dimensionality` come from the selected objective
/// function; bounds apply to the initial point only, never mid-run.
pub fn run_setup_check(
    setup: &RunSetup,
    bounds: (f64, f64),
    min_dimensionality: usize,
    function: &'static str,
) -> Result<(), SetupError> {
    if setup.dimensionality == 0 {
        log::error!("FAIL: Dimensionality must be at least 1.");
        return Err(SetupError::NonPositiveDimensionality);
    }
    if setup.iterations == 0 {
        log::error!("FAIL: Iteration cap must be at least 1.");
        return Err(SetupError::NonPositiveIterations);
    }
    if setup.dimensionality < min_dimensionality {
        log::error!(
            "FAIL: {} needs at least {} coordinates.",
            function,
            min_dimensionality
        );
        return Err(SetupError::DimensionalityTooSmall {
            function,
            minimum: min_dimensionality,
        });
    }
    if setup.initial_point.len() != setup.dimensionality {
        log::error!(
            "FAIL: Initial point dimensionality mismatch ({} vs {}).",
            setup.initial_point.len(),
            setup.dimensionality
        );
        return Err(SetupError::DimensionalityMismatch {
            expected: setup.dimensionality,
            actual: setup.initial_point.len(),
        });
    }

    let (low, high) = bounds;
    for &value in &setup.initial_point {
        if value < low || value > high {
            log::error!(
                "FAIL: Initial point {} is outside the bounds [{}, {}].",
                value,
                low,
                high
            );
            return Err(SetupError::OutOfBounds { value, low, high });
        }
    }

    if setup.tolerance <= 0.0 {
        // Legal, but such a run can only hit the iteration cap; worth a
        // warning before a long wait.
        log::warn!(
            "Tolerance {} is not positive; the run cannot converge.",
            setup.tolerance
        );
    }

    Ok(())
}
