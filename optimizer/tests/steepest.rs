use descent_common::numeric::floor5;
use descent_optimizer::objective::ObjectiveFunction;
use descent_optimizer::solver::steepest::{DescentError, SteepestDescent, SteepestParams, Verdict};
use descent_optimizer::trace::{History, NullTrace};

fn params(max_iterations: usize, step_size: f64, tolerance: f64) -> SteepestParams {
    SteepestParams {
        max_iterations,
        step_size,
        tolerance,
    }
}

#[test]
fn quadratic_converges_inside_the_cap() {
    let objective = ObjectiveFunction::Quadratic;
    let mut solver = SteepestDescent::new(params(100, 0.1, 0.0001), 2);
    let mut x = vec![4.0, 4.0];
    let mut history = History::new();

    let verdict = solver.optimize(&objective, &mut x, &mut history).unwrap();

    assert!(verdict.converged());
    match verdict {
        Verdict::Converged { iterations } => assert!(iterations < 100),
        Verdict::Exhausted { .. } => unreachable!(),
    }

    // First iteration reports the initial state, no convergence signal.
    let first = &history.rows[0];
    assert_eq!(first.iteration, 1);
    assert_eq!(first.value, 32.0);
    assert_eq!(first.point, vec![4.0, 4.0]);
    assert!(first.gradient_magnitude.is_none());

    // Every later record carries the signal.
    assert!(history.rows[1..]
        .iter()
        .all(|row| row.gradient_magnitude.is_some()));

    // The objective value shrinks every iteration on this run.
    for pair in history.rows.windows(2) {
        assert!(
            pair[1].value < pair[0].value,
            "value rose from {} to {} at iteration {}",
            pair[0].value,
            pair[1].value,
            pair[1].iteration
        );
    }
}

#[test]
fn rosenbrock_first_iteration_matches_the_closed_form() {
    let objective = ObjectiveFunction::Rosenbrock;
    let mut solver = SteepestDescent::new(params(10, 0.001, 0.0001), 2);
    let mut x = vec![-1.2, 1.0];
    let mut history = History::new();

    solver.optimize(&objective, &mut x, &mut history).unwrap();

    let x1 = floor5(-1.2);
    let x2 = floor5(1.0);
    let expected = 100.0 * (x2 - x1 * x1).powi(2) + (1.0 - x1).powi(2);
    assert_eq!(history.rows[0].value, expected);
}

#[test]
fn small_cap_exhausts_instead_of_converging() {
    let objective = ObjectiveFunction::Quadratic;
    let mut solver = SteepestDescent::new(params(2, 0.1, 0.0001), 2);
    let mut x = vec![4.0, 4.0];
    let mut history = History::new();

    let verdict = solver.optimize(&objective, &mut x, &mut history).unwrap();

    assert_eq!(verdict, Verdict::Exhausted { iterations: 2 });
    assert!(!verdict.converged());
    assert_eq!(history.rows.len(), 2);
}

#[test]
fn cap_of_one_reports_only_the_initial_state() {
    let objective = ObjectiveFunction::Quadratic;
    let mut solver = SteepestDescent::new(params(1, 0.1, 0.0001), 2);
    let mut x = vec![1.0, -1.0];
    let mut history = History::new();

    let verdict = solver.optimize(&objective, &mut x, &mut history).unwrap();

    assert_eq!(verdict, Verdict::Exhausted { iterations: 1 });
    assert_eq!(history.rows.len(), 1);
    assert_eq!(history.rows[0].iteration, 1);
}

#[test]
fn rosenbrock_with_one_coordinate_is_refused() {
    let objective = ObjectiveFunction::Rosenbrock;
    let mut solver = SteepestDescent::new(params(10, 0.001, 0.0001), 1);
    let mut x = vec![0.5];
    let mut history = History::new();

    let err = solver
        .optimize(&objective, &mut x, &mut history)
        .unwrap_err();
    assert_eq!(
        err,
        DescentError::TooFewCoordinates {
            function: "Rosenbrock",
            minimum: 2,
            actual: 1
        }
    );
    assert!(history.rows.is_empty());
}

#[test]
fn point_length_mismatch_is_refused_before_any_iteration() {
    let objective = ObjectiveFunction::Quadratic;
    let mut solver = SteepestDescent::new(params(10, 0.1, 0.0001), 3);
    let mut x = vec![1.0, 2.0];
    let mut history = History::new();

    let err = solver
        .optimize(&objective, &mut x, &mut history)
        .unwrap_err();
    assert_eq!(
        err,
        DescentError::DimensionalityMismatch {
            expected: 3,
            actual: 2
        }
    );
    assert!(history.rows.is_empty());
}

#[test]
fn empty_point_is_refused() {
    let objective = ObjectiveFunction::Quadratic;
    let mut solver = SteepestDescent::new(params(10, 0.1, 0.0001), 0);
    let mut x: Vec<f64> = Vec::new();

    let err = solver
        .optimize(&objective, &mut x, &mut NullTrace)
        .unwrap_err();
    assert_eq!(err, DescentError::EmptyPoint);
}

#[test]
fn rosenbrock_run_leaves_the_start_and_heads_downhill() {
    let objective = ObjectiveFunction::Rosenbrock;
    let mut solver = SteepestDescent::new(params(200, 0.001, 0.0001), 2);
    let mut x = vec![-1.2, 1.0];
    let mut history = History::new();

    solver.optimize(&objective, &mut x, &mut history).unwrap();

    let first = history.rows.first().unwrap();
    let last = history.rows.last().unwrap();
    assert!(last.value < first.value);
}
