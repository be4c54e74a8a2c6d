/// Everything a single optimization run needs, gathered before the solver
/// is entered and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSetup {
    pub function_name: String,
    pub dimensionality: usize,
    pub iterations: usize,
    pub tolerance: f64,
    pub step_size: f64,
    pub initial_point: Vec<f64>,
}
