use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_function")]
    pub function: String,
    #[serde(default = "default_dimensionality")]
    pub dimensionality: usize,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_step_size")]
    pub step_size: f64,
    #[serde(default = "default_initial_point")]
    pub initial_point: Vec<f64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            function: default_function(),
            dimensionality: default_dimensionality(),
            iterations: default_iterations(),
            tolerance: default_tolerance(),
            step_size: default_step_size(),
            initial_point: default_initial_point(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// Legacy line-oriented run file. When set it overrides the inline
    /// `[run]` table.
    #[serde(default)]
    pub run_file: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { run_file: None }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Report destination; console when absent.
    #[serde(default)]
    pub report_file: Option<String>,
    /// Trajectory PNG; skipped when absent or the run has fewer than two
    /// coordinates.
    #[serde(default)]
    pub plot_file: Option<String>,
    #[serde(default = "default_plot_dimension")]
    pub plot_dimension: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_file: None,
            plot_file: None,
            plot_dimension: default_plot_dimension(),
        }
    }
}

fn default_function() -> String {
    "quadratic".to_string()
}

fn default_dimensionality() -> usize {
    2
}

fn default_iterations() -> usize {
    100
}

fn default_tolerance() -> f64 {
    0.0001
}

fn default_step_size() -> f64 {
    0.1
}

fn default_initial_point() -> Vec<f64> {
    vec![4.0, 4.0]
}

fn default_plot_dimension() -> u32 {
    1000
}
