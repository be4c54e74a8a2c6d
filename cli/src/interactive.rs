use anyhow::{Context, Result};
use descent_common::run::core::RunSetup;
use std::io::{self, BufRead};

/// Prompt-driven run entry on stdin, one answer per line.
pub fn read_run_setup() -> Result<RunSetup> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    read_run_setup_from(&mut lines)
}

pub fn read_run_setup_from<I>(lines: &mut I) -> Result<RunSetup>
where
    I: Iterator<Item = io::Result<String>>,
{
    let function_name = prompt(
        lines,
        "Enter the choice of objective function (quadratic or rosenbrock):",
    )?;
    let dimensionality: usize = prompt(lines, "Enter the dimensionality of the problem:")?
        .parse()
        .context("Invalid dimensionality")?;
    let iterations: usize = prompt(lines, "Enter the number of iterations:")?
        .parse()
        .context("Invalid iteration count")?;
    let tolerance: f64 = prompt(lines, "Enter the tolerance:")?
        .parse()
        .context("Invalid tolerance")?;
    let step_size: f64 = prompt(lines, "Enter the step size:")?
        .parse()
        .context("Invalid step size")?;

    let point_line = prompt(
        lines,
        &format!(
            "Enter the initial point as {} space-separated values:",
            dimensionality
        ),
    )?;
    let initial_point = point_line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .context(format!("Invalid initial-point coordinate: '{}'", token))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(RunSetup {
        function_name,
        dimensionality,
        iterations,
        tolerance,
        step_size,
        initial_point,
    })
}

fn prompt<I>(lines: &mut I, message: &str) -> Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("{}", message);
    let line = lines
        .next()
        .context("Unexpected end of input")?
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(answers: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        answers
            .iter()
            .map(|s| Ok(s.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn builds_a_setup_from_a_prompt_transcript() {
        let mut lines = scripted(&["rosenbrock", "2", "50", "0.0001", "0.001", "-1.2 1.0"]);
        let setup = read_run_setup_from(&mut lines).unwrap();
        assert_eq!(setup.function_name, "rosenbrock");
        assert_eq!(setup.dimensionality, 2);
        assert_eq!(setup.iterations, 50);
        assert_eq!(setup.initial_point, vec![-1.2, 1.0]);
    }

    #[test]
    fn refuses_a_truncated_transcript() {
        let mut lines = scripted(&["quadratic", "2"]);
        assert!(read_run_setup_from(&mut lines).is_err());
    }

    #[test]
    fn refuses_non_numeric_answers() {
        let mut lines = scripted(&["quadratic", "two", "100", "0.0001", "0.1", "4.0 4.0"]);
        assert!(read_run_setup_from(&mut lines).is_err());
    }
}
