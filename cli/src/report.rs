use descent_common::numeric::{format1, format5};
use descent_common::run::core::RunSetup;
use descent_optimizer::objective::ObjectiveFunction;
use descent_optimizer::solver::steepest::Verdict;
use descent_optimizer::trace::{DescentTrace, IterationRecord};
use std::fmt::Write as _;
use std::io::Write;

/// Renders the run report in the fixed legacy layout: a parameter banner,
/// one block per iteration, and a terminal verdict. Downstream tooling
/// diffs this text, so the format is not negotiable.
pub struct TextReporter<W: Write> {
    out: W,
    collect_trajectory: bool,
    trajectory: Vec<Vec<f64>>,
    failed: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, collect_trajectory: bool) -> Self {
        Self {
            out,
            collect_trajectory,
            trajectory: Vec::new(),
            failed: false,
        }
    }

    pub fn print_parameters(&mut self, objective: &ObjectiveFunction, setup: &RunSetup) {
        let mut block = String::new();
        let _ = writeln!(block, "Objective Function: {}", objective.name());
        let _ = writeln!(block, "Dimensionality: {}", setup.dimensionality);
        block.push_str("Initial Point:");
        for &value in &setup.initial_point {
            block.push(' ');
            block.push_str(&format1(value));
        }
        block.push('\n');
        let _ = writeln!(block, "Iterations: {}", setup.iterations);
        let _ = writeln!(block, "Tolerance: {}", format5(setup.tolerance));
        let _ = writeln!(block, "Step Size: {}", format5(setup.step_size));
        block.push('\n');
        let _ = writeln!(block, "Optimization process:");
        self.emit(&block);
    }

    pub fn print_verdict(&mut self, verdict: &Verdict) {
        let mut block = String::new();
        match verdict {
            Verdict::Converged { iterations } => {
                let _ = writeln!(block, "Convergence reached after {} iterations.", iterations);
            }
            Verdict::Exhausted { .. } => {
                block.push_str("Maximum iterations reached without satisfying the tolerance.\n");
            }
        }
        block.push('\n');
        block.push_str("Optimization process completed.\n");
        self.emit(&block);
    }

    pub fn trajectory(&self) -> &[Vec<f64>] {
        &self.trajectory
    }

    /// Flushes the sink and surfaces any write failure swallowed while
    /// the run was in flight.
    pub fn finish(mut self) -> anyhow::Result<W> {
        self.out.flush()?;
        anyhow::ensure!(!self.failed, "report sink dropped output");
        Ok(self.out)
    }

    fn emit(&mut self, block: &str) {
        if self.out.write_all(block.as_bytes()).is_err() {
            if !self.failed {
                log::error!("Failed to write to the report sink.");
            }
            self.failed = true;
        }
    }
}

impl<W: Write> DescentTrace for TextReporter<W> {
    fn record(&mut self, record: IterationRecord<'_>) {
        if self.collect_trajectory {
            self.trajectory.push(record.point.to_vec());
        }

        let mut block = String::new();
        let _ = writeln!(block, "Iteration {}:", record.iteration);
        let _ = writeln!(
            block,
            "Objective Function Value: {}",
            format5(record.value)
        );
        block.push_str("x-values:");
        for &value in record.point {
            block.push(' ');
            block.push_str(&format5(value));
        }
        block.push('\n');
        if let Some(grad_magnitude) = record.gradient_magnitude {
            let _ = writeln!(block, "Current Tolerance: {}", format5(grad_magnitude));
        }
        block.push('\n');
        self.emit(&block);
    }
}
