//! Per-iteration telemetry emitted by the solver.
//!
//! Reporting is a side channel: nothing in the descent loop depends on
//! what an observer does with a record.

/// One iteration's worth of telemetry. The point is borrowed from the
/// solver's working buffer; observers copy what they need.
#[derive(Clone, Copy, Debug)]
pub struct IterationRecord<'a> {
    pub iteration: usize,
    pub value: f64,
    pub point: &'a [f64],
    /// Euclidean norm of the gradient driving the convergence test.
    /// Absent on the first iteration, which reports the initial state
    /// before any gradient is taken.
    pub gradient_magnitude: Option<f64>,
}

pub trait DescentTrace {
    fn record(&mut self, record: IterationRecord<'_>);
}

/// Discards every record.
pub struct NullTrace;

impl DescentTrace for NullTrace {
    fn record(&mut self, _record: IterationRecord<'_>) {}
}

/// Owned copy of a record, for observers that keep the whole run.
#[derive(Clone, Debug)]
pub struct HistoryRow {
    pub iteration: usize,
    pub value: f64,
    pub point: Vec<f64>,
    pub gradient_magnitude: Option<f64>,
}

/// Collects every record of a run.
#[derive(Debug, Default)]
pub struct History {
    pub rows: Vec<HistoryRow>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DescentTrace for History {
    fn record(&mut self, record: IterationRecord<'_>) {
        self.rows.push(HistoryRow {
            iteration: record.iteration,
            value: record.value,
            point: record.point.to_vec(),
            gradient_magnitude: record.gradient_magnitude,
        });
    }
}
