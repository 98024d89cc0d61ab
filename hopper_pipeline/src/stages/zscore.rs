use std::collections::VecDeque;

use arrow::array::RecordBatch;

use crate::{
    error::Result,
    stage::{append_float64_column, float64_column, ComputeStage},
};

/// Rolling z-score of a column over the trailing `lookback` values.
///
/// Uses the sample standard deviation, so `lookback` must be at least 2.
/// A flat window (zero deviation) scores 0.0 rather than dividing by zero.
pub struct ZScore {
    column: String,
    lookback: usize,
    history: VecDeque<f64>,
    output: String,
}

impl ZScore {
    pub fn new(column: impl Into<String>, lookback: usize) -> Self {
        let column = column.into();
        let output = format!("{column}_zscore_{lookback}");

        Self {
            column,
            lookback,
            history: VecDeque::with_capacity(lookback),
            output,
        }
    }
}

impl ComputeStage for ZScore {
    fn output_column(&self) -> &str {
        &self.output
    }

    fn process(&mut self, batch: RecordBatch) -> Result<RecordBatch> {
        let col = float64_column(&batch, &self.column)?;
        let mut output = Vec::with_capacity(col.len());

        for val in col.values() {
            self.history.push_back(*val);
            if self.history.len() > self.lookback {
                self.history.pop_front();
            }

            if self.history.len() < self.lookback {
                output.push(f64::NAN);
                continue;
            }

            // O(lookback) per row; acceptable for the small windows this
            // stage is used with.
            let mean = self.history.iter().sum::<f64>() / self.lookback as f64;
            let variance = self
                .history
                .iter()
                .map(|x| (x - mean).powi(2))
                .sum::<f64>()
                / (self.lookback - 1) as f64;
            let std = variance.sqrt();

            output.push(if std == 0.0 { 0.0 } else { (val - mean) / std });
        }

        append_float64_column(&batch, output, &self.output)
    }
}
