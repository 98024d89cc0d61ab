use std::collections::VecDeque;

use arrow::array::RecordBatch;

use crate::{
    error::Result,
    stage::{append_float64_column, float64_column, ComputeStage},
};

/// Arithmetic mean over the trailing `window` values of a column.
///
/// Keeps a running sum so each row costs O(1) regardless of window size.
pub struct RollingMean {
    column: String,
    window: usize,
    history: VecDeque<f64>,
    sum: f64,
    output: String,
}

impl RollingMean {
    pub fn new(column: impl Into<String>, window: usize) -> Self {
        let column = column.into();
        let output = format!("{column}_rolling_mean_{window}");

        Self {
            column,
            window,
            history: VecDeque::with_capacity(window),
            sum: 0.0,
            output,
        }
    }
}

impl ComputeStage for RollingMean {
    fn output_column(&self) -> &str {
        &self.output
    }

    fn process(&mut self, batch: RecordBatch) -> Result<RecordBatch> {
        let col = float64_column(&batch, &self.column)?;
        let mut output = Vec::with_capacity(col.len());

        for val in col.values() {
            self.history.push_back(*val);
            self.sum += val;

            if self.history.len() > self.window {
                if let Some(evicted) = self.history.pop_front() {
                    self.sum -= evicted;
                }
            }

            if self.history.len() == self.window {
                output.push(self.sum / self.window as f64);
            } else {
                output.push(f64::NAN);
            }
        }

        append_float64_column(&batch, output, &self.output)
    }
}
