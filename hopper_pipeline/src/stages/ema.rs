use arrow::array::RecordBatch;

use crate::{
    error::Result,
    stage::{append_float64_column, float64_column, ComputeStage},
};

/// Exponential moving average of a column.
///
/// Uses the standard smoothing factor `alpha = 2 / (span + 1)` and seeds
/// the average with the first observed value, so there is no warm-up NaN.
pub struct Ema {
    column: String,
    span: usize,
    current: Option<f64>,
    output: String,
}

impl Ema {
    pub fn new(column: impl Into<String>, span: usize) -> Self {
        let column = column.into();
        let output = format!("{column}_ema_{span}");

        Self {
            column,
            span,
            current: None,
            output,
        }
    }
}

impl ComputeStage for Ema {
    fn output_column(&self) -> &str {
        &self.output
    }

    fn process(&mut self, batch: RecordBatch) -> Result<RecordBatch> {
        let col = float64_column(&batch, &self.column)?;

        let alpha = 2.0 / (self.span as f64 + 1.0);
        let mut output = Vec::with_capacity(col.len());

        for val in col.values() {
            let ema = match self.current {
                None => *val,
                Some(prev) => alpha * val + (1.0 - alpha) * prev,
            };
            self.current = Some(ema);
            output.push(ema);
        }

        append_float64_column(&batch, output, &self.output)
    }
}
