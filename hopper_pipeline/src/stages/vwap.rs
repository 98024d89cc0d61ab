use std::collections::VecDeque;

use arrow::array::RecordBatch;

use crate::{
    error::Result,
    stage::{append_float64_column, float64_column, ComputeStage},
};

/// Volume-weighted average price over the trailing `window` rows.
///
/// Reads a price column and a volume column (both `Float64`) and emits
/// `sum(price * volume) / sum(volume)`. NaN during warm-up and when the
/// window's volume sums to zero.
pub struct Vwap {
    price_column: String,
    volume_column: String,
    window: usize,
    // (price * volume, volume) pairs
    history: VecDeque<(f64, f64)>,
    output: String,
}

impl Vwap {
    pub fn new(
        price_column: impl Into<String>,
        volume_column: impl Into<String>,
        window: usize,
    ) -> Self {
        Self {
            price_column: price_column.into(),
            volume_column: volume_column.into(),
            window,
            history: VecDeque::with_capacity(window),
            output: format!("vwap_{window}"),
        }
    }
}

impl ComputeStage for Vwap {
    fn output_column(&self) -> &str {
        &self.output
    }

    fn process(&mut self, batch: RecordBatch) -> Result<RecordBatch> {
        let prices = float64_column(&batch, &self.price_column)?;
        let volumes = float64_column(&batch, &self.volume_column)?;

        let mut output = Vec::with_capacity(batch.num_rows());

        for (price, volume) in prices.values().iter().zip(volumes.values().iter()) {
            self.history.push_back((price * volume, *volume));
            if self.history.len() > self.window {
                self.history.pop_front();
            }

            if self.history.len() < self.window {
                output.push(f64::NAN);
                continue;
            }

            let (pv_sum, v_sum) = self
                .history
                .iter()
                .fold((0.0, 0.0), |(pv, v), (pvi, vi)| (pv + pvi, v + vi));

            output.push(if v_sum == 0.0 { f64::NAN } else { pv_sum / v_sum });
        }

        append_float64_column(&batch, output, &self.output)
    }
}
