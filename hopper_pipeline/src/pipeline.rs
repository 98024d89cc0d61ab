use arrow::array::RecordBatch;
use hopper_batcher::{Batcher, Row};
use snafu::ResultExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    error::{BatcherSnafu, ChannelClosedSnafu, Result},
    stage::ComputeStage,
};

/// Drives rows from a channel through a batcher and compute stages.
///
/// The loop preserves the batcher's lazy flush policy: the time threshold
/// is only evaluated when a row arrives, so an idle pipeline holds its
/// partial batch until the row channel closes (which drains it) or the
/// token is cancelled (which does not).
pub struct Pipeline {
    batcher: Batcher,
    stages: Vec<Box<dyn ComputeStage>>,
}

impl Pipeline {
    pub fn new(batcher: Batcher) -> Self {
        Self {
            batcher,
            stages: Vec::new(),
        }
    }

    /// Registers a stage; stages run in registration order.
    pub fn with_stage(mut self, stage: impl ComputeStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Runs until the row channel closes or `ct` is cancelled.
    ///
    /// Every batch the batcher emits is passed through the stages in order
    /// and sent into `batches`. A batcher or stage error stops the run with
    /// the rows that produced it still buffered.
    pub async fn run(
        mut self,
        mut rows: mpsc::Receiver<Row>,
        batches: mpsc::Sender<RecordBatch>,
        ct: CancellationToken,
    ) -> Result<()> {
        loop {
            tokio::select! {
                _ = ct.cancelled() => {
                    debug!(buffered = self.batcher.len(), "pipeline cancelled");
                    return Ok(());
                }
                row = rows.recv() => {
                    let Some(row) = row else {
                        break;
                    };

                    if let Some(batch) = self.batcher.push(row).context(BatcherSnafu)? {
                        self.dispatch(batch, &batches).await?;
                    }
                }
            }
        }

        // Row channel closed: drain whatever is still buffered.
        if let Some(batch) = self.batcher.flush_remaining().context(BatcherSnafu)? {
            self.dispatch(batch, &batches).await?;
        }

        Ok(())
    }

    async fn dispatch(
        &mut self,
        mut batch: RecordBatch,
        batches: &mpsc::Sender<RecordBatch>,
    ) -> Result<()> {
        for stage in self.stages.iter_mut() {
            batch = stage.process(batch)?;
            debug!(stage = stage.output_column(), num_rows = batch.num_rows(), "stage applied");
        }

        batches.send(batch).await.or_else(|_| ChannelClosedSnafu.fail())
    }
}
