use std::{fs::File, path::PathBuf};

use arrow::array::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use snafu::ResultExt;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use crate::error::{ArrowSnafu, ChannelClosedSnafu, IoSnafu, ParquetSnafu, Result};

const DEFAULT_READ_BATCH_SIZE: usize = 1024;

/// Replays a Parquet file as a stream of record batches.
///
/// Reading happens on a blocking task; batches are sent downstream in file
/// order. The read batch size bounds memory use regardless of file size.
pub struct ParquetSource {
    path: PathBuf,
    batch_size: usize,
}

impl ParquetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            batch_size: DEFAULT_READ_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Spawns the reader task, sending every batch into `tx`.
    ///
    /// The task ends when the file is exhausted or the receiver is dropped.
    pub fn spawn(self, tx: mpsc::Sender<RecordBatch>) -> JoinHandle<Result<()>> {
        tokio::task::spawn_blocking(move || self.read_all(tx))
    }

    fn read_all(self, tx: mpsc::Sender<RecordBatch>) -> Result<()> {
        let file = File::open(&self.path).context(IoSnafu {
            path: self.path.clone(),
        })?;

        // The builder reads footer metadata only; row data is streamed
        // batch by batch below.
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .context(ParquetSnafu)?
            .with_batch_size(self.batch_size)
            .build()
            .context(ParquetSnafu)?;

        let mut num_batches = 0usize;
        for batch in reader {
            let batch = batch.context(ArrowSnafu)?;
            tx.blocking_send(batch)
                .or_else(|_| ChannelClosedSnafu.fail())?;
            num_batches += 1;
        }

        debug!(path = %self.path.display(), num_batches, "parquet source exhausted");

        Ok(())
    }
}
