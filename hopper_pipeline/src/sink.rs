use std::{fs::File, path::PathBuf};

use arrow::array::RecordBatch;
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};
use snafu::ResultExt;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::{IoSnafu, ParquetSnafu, Result};

/// Writes every received batch to a Parquet file.
///
/// The writer is created lazily on the first batch: upstream stages may
/// have appended columns, so the final schema is only known once data
/// arrives. The file is finalized when the channel closes; if no batch
/// ever arrives, no file is created.
pub struct ParquetSink {
    path: PathBuf,
}

impl ParquetSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Consumes batches until the channel closes; returns rows written.
    pub async fn run(self, mut rx: mpsc::Receiver<RecordBatch>) -> Result<u64> {
        let mut writer: Option<ArrowWriter<File>> = None;
        let mut rows_written = 0u64;

        while let Some(batch) = rx.recv().await {
            if writer.is_none() {
                let file = File::create(&self.path).context(IoSnafu {
                    path: self.path.clone(),
                })?;
                let props = WriterProperties::builder().build();
                writer = Some(
                    ArrowWriter::try_new(file, batch.schema(), Some(props))
                        .context(ParquetSnafu)?,
                );
            }

            if let Some(writer) = writer.as_mut() {
                writer.write(&batch).context(ParquetSnafu)?;
                rows_written += batch.num_rows() as u64;
            }
        }

        if let Some(writer) = writer {
            writer.close().context(ParquetSnafu)?;
            debug!(path = %self.path.display(), rows_written, "closed parquet sink");
        }

        Ok(rows_written)
    }
}
