use std::path::PathBuf;

use arrow::error::ArrowError;
use hopper_batcher::BatcherError;
use parquet::errors::ParquetError;
use snafu::Snafu;

/// Pipeline error types.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PipelineError {
    #[snafu(display("column {column:?} not found in batch"))]
    ColumnNotFound { column: String },
    #[snafu(display("column {column:?} is not {expected}"))]
    ColumnType {
        column: String,
        expected: &'static str,
    },
    #[snafu(display("batcher error: {source}"))]
    Batcher { source: BatcherError },
    #[snafu(display("arrow error: {source}"))]
    Arrow { source: ArrowError },
    #[snafu(display("parquet error: {source}"))]
    Parquet { source: ParquetError },
    #[snafu(display("io error on {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("downstream channel closed"))]
    ChannelClosed,
}

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
