use arrow::error::ArrowError;
use hopper_schema::DataType;
use snafu::Snafu;

/// Batcher error types.
///
/// Conversion errors carry the offending row index and field name so the
/// caller can trace a rejected batch back to the producer that built it.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum BatcherError {
    #[snafu(display("batch_size must be >= 1, got {got}"))]
    InvalidBatchSize { got: usize },
    #[snafu(display("flush_interval must be positive"))]
    InvalidFlushInterval,
    #[snafu(display("row {index} is missing declared field {field:?}"))]
    MissingField { index: usize, field: String },
    #[snafu(display("row {index} contains field {field:?} not declared in the schema"))]
    UnexpectedField { index: usize, field: String },
    #[snafu(display(
        "row {index} field {field:?} expects {expected}, got {actual}"
    ))]
    TypeMismatch {
        index: usize,
        field: String,
        expected: DataType,
        actual: DataType,
    },
    #[snafu(display("arrow error: {source}"))]
    Arrow { source: ArrowError },
}

pub type Result<T, E = BatcherError> = std::result::Result<T, E>;
