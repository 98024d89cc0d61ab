use std::sync::Arc;

use arrow::{
    array::{ArrayRef, Float64Array, RecordBatch},
    datatypes::{DataType as ArrowDataType, Field as ArrowField, Schema as ArrowSchema},
};
use snafu::{OptionExt, ResultExt};

use crate::error::{ArrowSnafu, ColumnNotFoundSnafu, ColumnTypeSnafu, Result};

/// A stateful transformation applied to every batch the batcher emits.
///
/// Stages run in registration order and may carry state across batches, so
/// windowed computations continue seamlessly across flush boundaries.
pub trait ComputeStage: Send {
    /// Name of the column this stage appends, used in logs.
    fn output_column(&self) -> &str;

    fn process(&mut self, batch: RecordBatch) -> Result<RecordBatch>;
}

/// Looks up a `Float64` column by name, with errors naming the column.
pub(crate) fn float64_column<'a>(
    batch: &'a RecordBatch,
    column: &str,
) -> Result<&'a Float64Array> {
    let schema = batch.schema();
    let index = schema
        .index_of(column)
        .ok()
        .context(ColumnNotFoundSnafu { column })?;

    batch
        .column(index)
        .as_any()
        .downcast_ref::<Float64Array>()
        .context(ColumnTypeSnafu {
            column,
            expected: "float64",
        })
}

/// Appends a nullable `Float64` column to a batch.
pub(crate) fn append_float64_column(
    batch: &RecordBatch,
    values: Vec<f64>,
    name: &str,
) -> Result<RecordBatch> {
    let mut fields: Vec<ArrowField> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.as_ref().clone())
        .collect();
    fields.push(ArrowField::new(name, ArrowDataType::Float64, true));

    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();
    columns.push(Arc::new(Float64Array::from(values)));

    RecordBatch::try_new(Arc::new(ArrowSchema::new(fields)), columns).context(ArrowSnafu)
}
