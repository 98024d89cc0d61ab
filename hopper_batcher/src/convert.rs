//! Row-major to columnar conversion.
//!
//! Conversion is strict: every declared field must be present with a value
//! of the declared type, and rows must not carry fields outside the schema.
//! The first offending row fails the whole conversion; nothing is dropped
//! or coerced.

use std::sync::Arc;

use arrow::{
    array::{ArrayRef, Float64Builder, Int64Builder, RecordBatch, StringBuilder},
    datatypes::SchemaRef as ArrowSchemaRef,
};
use hopper_schema::{DataType, Schema};
use snafu::ResultExt;

use crate::{
    error::{ArrowSnafu, MissingFieldSnafu, Result, TypeMismatchSnafu, UnexpectedFieldSnafu},
    row::{Row, Value},
};

enum ColumnBuilder {
    Utf8(StringBuilder),
    Float64(Float64Builder),
    Int64(Int64Builder),
}

impl ColumnBuilder {
    fn for_data_type(data_type: DataType, capacity: usize) -> Self {
        match data_type {
            DataType::Utf8 => Self::Utf8(StringBuilder::with_capacity(capacity, capacity * 16)),
            DataType::Float64 => Self::Float64(Float64Builder::with_capacity(capacity)),
            DataType::Int64 => Self::Int64(Int64Builder::with_capacity(capacity)),
        }
    }

    /// Appends a value, or returns the value's actual type on mismatch.
    fn append(&mut self, value: &Value) -> std::result::Result<(), DataType> {
        match (self, value) {
            (Self::Utf8(builder), Value::Utf8(val)) => builder.append_value(val),
            (Self::Float64(builder), Value::Float64(val)) => builder.append_value(*val),
            (Self::Int64(builder), Value::Int64(val)) => builder.append_value(*val),
            (_, value) => return Err(value.data_type()),
        }

        Ok(())
    }

    fn finish(&mut self) -> ArrayRef {
        match self {
            Self::Utf8(builder) => Arc::new(builder.finish()),
            Self::Float64(builder) => Arc::new(builder.finish()),
            Self::Int64(builder) => Arc::new(builder.finish()),
        }
    }
}

/// Converts buffered rows into one record batch conforming to `schema`.
///
/// Columns come out in schema field order regardless of the key order
/// inside each row. `arrow_schema` must be the schema's Arrow descriptor;
/// the batcher caches it so repeated flushes don't rebuild it.
pub fn rows_to_record_batch(
    schema: &Schema,
    arrow_schema: &ArrowSchemaRef,
    rows: &[Row],
) -> Result<RecordBatch> {
    let mut builders = schema
        .fields()
        .iter()
        .map(|f| ColumnBuilder::for_data_type(f.data_type(), rows.len()))
        .collect::<Vec<_>>();

    for (index, row) in rows.iter().enumerate() {
        for (field, builder) in schema.fields().iter().zip(builders.iter_mut()) {
            let Some(value) = row.get(field.name()) else {
                return MissingFieldSnafu {
                    index,
                    field: field.name(),
                }
                .fail();
            };

            if let Err(actual) = builder.append(value) {
                return TypeMismatchSnafu {
                    index,
                    field: field.name(),
                    expected: field.data_type(),
                    actual,
                }
                .fail();
            }
        }

        // Every declared field matched one row entry, so a larger row must
        // carry a field the schema does not declare.
        if row.len() > schema.fields().len() {
            if let Some(field) = row.field_names().find(|name| schema.field(name).is_none()) {
                return UnexpectedFieldSnafu { index, field }.fail();
            }
        }
    }

    let columns = builders
        .iter_mut()
        .map(|builder| builder.finish())
        .collect::<Vec<_>>();

    RecordBatch::try_new(arrow_schema.clone(), columns).context(ArrowSnafu)
}
