use snafu::Snafu;

/// Schema declaration error types.
///
/// All of these are raised at declaration time, before any row has been
/// buffered, so the message should tell the user which declaration to fix.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum SchemaError {
    #[snafu(display("unknown data type {tag:?}, expected one of: utf8, float64, int64"))]
    UnknownDataType { tag: String },
    #[snafu(display("duplicate field name {name:?}"))]
    DuplicateFieldName { name: String },
    #[snafu(display("schema must declare at least one field"))]
    EmptySchema,
}

pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
