use std::str::FromStr;

use arrow::datatypes::DataType as ArrowDataType;
use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, UnknownDataTypeSnafu};

/// The scalar types a field can be declared with.
///
/// The vocabulary is deliberately closed: every variant maps to exactly one
/// Arrow physical type, so a schema declared against this enum can always
/// drive the columnar backend. Unknown types are only representable as
/// [`DataType::from_str`] parse failures, never as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// A variable-length string in Unicode with UTF-8 encoding.
    Utf8,
    /// A 64-bit floating point number.
    Float64,
    /// A signed 64-bit integer.
    Int64,
}

impl DataType {
    /// The canonical string tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Float64 => "float64",
            Self::Int64 => "int64",
        }
    }
}

impl From<DataType> for ArrowDataType {
    fn from(data_type: DataType) -> Self {
        match data_type {
            DataType::Utf8 => ArrowDataType::Utf8,
            DataType::Float64 => ArrowDataType::Float64,
            DataType::Int64 => ArrowDataType::Int64,
        }
    }
}

impl FromStr for DataType {
    type Err = SchemaError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "utf8" => Ok(Self::Utf8),
            "float64" => Ok(Self::Float64),
            "int64" => Ok(Self::Int64),
            other => UnknownDataTypeSnafu { tag: other }.fail(),
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
