use std::collections::HashMap;

use hopper_schema::DataType;

/// A scalar runtime value carried by a [`Row`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Utf8(String),
    Float64(f64),
    Int64(i64),
}

impl Value {
    pub fn utf8(val: impl Into<String>) -> Self {
        Self::Utf8(val.into())
    }

    pub fn f64(val: f64) -> Self {
        Self::Float64(val)
    }

    pub fn i64(val: i64) -> Self {
        Self::Int64(val)
    }

    /// The declared type this value satisfies.
    ///
    /// Values are never coerced: an [`Value::Int64`] does not satisfy a
    /// `Float64` field, and numeric strings do not satisfy numeric fields.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Utf8(_) => DataType::Utf8,
            Self::Float64(_) => DataType::Float64,
            Self::Int64(_) => DataType::Int64,
        }
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Self::Utf8(val.to_string())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Self::Utf8(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Self::Float64(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Self::Int64(val)
    }
}

/// One record submitted by a producer: a mapping from field name to value.
///
/// Key order is irrelevant; emitted batches are always laid out in schema
/// field order. Validation against the schema is deferred to flush time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
