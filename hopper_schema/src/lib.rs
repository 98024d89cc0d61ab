//! Typed field declarations for hopper batches.
//!
//! A [`Schema`] is an ordered, immutable list of named fields drawn from a
//! closed scalar vocabulary ([`DataType`]). Its job is to turn those
//! declarations into the Arrow schema that drives columnar batch
//! construction, rejecting invalid declarations before any row is buffered.

mod data_type;
pub mod error;

use std::{collections::HashSet, ops::Deref, sync::Arc};

use arrow::datatypes::{Field as ArrowField, Schema as ArrowSchema};
use snafu::ensure;

use crate::error::{DuplicateFieldNameSnafu, EmptySchemaSnafu};

pub use self::{
    data_type::DataType,
    error::{Result, SchemaError},
};

/// An ordered, immutable set of named fields.
///
/// Shared read-only across every batcher bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Fields,
}

pub type SchemaRef = Arc<Schema>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: String,
    data_type: DataType,
}

pub type FieldRef = Arc<Field>;

/// A cheaply cloneable ordered sequence of [`FieldRef`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fields(Arc<[FieldRef]>);

impl Schema {
    /// Creates a schema from an ordered list of fields.
    ///
    /// Fails when the list is empty or contains duplicate field names; the
    /// columnar conversion requires every column to be addressable by name.
    pub fn new(fields: impl Into<Fields>) -> Result<Self> {
        let fields = fields.into();
        ensure!(!fields.is_empty(), EmptySchemaSnafu);

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            ensure!(
                seen.insert(field.name().to_string()),
                DuplicateFieldNameSnafu { name: field.name() }
            );
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldRef> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The Arrow schema describing batches produced against this schema.
    ///
    /// Fields appear in declaration order and are non-nullable: every row
    /// must provide a value for every declared field. Pure and idempotent.
    pub fn arrow_schema(&self) -> ArrowSchema {
        let fields = self
            .fields
            .iter()
            .map(|f| f.to_arrow_field())
            .collect::<Vec<_>>();
        ArrowSchema::new(fields)
    }
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn to_arrow_field(&self) -> ArrowField {
        ArrowField::new(self.name.as_str(), self.data_type.into(), false)
    }
}

impl Fields {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        iter.into_iter().map(Arc::new).collect()
    }
}

impl FromIterator<FieldRef> for Fields {
    fn from_iter<T: IntoIterator<Item = FieldRef>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Field>> for Fields {
    fn from(value: Vec<Field>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Vec<FieldRef>> for Fields {
    fn from(value: Vec<FieldRef>) -> Self {
        Self(value.into())
    }
}

impl Deref for Fields {
    type Target = [FieldRef];

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a FieldRef;
    type IntoIter = std::slice::Iter<'a, FieldRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use arrow::datatypes::DataType as ArrowDataType;

    use super::*;

    fn trades_fields() -> Vec<Field> {
        vec![
            Field::new("symbol", DataType::Utf8),
            Field::new("price", DataType::Float64),
            Field::new("volume", DataType::Int64),
        ]
    }

    #[test]
    fn test_arrow_schema_preserves_declaration_order() {
        let schema = Schema::new(trades_fields()).unwrap();
        let arrow_schema = schema.arrow_schema();

        let names: Vec<_> = arrow_schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, vec!["symbol", "price", "volume"]);
    }

    #[test]
    fn test_arrow_schema_physical_types() {
        let schema = Schema::new(trades_fields()).unwrap();
        let arrow_schema = schema.arrow_schema();

        assert_eq!(
            arrow_schema.field_with_name("symbol").unwrap().data_type(),
            &ArrowDataType::Utf8
        );
        assert_eq!(
            arrow_schema.field_with_name("price").unwrap().data_type(),
            &ArrowDataType::Float64
        );
        assert_eq!(
            arrow_schema.field_with_name("volume").unwrap().data_type(),
            &ArrowDataType::Int64
        );

        for field in arrow_schema.fields() {
            assert!(!field.is_nullable());
        }
    }

    #[test]
    fn test_arrow_schema_is_idempotent() {
        let schema = Schema::new(trades_fields()).unwrap();
        assert_eq!(schema.arrow_schema(), schema.arrow_schema());
    }

    #[test]
    fn test_duplicate_field_name_is_rejected() {
        let result = Schema::new(vec![
            Field::new("price", DataType::Float64),
            Field::new("price", DataType::Int64),
        ]);

        assert_eq!(
            result.unwrap_err(),
            SchemaError::DuplicateFieldName {
                name: "price".to_string()
            }
        );
    }

    #[test]
    fn test_empty_schema_is_rejected() {
        let result = Schema::new(Vec::<Field>::new());
        assert_eq!(result.unwrap_err(), SchemaError::EmptySchema);
    }

    #[test]
    fn test_field_lookup_by_name() {
        let schema = Schema::new(trades_fields()).unwrap();

        let price = schema.field("price").unwrap();
        assert_eq!(price.data_type(), DataType::Float64);
        assert!(schema.field("timestamp").is_none());
    }

    #[test]
    fn test_data_type_tag_round_trip() {
        for data_type in [DataType::Utf8, DataType::Float64, DataType::Int64] {
            let parsed: DataType = data_type.as_str().parse().unwrap();
            assert_eq!(parsed, data_type);
        }
    }

    #[test]
    fn test_unknown_data_type_tag() {
        let result: Result<DataType> = "date32".parse();
        assert_eq!(
            result.unwrap_err(),
            SchemaError::UnknownDataType {
                tag: "date32".to_string()
            }
        );
    }

    #[test]
    fn test_data_type_serde_tags() {
        let tag: String = serde_json::to_string(&DataType::Float64).unwrap();
        assert_eq!(tag, "\"float64\"");

        let parsed: DataType = serde_json::from_str("\"int64\"").unwrap();
        assert_eq!(parsed, DataType::Int64);

        assert!(serde_json::from_str::<DataType>("\"timestamp\"").is_err());
    }
}
