#![allow(dead_code)]

use std::sync::Arc;

use arrow::{
    array::{ArrayRef, Float64Array, RecordBatch},
    datatypes::{DataType as ArrowDataType, Field as ArrowField, Schema as ArrowSchema},
};
use hopper_batcher::Row;
use hopper_schema::{DataType, Field, Schema, SchemaRef};

pub fn quote_schema() -> SchemaRef {
    Arc::new(
        Schema::new(vec![
            Field::new("symbol", DataType::Utf8),
            Field::new("price", DataType::Float64),
        ])
        .expect("quote schema"),
    )
}

pub fn quote(symbol: &str, price: f64) -> Row {
    Row::new().with("symbol", symbol).with("price", price)
}

/// A single-column `Float64` batch named `price`.
pub fn price_batch(prices: &[f64]) -> RecordBatch {
    let schema = Arc::new(ArrowSchema::new(vec![ArrowField::new(
        "price",
        ArrowDataType::Float64,
        false,
    )]));
    let column: ArrayRef = Arc::new(Float64Array::from(prices.to_vec()));

    RecordBatch::try_new(schema, vec![column]).expect("price batch")
}

/// A two-column `Float64` batch named `price` and `volume`.
pub fn price_volume_batch(prices: &[f64], volumes: &[f64]) -> RecordBatch {
    let schema = Arc::new(ArrowSchema::new(vec![
        ArrowField::new("price", ArrowDataType::Float64, false),
        ArrowField::new("volume", ArrowDataType::Float64, false),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Float64Array::from(prices.to_vec())),
        Arc::new(Float64Array::from(volumes.to_vec())),
    ];

    RecordBatch::try_new(schema, columns).expect("price/volume batch")
}

pub fn float64_values(batch: &RecordBatch, name: &str) -> Vec<f64> {
    batch
        .column_by_name(name)
        .unwrap_or_else(|| panic!("column {name}"))
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap_or_else(|| panic!("column {name} is f64"))
        .values()
        .to_vec()
}

/// Elementwise equality where NaN equals NaN.
pub fn assert_float64_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let equal = (a.is_nan() && e.is_nan()) || (a - e).abs() < 1e-9;
        assert!(equal, "index {i}: got {a}, expected {e}");
    }
}
