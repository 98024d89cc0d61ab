use std::sync::Arc;

use arrow::array::{Float64Array, RecordBatch, StringArray};
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

pub fn symbol_column(batch: &RecordBatch) -> Vec<String> {
    batch
        .column_by_name("symbol")
        .expect("symbol column")
        .as_any()
        .downcast_ref::<StringArray>()
        .expect("symbol is utf8")
        .iter()
        .map(|v| v.expect("non-null").to_string())
        .collect()
}

pub fn price_column(batch: &RecordBatch) -> Vec<f64> {
    batch
        .column_by_name("price")
        .expect("price column")
        .as_any()
        .downcast_ref::<Float64Array>()
        .expect("price is f64")
        .values()
        .to_vec()
}
