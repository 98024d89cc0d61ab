//! Micro-batching buffer for columnar ingestion.
//!
//! Rows arrive one at a time as name/value mappings; the [`Batcher`] groups
//! them into Arrow record batches conforming to a declared
//! [`hopper_schema::Schema`], emitting a batch when a row-count or time
//! threshold is crossed.
//!
//! ```
//! use std::sync::Arc;
//! use hopper_batcher::{Batcher, BatcherOptions, Row};
//! use hopper_schema::{DataType, Field, Schema};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = Arc::new(Schema::new(vec![
//!     Field::new("symbol", DataType::Utf8),
//!     Field::new("price", DataType::Float64),
//! ])?);
//!
//! let options = BatcherOptions::default().with_batch_size(2);
//! let mut batcher = Batcher::new(schema, options)?;
//!
//! assert!(batcher.push(Row::new().with("symbol", "AAPL").with("price", 150.0))?.is_none());
//! let batch = batcher
//!     .push(Row::new().with("symbol", "AAPL").with("price", 152.0))?
//!     .expect("batch on second push");
//! assert_eq!(batch.num_rows(), 2);
//! # Ok(())
//! # }
//! ```

pub mod batcher;
pub mod convert;
pub mod error;
pub mod row;

pub use batcher::{Batcher, BatcherOptions, DEFAULT_BATCH_SIZE, DEFAULT_FLUSH_INTERVAL};
pub use convert::rows_to_record_batch;
pub use error::{BatcherError, Result};
pub use row::{Row, Value};
