use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use arrow::{array::RecordBatch, datatypes::SchemaRef as ArrowSchemaRef};
use hopper_schema::SchemaRef;
use snafu::ensure;
use tracing::debug;

use crate::{
    convert::rows_to_record_batch,
    error::{InvalidBatchSizeSnafu, InvalidFlushIntervalSnafu, Result},
    row::Row,
};

pub const DEFAULT_BATCH_SIZE: usize = 500;
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_millis(50);

/// Flush thresholds for a [`Batcher`].
#[derive(Debug, Clone)]
pub struct BatcherOptions {
    /// Buffered row count at which a push flushes.
    pub batch_size: usize,
    /// Time since the last flush after which the next push flushes.
    pub flush_interval: Duration,
}

impl Default for BatcherOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
        }
    }
}

impl BatcherOptions {
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_flush_interval(mut self, flush_interval: Duration) -> Self {
        self.flush_interval = flush_interval;
        self
    }
}

/// Accumulates rows and emits fixed-schema record batches.
///
/// A push flushes when the buffer reaches `batch_size` rows, or when
/// `flush_interval` has elapsed since the last flush. The time threshold is
/// evaluated lazily on push: there is no background timer, so a batcher
/// that stops receiving rows holds its partial batch until
/// [`Batcher::flush_remaining`] is called. Single logical writer; callers
/// that share a batcher across threads are responsible for exclusion.
#[derive(Debug)]
pub struct Batcher {
    schema: SchemaRef,
    arrow_schema: ArrowSchemaRef,
    buffer: Vec<Row>,
    batch_size: usize,
    flush_interval: Duration,
    last_flush: Instant,
}

impl Batcher {
    /// Creates a batcher bound to `schema`.
    ///
    /// Fails when `batch_size` is zero or `flush_interval` is zero. The
    /// construction instant counts as the first "flush" for the time
    /// threshold.
    pub fn new(schema: SchemaRef, options: BatcherOptions) -> Result<Self> {
        ensure!(
            options.batch_size >= 1,
            InvalidBatchSizeSnafu {
                got: options.batch_size
            }
        );
        ensure!(!options.flush_interval.is_zero(), InvalidFlushIntervalSnafu);

        let arrow_schema = Arc::new(schema.arrow_schema());

        Ok(Self {
            schema,
            arrow_schema,
            buffer: Vec::with_capacity(options.batch_size),
            batch_size: options.batch_size,
            flush_interval: options.flush_interval,
            last_flush: Instant::now(),
        })
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Number of rows currently buffered.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffers a row, flushing if a threshold has been crossed.
    ///
    /// Returns the emitted batch, or `None` while the row stays buffered.
    /// Size is checked before time; both trigger the same single flush.
    pub fn push(&mut self, row: Row) -> Result<Option<RecordBatch>> {
        self.buffer.push(row);

        if self.buffer.len() >= self.batch_size {
            return self.flush();
        }

        if self.last_flush.elapsed() >= self.flush_interval {
            return self.flush();
        }

        Ok(None)
    }

    /// Drains any buffered rows regardless of thresholds.
    ///
    /// Intended for stream-end or shutdown draining. Returns `None` when
    /// nothing is buffered; repeated calls are a no-op.
    pub fn flush_remaining(&mut self) -> Result<Option<RecordBatch>> {
        self.flush()
    }

    fn flush(&mut self) -> Result<Option<RecordBatch>> {
        if self.buffer.is_empty() {
            return Ok(None);
        }

        // Convert before draining: a failed conversion must leave the
        // buffer and the flush timer untouched so the caller can retry or
        // drop the offending rows explicitly.
        let batch = rows_to_record_batch(&self.schema, &self.arrow_schema, &self.buffer)?;

        self.buffer.clear();
        self.last_flush = Instant::now();

        debug!(num_rows = batch.num_rows(), "flushed batch");

        Ok(Some(batch))
    }
}
