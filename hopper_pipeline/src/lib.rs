//! Batch-level processing on top of the hopper batcher.
//!
//! A [`Pipeline`] receives rows from a channel, groups them into record
//! batches with a [`hopper_batcher::Batcher`], runs each emitted batch
//! through an ordered list of [`ComputeStage`]s, and forwards the results
//! downstream. [`ParquetSource`] and [`ParquetSink`] adapt Parquet files to
//! the same batch channels.

pub mod error;
pub mod pipeline;
pub mod sink;
pub mod source;
pub mod stage;
pub mod stages;

pub use error::{PipelineError, Result};
pub use pipeline::Pipeline;
pub use sink::ParquetSink;
pub use source::ParquetSource;
pub use stage::ComputeStage;
pub use stages::{Ema, RollingMean, Vwap, ZScore};
