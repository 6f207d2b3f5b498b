//! Fixed-capacity sliding-window record collector
//!
//! # Architecture
//! - **core**: Batch input views (validated shape + flat element data)
//! - **storage**: Record storage trait and the Vec-backed store
//! - **collector**: Windowing algorithm and the locking decorator
//! - **infrastructure**: Cold path (logging, metrics, config)

pub mod collector;
pub mod core;
pub mod infrastructure;
pub mod storage;

// Re-export commonly used types
pub use crate::collector::{Collector, LockedCollector, WindowCollector, WindowStats};
pub use crate::core::Batch;
pub use crate::storage::{RecordStore, VecStore};

use thiserror::Error;

/// Main error type for the collector
#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("batch shape must have rank >= 1")]
    EmptyShape,

    #[error("batch data length {data_len} does not match shape {shape:?}")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },

    #[error("record shape mismatch: window holds {expected:?}, batch has {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },

    #[error("cursor {cursor} out of range for window of {len} records")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("visited count is negative: {0}")]
    NegativeVisited(i64),

    #[error("record range {start}..{end} out of bounds for {len} records")]
    StoreBounds { start: usize, end: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CollectorError>;
