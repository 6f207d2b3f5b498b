//! Core input types for the collector
//!
//! - Batch: validated borrowed view of one call's records

pub mod batch;

pub use batch::Batch;
