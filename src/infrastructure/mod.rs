//! Infrastructure - cold path only
//!
//! This module contains non-latency-critical code:
//! - Logging setup
//! - Configuration management
//! - Ingest metrics for the soak harness

pub mod config;
pub mod logging;
pub mod metrics;

pub use config::Config;
pub use metrics::{IngestMetrics, IngestSnapshot};
