//! Configuration for the soak harness
//!
//! Loads configuration from config.toml at startup.
//! All values are configurable to avoid hardcoded constants.

use serde::{Deserialize, Serialize};

use crate::{CollectorError, Result};

/// Soak harness configuration
///
/// Loaded from config.toml at startup. Missing file means defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,

    /// Load-generation settings
    #[serde(default)]
    pub soak: SoakConfig,
}

/// Window settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowConfig {
    /// Maximum number of records retained
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Elements per record
    #[serde(default = "default_record_width")]
    pub record_width: usize,

    /// Track the cumulative visited count
    #[serde(default = "default_track_visited")]
    pub track_visited: bool,
}

/// Load-generation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoakConfig {
    /// Producer thread count
    #[serde(default = "default_producers")]
    pub producers: usize,

    /// Consumer thread count draining the queue into the collector
    #[serde(default = "default_consumers")]
    pub consumers: usize,

    /// Batches pushed by each producer
    #[serde(default = "default_batches_per_producer")]
    pub batches_per_producer: usize,

    /// Records per batch
    #[serde(default = "default_batch_records")]
    pub batch_records: usize,

    /// Bounded queue depth between producers and consumers
    #[serde(default = "default_queue_depth")]
    pub queue_depth: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            record_width: default_record_width(),
            track_visited: default_track_visited(),
        }
    }
}

impl Default for SoakConfig {
    fn default() -> Self {
        Self {
            producers: default_producers(),
            consumers: default_consumers(),
            batches_per_producer: default_batches_per_producer(),
            batch_records: default_batch_records(),
            queue_depth: default_queue_depth(),
        }
    }
}

fn default_capacity() -> usize {
    1024
}

fn default_record_width() -> usize {
    4
}

fn default_track_visited() -> bool {
    true
}

fn default_producers() -> usize {
    4
}

fn default_consumers() -> usize {
    2
}

fn default_batches_per_producer() -> usize {
    10_000
}

fn default_batch_records() -> usize {
    16
}

fn default_queue_depth() -> usize {
    256
}

impl Config {
    /// Load configuration from config.toml file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// # Errors
    /// Returns error if file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => {
                let config: Config = toml::from_str(&contents).map_err(|e| {
                    CollectorError::Config(format!("failed to parse {}: {}", config_path, e))
                })?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File not found - use defaults
                Ok(Config::default())
            }
            Err(e) => Err(CollectorError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.capacity, 1024);
        assert_eq!(config.window.record_width, 4);
        assert!(config.window.track_visited);
        assert_eq!(config.soak.producers, 4);
        assert_eq!(config.soak.queue_depth, 256);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[window]\ncapacity = 8\n").unwrap();
        assert_eq!(config.window.capacity, 8);
        assert_eq!(config.window.record_width, 4);
        assert_eq!(config.soak.batch_records, 16);
    }
}
