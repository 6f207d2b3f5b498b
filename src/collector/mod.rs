//! Window collection
//!
//! The core circular-window algorithm plus the locking decorator for
//! shared use. No locking inside the core; thread safety is opt-in at
//! the type level via `LockedCollector`.

pub mod locked;
pub mod traits;
pub mod window;

pub use locked::LockedCollector;
pub use traits::Collector;
pub use window::{WindowCollector, WindowStats};
