//! Collector abstraction
//!
//! The seam between the windowing algorithm and anything that feeds or
//! wraps it. Generics keep the collect path monomorphized.

use crate::core::Batch;
use crate::Result;

/// Sink that absorbs batches of records into a bounded window
pub trait Collector<T> {
    /// Absorb one batch (the whole operation, including bookkeeping)
    fn collect(&mut self, batch: &Batch<'_, T>) -> Result<()>;

    /// Maximum number of records retained
    fn capacity(&self) -> usize;

    /// Records currently held
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cumulative count of records ever offered, if tracked
    fn visited(&self) -> Option<i64>;
}
