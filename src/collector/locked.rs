//! Locking decorator for shared collectors
//!
//! `WindowCollector::collect` takes `&mut self`, so a plain collector is
//! single-caller by construction. `LockedCollector` wraps any collector
//! in a mutex and runs the whole collect body as one critical section,
//! which is the entire thread-safety contract: no torn records, no lost
//! cursor or visited updates. Acquisition blocks; there is no timeout.

use parking_lot::Mutex;

use crate::collector::Collector;
use crate::core::Batch;
use crate::Result;

/// Mutex-guarded collector, shareable across threads
pub struct LockedCollector<C> {
    inner: Mutex<C>,
}

impl<C> LockedCollector<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Absorb one batch under the lock
    pub fn collect<T>(&self, batch: &Batch<'_, T>) -> Result<()>
    where
        C: Collector<T>,
    {
        self.inner.lock().collect(batch)
    }

    /// Run `f` with the guarded collector (snapshots, stats)
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Unwrap the inner collector
    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::WindowCollector;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_collect_under_lock() {
        let collector = LockedCollector::new(WindowCollector::<i64>::new(3).unwrap());
        collector.collect(&Batch::of_scalars(&[1, 2, 3, 4])).unwrap();

        assert_eq!(collector.with(|c| c.len()), 3);
        assert_eq!(collector.with(|c| c.as_slice().to_vec()), vec![2, 3, 4]);
    }

    #[test]
    fn test_concurrent_collect_no_lost_updates() {
        const THREADS: i64 = 8;
        const BATCHES_PER_THREAD: i64 = 25;

        let collector = Arc::new(LockedCollector::new(
            WindowCollector::<i64>::new(16)
                .unwrap()
                .with_visited_tracking(),
        ));

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let collector = Arc::clone(&collector);
                thread::spawn(move || {
                    for k in 0..BATCHES_PER_THREAD {
                        let v = t * BATCHES_PER_THREAD + k;
                        // one two-element record per batch, both halves equal
                        let data = [v, v];
                        collector
                            .collect(&Batch::of_records(&[2], &data).unwrap())
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // exactly one visited increment per record, no lost updates
        assert_eq!(
            collector.with(|c| c.visited()),
            Some(THREADS * BATCHES_PER_THREAD)
        );
        assert_eq!(collector.with(|c| c.len()), 16);

        // no torn records: both halves of every stored record match
        collector.with(|c| {
            for record in c.iter_records() {
                assert_eq!(record.len(), 2);
                assert_eq!(record[0], record[1]);
            }
        });
    }
}
