//! Circular window over the most recently collected records
//!
//! The window grows in place until it reaches capacity, then overwrites
//! slots in circular order starting at the cursor. A batch larger than
//! the whole window replaces it with the batch's tail. Physical slot
//! order is not chronological once the window has wrapped; the contract
//! is "the last `capacity` records offered are present".

use std::marker::PhantomData;

use crate::collector::Collector;
use crate::core::Batch;
use crate::storage::{RecordStore, VecStore};
use crate::{CollectorError, Result};

/// Window state once the record shape is known
#[derive(Debug, Clone)]
struct ActiveWindow<S> {
    store: S,
    /// Next slot to overwrite; equals occupancy until the window is full
    cursor: usize,
}

/// Shape is fixed by the first batch, so an empty collector has no shape
/// to report yet. Modeled explicitly rather than inferred from a
/// zero-size store.
#[derive(Debug, Clone)]
enum WindowState<S> {
    Uninitialized,
    Active(ActiveWindow<S>),
}

/// Fixed-capacity collector of the most recently seen records
///
/// Single-caller by construction (`collect` takes `&mut self`); wrap in
/// [`crate::collector::LockedCollector`] to share across threads.
#[derive(Debug, Clone)]
pub struct WindowCollector<T, S = VecStore<T>> {
    capacity: usize,
    state: WindowState<S>,
    track_visited: bool,
    visited: i64,
    _elem: PhantomData<T>,
}

/// Snapshot of the collector's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStats {
    pub capacity: usize,
    pub occupancy: usize,
    pub cursor: Option<usize>,
    pub visited: Option<i64>,
    /// Records offered but no longer held (requires visited tracking)
    pub evicted: Option<i64>,
}

impl<T, S: RecordStore<T>> WindowCollector<T, S> {
    /// Create a collector retaining at most `capacity` records
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CollectorError::Config(
                "window capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            state: WindowState::Uninitialized,
            track_visited: false,
            visited: 0,
            _elem: PhantomData,
        })
    }

    /// Enable the cumulative visited counter
    pub fn with_visited_tracking(mut self) -> Self {
        self.track_visited = true;
        self
    }

    /// Absorb one batch into the window
    ///
    /// The record shape of every batch after the first must match the
    /// shape established by the first. All precondition failures abort
    /// before the window is touched.
    pub fn collect(&mut self, batch: &Batch<'_, T>) -> Result<()> {
        if let WindowState::Active(win) = &self.state {
            if win.store.record_dims() != batch.record_dims() {
                return Err(CollectorError::ShapeMismatch {
                    expected: win.store.record_dims().to_vec(),
                    got: batch.record_dims().to_vec(),
                });
            }
        }

        let first_batch = matches!(self.state, WindowState::Uninitialized);

        if self.track_visited {
            if first_batch {
                self.visited = 0;
            }
            if self.visited < 0 {
                return Err(CollectorError::NegativeVisited(self.visited));
            }
            self.visited += batch.records() as i64;
        }

        let capacity = self.capacity;
        self.ensure_initialized(batch.record_dims()).absorb(capacity, batch)
    }

    /// Fix the record shape on first use and reserve the full window
    fn ensure_initialized(&mut self, record_dims: &[usize]) -> &mut ActiveWindow<S> {
        if matches!(self.state, WindowState::Uninitialized) {
            let mut store = S::with_record_dims(record_dims);
            store.reserve(self.capacity);
            tracing::debug!(
                capacity = self.capacity,
                record_dims = ?record_dims,
                "window initialized"
            );
            self.state = WindowState::Active(ActiveWindow { store, cursor: 0 });
        }
        match &mut self.state {
            WindowState::Active(win) => win,
            WindowState::Uninitialized => unreachable!(),
        }
    }

    /// Maximum number of records retained
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records currently held
    #[inline]
    pub fn len(&self) -> usize {
        match &self.state {
            WindowState::Active(win) => win.store.len(),
            WindowState::Uninitialized => 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Whether the first batch has fixed the record shape yet
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, WindowState::Active(_))
    }

    /// Next slot to overwrite; `None` before the first batch
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        match &self.state {
            WindowState::Active(win) => Some(win.cursor),
            WindowState::Uninitialized => None,
        }
    }

    /// Cumulative records offered, if tracking is enabled
    #[inline]
    pub fn visited(&self) -> Option<i64> {
        self.track_visited.then_some(self.visited)
    }

    /// Established per-record dims; `None` before the first batch
    pub fn record_dims(&self) -> Option<&[usize]> {
        match &self.state {
            WindowState::Active(win) => Some(win.store.record_dims()),
            WindowState::Uninitialized => None,
        }
    }

    /// Window contents in physical slot order (not chronological)
    pub fn as_slice(&self) -> &[T] {
        match &self.state {
            WindowState::Active(win) => win.store.as_slice(),
            WindowState::Uninitialized => &[],
        }
    }

    /// Held records, one slice per record, in physical slot order
    pub fn iter_records(&self) -> impl Iterator<Item = &[T]> {
        let (slice, stride) = match &self.state {
            WindowState::Active(win) => {
                (win.store.as_slice(), win.store.record_stride().max(1))
            }
            WindowState::Uninitialized => (&[][..], 1),
        };
        slice.chunks(stride)
    }

    /// Counter snapshot
    pub fn stats(&self) -> WindowStats {
        let occupancy = self.len();
        let visited = self.visited();
        WindowStats {
            capacity: self.capacity,
            occupancy,
            cursor: self.cursor(),
            visited,
            evicted: visited.map(|v| (v - occupancy as i64).max(0)),
        }
    }
}

impl<S> ActiveWindow<S> {
    /// Copy a batch into the window: grow to capacity first, then either
    /// replace everything (oversized batch) or insert circularly at the
    /// cursor with an optional wraparound tail.
    fn absorb<T>(&mut self, capacity: usize, batch: &Batch<'_, T>) -> Result<()>
    where
        S: RecordStore<T>,
    {
        // The only path that returns without touching the cursor.
        if batch.is_empty() {
            return Ok(());
        }

        let num_to_copy = batch.records().min(capacity);
        let prior = self.store.len();
        let new_occupancy = capacity.min(prior + num_to_copy);
        if new_occupancy > prior {
            self.store.set_len(new_occupancy);
        }

        if self.cursor >= self.store.len() {
            return Err(CollectorError::CursorOutOfRange {
                cursor: self.cursor,
                len: self.store.len(),
            });
        }

        if batch.records() > capacity {
            // Oversized batch: the whole window becomes the batch's tail.
            self.store
                .copy_records(0, batch.data(), batch.records() - capacity, capacity)?;
            self.cursor = 0;
            return Ok(());
        }

        let start = self.cursor;
        let first_chunk = (num_to_copy + start).min(capacity) - start;
        self.store.copy_records(start, batch.data(), 0, first_chunk)?;
        // Wraparound tail; zero-length when the batch fits before the end.
        self.store
            .copy_records(0, batch.data(), first_chunk, num_to_copy - first_chunk)?;
        self.cursor = (start + num_to_copy) % capacity;

        Ok(())
    }
}

impl<T, S: RecordStore<T>> Collector<T> for WindowCollector<T, S> {
    #[inline]
    fn collect(&mut self, batch: &Batch<'_, T>) -> Result<()> {
        WindowCollector::collect(self, batch)
    }

    #[inline]
    fn capacity(&self) -> usize {
        WindowCollector::capacity(self)
    }

    #[inline]
    fn len(&self) -> usize {
        WindowCollector::len(self)
    }

    #[inline]
    fn visited(&self) -> Option<i64> {
        WindowCollector::visited(self)
    }
}
