//! Storage abstraction traits
//!
//! No dynamic dispatch in the collect path - use generics for
//! monomorphization.

use crate::Result;

/// Typed record storage addressed in whole records
///
/// # Design Notes
/// - The leading (record-count) dimension is mutable; the per-record
///   dimensions are fixed at construction
/// - Growth via `set_len` preserves existing record contents; newly
///   exposed slots are not required to be zeroed
/// - `copy_records` is bounds-checked; the collect path never issues
///   overlapping self-copies (the source is always the incoming batch)
pub trait RecordStore<T> {
    /// Create storage for records of the given per-record dims, holding
    /// zero records
    fn with_record_dims(record_dims: &[usize]) -> Self
    where
        Self: Sized;

    /// Per-record dimensions (excluding the leading record-count dim)
    fn record_dims(&self) -> &[usize];

    /// Number of records currently stored
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements per record
    fn record_stride(&self) -> usize;

    /// Grow or shrink the leading dimension to `records`
    fn set_len(&mut self, records: usize);

    /// Pre-allocation hint; no observable effect on contents
    fn reserve(&mut self, records: usize);

    /// Copy `count` whole records from `src` (starting at record
    /// `src_record`) into this store at record `dst_record`.
    /// `count == 0` is a no-op.
    fn copy_records(
        &mut self,
        dst_record: usize,
        src: &[T],
        src_record: usize,
        count: usize,
    ) -> Result<()>;

    /// Flat view of the stored elements in physical slot order
    fn as_slice(&self) -> &[T];
}
