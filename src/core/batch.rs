//! Batch input view
//!
//! A batch is one call's worth of records: a leading record count plus the
//! per-record dimensions and the flat element data. The per-record
//! dimensions must stay identical across every batch offered to the same
//! collector; the collector checks that, this type only checks internal
//! consistency.

use crate::{CollectorError, Result};

/// Borrowed view of one batch of fixed-width records
///
/// Rank is `1 + record_dims.len()`, so rank >= 1 holds by construction
/// for the two record-level constructors; `from_shape` rejects rank 0.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a, T> {
    records: usize,
    record_dims: &'a [usize],
    data: &'a [T],
}

impl<'a, T> Batch<'a, T> {
    /// Create a batch from a full shape (leading dim = record count)
    pub fn from_shape(shape: &'a [usize], data: &'a [T]) -> Result<Self> {
        let (&records, record_dims) = shape.split_first().ok_or(CollectorError::EmptyShape)?;
        let stride: usize = record_dims.iter().product();
        if records * stride != data.len() {
            return Err(CollectorError::DataShapeMismatch {
                data_len: data.len(),
                shape: shape.to_vec(),
            });
        }
        Ok(Self {
            records,
            record_dims,
            data,
        })
    }

    /// Create a batch of records with the given per-record dims, deriving
    /// the record count from the data length
    pub fn of_records(record_dims: &'a [usize], data: &'a [T]) -> Result<Self> {
        let stride: usize = record_dims.iter().product();
        if stride == 0 || data.len() % stride != 0 {
            return Err(CollectorError::DataShapeMismatch {
                data_len: data.len(),
                shape: record_dims.to_vec(),
            });
        }
        Ok(Self {
            records: data.len() / stride,
            record_dims,
            data,
        })
    }

    /// Batch of scalar (rank-1) records
    pub fn of_scalars(data: &'a [T]) -> Self {
        Self {
            records: data.len(),
            record_dims: &[],
            data,
        }
    }

    /// Number of records in this batch
    #[inline]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Per-record dimensions (empty for scalar records)
    #[inline]
    pub fn record_dims(&self) -> &[usize] {
        self.record_dims
    }

    /// Elements per record
    #[inline]
    pub fn record_stride(&self) -> usize {
        self.record_dims.iter().product()
    }

    /// Flat element data in record order
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Elements of record `i`
    pub fn record(&self, i: usize) -> Option<&'a [T]> {
        if i >= self.records {
            return None;
        }
        let stride = self.record_stride();
        Some(&self.data[i * stride..(i + 1) * stride])
    }
}
