//! Chunk planning: splitting an index range into fixed-stride chunks.
//!
//! Planning is pure arithmetic over the collection length. Every chunk is a
//! half-open index range `[start, end)`; chunks are contiguous,
//! non-overlapping, and their union tiles `0..length` exactly.

use std::num::NonZeroUsize;

use smallvec::SmallVec;

/// The process-wide default stride: the maximum number of elements a chunk
/// holds when the caller does not specify one.
pub const DEFAULT_STRIDE: NonZeroUsize = NonZeroUsize::new(256).unwrap();

/// A contiguous index range of the source collection, with its ordinal
/// position among all chunks planned for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Position of this chunk among all chunks for the call.
    pub ordinal: usize,
    /// First index covered by this chunk.
    pub start: usize,
    /// One past the last index covered by this chunk.
    pub end: usize,
}

impl Chunk {
    /// The index range this chunk covers.
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Number of elements in this chunk.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Plans the chunks for a collection of `length` elements.
///
/// Produces `ceil(length / stride)` chunks, each holding `stride` elements
/// except possibly the last, which holds the remainder. A zero-length
/// collection yields no chunks at all.
pub fn plan(length: usize, stride: NonZeroUsize) -> SmallVec<[Chunk; 8]> {
    let stride = stride.get();
    let mut chunks = SmallVec::new();
    let mut start = 0;
    while start < length {
        let end = length.min(start + stride);
        chunks.push(Chunk {
            ordinal: chunks.len(),
            start,
            end,
        });
        start = end;
    }
    chunks
}
