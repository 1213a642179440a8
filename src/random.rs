//! Pluggable randomness for quote and entry selection.
//!
//! The session never calls `rand` directly; it asks a `RandomSource` for an
//! index. Production uses `ThreadRandom`, tests use `SequenceRandom` to make
//! selections predictable.

use rand::Rng;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..len`, or `0` when `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each value is reduced modulo `len`, so any script is valid for any slice.
///
/// ```
/// use whispers::random::{RandomSource, SequenceRandom};
///
/// let mut source = SequenceRandom::new(vec![2, 7]);
/// assert_eq!(source.pick_index(5), 2);
/// assert_eq!(source.pick_index(5), 2); // 7 % 5
/// assert_eq!(source.pick_index(5), 2); // cycled back to 2
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    indices: Vec<usize>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(indices: Vec<usize>) -> Self {
        SequenceRandom {
            indices,
            position: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 || self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.position % self.indices.len()];
        self.position += 1;
        value % len
    }
}

/// Picks one element of `items`, or `None` if it is empty.
pub fn choose<'a, T, R: RandomSource + ?Sized>(source: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(source.pick_index(items.len()))
}
