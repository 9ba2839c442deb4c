//! The shared sequence of values being sorted
//!
//! [`SequenceBuffer`] owns the array of comparable elements. The session
//! controller holds it for the duration of a run; the active step generator
//! receives a mutable borrow of the values for one step at a time, and the
//! UI reads an immutable snapshot between steps.
//!
//! # Initial Contents
//!
//! A freshly filled buffer holds a random permutation of `1..=N` — no
//! duplicates and a bounded range, so every bar in the visualization has a
//! distinct height and the tallest bar is exactly `N`.

use rand::seq::SliceRandom;

/// An ordered, fixed-length collection of values mutated in place by the
/// sorting algorithms.
#[derive(Debug, Clone)]
pub struct SequenceBuffer {
    values: Vec<u32>,
}

impl SequenceBuffer {
    /// Create a buffer holding a shuffled permutation of `1..=n`
    pub fn with_permutation(n: usize) -> Self {
        let mut buffer = SequenceBuffer {
            values: (1..=n as u32).collect(),
        };
        buffer.shuffle();
        buffer
    }

    /// Create a buffer from explicit values (used by tests and embedding hosts)
    pub fn from_values(values: Vec<u32>) -> Self {
        SequenceBuffer { values }
    }

    /// Re-randomize the buffer in place, keeping the same element set
    pub fn shuffle(&mut self) {
        self.values.shuffle(&mut rand::thread_rng());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the current values
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Exclusive access for the active generator, scoped to one step call
    pub(crate) fn values_mut(&mut self) -> &mut [u32] {
        &mut self.values
    }

    /// Whether the values are in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}
