//! Selection sort as a resumable state machine
//!
//! Each step runs one complete inner scan for the minimum of the unsorted
//! tail, swaps it into place, and yields, so a full run takes exactly `N-1`
//! yields. Ties go to the first occurrence: the scan only updates its
//! candidate on a strictly smaller value.

use super::StepOutcome;

/// Resumption state: only the outer index survives between steps, because
/// the whole inner scan runs within one step.
#[derive(Debug)]
pub(crate) struct SelectionState {
    n: usize,
    i: usize,
}

impl SelectionState {
    pub(crate) fn new(n: usize) -> Self {
        SelectionState { n, i: 0 }
    }

    /// Scan for the minimum of `values[i..]`, swap it to position `i`, suspend.
    pub(crate) fn advance(&mut self, values: &mut [u32]) -> StepOutcome {
        if self.n < 2 || self.i >= self.n - 1 {
            return StepOutcome::Completed;
        }

        let mut imin = self.i;
        for j in self.i + 1..self.n {
            if values[j] < values[imin] {
                imin = j;
            }
        }

        // Swaps unconditionally, matching the per-pass swap the animation shows
        values.swap(self.i, imin);
        self.i += 1;

        StepOutcome::Suspended
    }
}
