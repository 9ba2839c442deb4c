//! Insertion sort as a resumable state machine
//!
//! The yield policy here is unlike the other two variants: a cumulative
//! operation counter is incremented on every inner shift, and the algorithm
//! suspends whenever that counter reaches a multiple of 3. Pacing therefore
//! follows total shift work across the whole run rather than pass count:
//! nearly-sorted input shifts little and so yields little, and fully sorted
//! input completes with zero yields.

use super::StepOutcome;

/// Resumption state, including mid-insertion progress.
///
/// While an insertion is in flight, `key` holds the element being placed and
/// `pos` the slot it would currently go into; `values[pos]` still holds the
/// duplicate of the last shifted element. Each suspension leaves the buffer
/// in exactly that settled in-between state, the same one the shifting loop
/// itself would see.
#[derive(Debug)]
pub(crate) struct InsertionState {
    n: usize,
    /// Outer index of the next element to insert
    i: usize,
    /// Candidate slot for `key` within the sorted prefix
    pos: usize,
    /// Element currently being inserted; None between insertions
    key: Option<u32>,
    /// Cumulative shift counter across the whole run
    op_count: u64,
}

impl InsertionState {
    pub(crate) fn new(n: usize) -> Self {
        InsertionState {
            n,
            i: 1,
            pos: 0,
            key: None,
            op_count: 0,
        }
    }

    /// Run shifts until the counter hits a multiple of 3 or the sort ends.
    pub(crate) fn advance(&mut self, values: &mut [u32]) -> StepOutcome {
        loop {
            if let Some(key) = self.key {
                while self.pos > 0 && values[self.pos - 1] > key {
                    values[self.pos] = values[self.pos - 1];
                    self.pos -= 1;
                    self.op_count += 1;
                    if self.op_count % 3 == 0 {
                        return StepOutcome::Suspended;
                    }
                }
                values[self.pos] = key;
                self.key = None;
                self.i += 1;
            }

            if self.i >= self.n {
                return StepOutcome::Completed;
            }
            self.key = Some(values[self.i]);
            self.pos = self.i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yields_for(mut values: Vec<u32>) -> usize {
        let mut state = InsertionState::new(values.len());
        let mut yields = 0;
        while state.advance(&mut values) == StepOutcome::Suspended {
            yields += 1;
        }
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        yields
    }

    #[test]
    fn test_sorted_input_yields_zero_times() {
        assert_eq!(yields_for(vec![1, 2, 3, 4, 5, 6]), 0);
    }

    #[test]
    fn test_yields_track_shift_volume() {
        // Reversed input of length n performs n(n-1)/2 shifts
        assert_eq!(yields_for(vec![5, 4, 3, 2, 1]), 10 / 3);
        assert_eq!(yields_for(vec![6, 5, 4, 3, 2, 1]), 15 / 3);
    }

    #[test]
    fn test_single_shift_runs_do_not_yield() {
        // One inversion: one shift, counter reaches 1, never a multiple of 3
        assert_eq!(yields_for(vec![2, 1]), 0);
        assert_eq!(yields_for(vec![1, 3, 2, 4]), 0);
    }

    #[test]
    fn test_mid_insertion_suspension_state() {
        // Inserting the trailing 1 shifts three times; the third shift
        // suspends with the key still held outside the array
        let mut values = vec![2, 3, 4, 1];
        let mut state = InsertionState::new(4);

        assert_eq!(state.advance(&mut values), StepOutcome::Suspended);
        // Shifts of 4, 3, 2 happened; slot 0 still holds the duplicate 2
        assert_eq!(values, vec![2, 2, 3, 4]);

        assert_eq!(state.advance(&mut values), StepOutcome::Completed);
        assert_eq!(values, vec![1, 2, 3, 4]);
    }
}
