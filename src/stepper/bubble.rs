//! Bubble sort as a resumable state machine
//!
//! Yields once per adjacent comparison, whether or not a swap occurred, so a
//! full run takes exactly `N·(N-1)/2` yields. There is no early exit on
//! already-sorted input; the animation always shows every pass.

use super::StepOutcome;

/// Resumption state: the outer pass index and inner comparison index
#[derive(Debug)]
pub(crate) struct BubbleState {
    n: usize,
    i: usize,
    j: usize,
}

impl BubbleState {
    pub(crate) fn new(n: usize) -> Self {
        BubbleState { n, i: 0, j: 0 }
    }

    /// Perform one comparison (and swap if out of order), then suspend.
    ///
    /// Completes once every pass has run, i.e. on the call after the final
    /// comparison's yield.
    pub(crate) fn advance(&mut self, values: &mut [u32]) -> StepOutcome {
        if self.n < 2 || self.i >= self.n - 1 {
            return StepOutcome::Completed;
        }

        if values[self.j] > values[self.j + 1] {
            values.swap(self.j, self.j + 1);
        }

        // Pass i leaves the largest i+1 elements settled at the end
        self.j += 1;
        if self.j >= self.n - 1 - self.i {
            self.j = 0;
            self.i += 1;
        }

        StepOutcome::Suspended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_count_is_quadratic() {
        // N(N-1)/2 yields regardless of input order
        for values in [vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1], vec![2, 5, 1, 4, 3]] {
            let mut values = values;
            let mut state = BubbleState::new(values.len());
            let mut yields = 0;
            while state.advance(&mut values) == StepOutcome::Suspended {
                yields += 1;
            }
            assert_eq!(yields, 10);
            assert_eq!(values, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_step_sequence_3_1_2() {
        let mut values = vec![3, 1, 2];
        let mut state = BubbleState::new(3);

        assert_eq!(state.advance(&mut values), StepOutcome::Suspended);
        assert_eq!(values, vec![1, 3, 2]); // swap at j=0

        assert_eq!(state.advance(&mut values), StepOutcome::Suspended);
        assert_eq!(values, vec![1, 2, 3]); // swap at j=1

        assert_eq!(state.advance(&mut values), StepOutcome::Suspended);
        assert_eq!(values, vec![1, 2, 3]); // j=0 of pass i=1, no swap

        assert_eq!(state.advance(&mut values), StepOutcome::Completed);
    }
}
