//! Stepwise sorting engine
//!
//! This module provides the resumable-computation core:
//! - [`StepGenerator`]: a suspended sorting run advanced one step at a time
//! - [`bubble`], [`selection`], [`insertion`]: the per-variant resumption states
//!
//! # Execution Model
//!
//! The original design for this kind of animation is a coroutine that yields
//! between mutations. Here the suspension is an explicit state machine
//! instead: each variant keeps exactly the loop indices, keys, and counters
//! it needs to resume, and a single [`StepGenerator::step`] call runs the
//! algorithm from the last yield point to the next one (or to the end).
//!
//! Between two `step` calls the buffer is untouched, so an observer reading
//! it sees a fully settled intermediate state, never half of a swap.
//!
//! # Yield Granularity
//!
//! The three variants deliberately yield at different granularities, which is
//! what gives each its animation character:
//! - Bubble yields after every adjacent comparison (`N·(N-1)/2` yields).
//! - Selection yields after each outer pass's swap (`N-1` yields).
//! - Insertion yields whenever its cumulative shift counter hits a multiple
//!   of 3, so pacing follows total shift work rather than pass count.

pub mod bubble;
pub mod insertion;
pub mod selection;

use bubble::BubbleState;
use insertion::InsertionState;
use selection::SelectionState;

/// Which sorting algorithm a generator runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortVariant {
    Bubble,
    Selection,
    Insertion,
}

impl SortVariant {
    /// Display name used by the UI
    pub fn name(self) -> &'static str {
        match self {
            SortVariant::Bubble => "Bubble",
            SortVariant::Selection => "Selection",
            SortVariant::Insertion => "Insertion",
        }
    }
}

/// Result of one `step` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The algorithm paused at a yield point; more work remains
    Suspended,
    /// The algorithm ran to its end (or the generator is already finished)
    Completed,
}

/// Internal lifecycle of a generator
#[derive(Debug)]
enum GenState {
    /// Created but never stepped; no mutation has occurred yet
    NotStarted(AlgoState),
    /// Paused at a yield point with per-variant resumption state
    Suspended(AlgoState),
    /// Ran to the end; terminal
    Completed,
    /// Discarded before completion; terminal
    Cancelled,
}

/// Per-variant resumption state
#[derive(Debug)]
enum AlgoState {
    Bubble(BubbleState),
    Selection(SelectionState),
    Insertion(InsertionState),
}

impl AlgoState {
    fn new(variant: SortVariant, n: usize) -> Self {
        match variant {
            SortVariant::Bubble => AlgoState::Bubble(BubbleState::new(n)),
            SortVariant::Selection => AlgoState::Selection(SelectionState::new(n)),
            SortVariant::Insertion => AlgoState::Insertion(InsertionState::new(n)),
        }
    }

    fn advance(&mut self, values: &mut [u32]) -> StepOutcome {
        match self {
            AlgoState::Bubble(state) => state.advance(values),
            AlgoState::Selection(state) => state.advance(values),
            AlgoState::Insertion(state) => state.advance(values),
        }
    }
}

/// A resumable sorting run over a sequence buffer
///
/// The generator is bound to the buffer's length at creation but borrows the
/// values only for the duration of each [`step`](Self::step) call, so nothing
/// holds the buffer between steps.
#[derive(Debug)]
pub struct StepGenerator {
    variant: SortVariant,
    state: GenState,
}

impl StepGenerator {
    /// Create a generator for `variant` bound to a buffer of length `n`.
    ///
    /// No mutation occurs until the first [`step`](Self::step) call.
    pub fn new(variant: SortVariant, n: usize) -> Self {
        StepGenerator {
            variant,
            state: GenState::NotStarted(AlgoState::new(variant, n)),
        }
    }

    pub fn variant(&self) -> SortVariant {
        self.variant
    }

    /// Resume from the last yield point and run to the next one.
    ///
    /// Stepping a completed or cancelled generator is a no-op returning
    /// [`StepOutcome::Completed`].
    pub fn step(&mut self, values: &mut [u32]) -> StepOutcome {
        match std::mem::replace(&mut self.state, GenState::Completed) {
            GenState::Completed => StepOutcome::Completed,
            GenState::Cancelled => {
                self.state = GenState::Cancelled;
                StepOutcome::Completed
            }
            GenState::NotStarted(mut algo) | GenState::Suspended(mut algo) => {
                let outcome = algo.advance(values);
                if outcome == StepOutcome::Suspended {
                    self.state = GenState::Suspended(algo);
                }
                outcome
            }
        }
    }

    /// Discard remaining work without completing.
    ///
    /// The buffer keeps whatever partial mutation already happened. Cancelling
    /// a completed generator does nothing; cancelling twice is harmless.
    pub fn cancel(&mut self) {
        match self.state {
            GenState::Completed | GenState::Cancelled => {}
            _ => self.state = GenState::Cancelled,
        }
    }

    /// Whether the generator has reached a terminal state
    pub fn is_finished(&self) -> bool {
        matches!(self.state, GenState::Completed | GenState::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Step to completion, returning the number of Suspended results (yields)
    fn run_to_completion(variant: SortVariant, values: &mut [u32]) -> usize {
        let mut generator = StepGenerator::new(variant, values.len());
        let mut yields = 0;
        loop {
            match generator.step(values) {
                StepOutcome::Suspended => yields += 1,
                StepOutcome::Completed => return yields,
            }
        }
    }

    #[test]
    fn test_all_variants_sort() {
        for variant in [
            SortVariant::Bubble,
            SortVariant::Selection,
            SortVariant::Insertion,
        ] {
            let mut values = vec![9, 3, 7, 1, 8, 2, 6, 4, 5];
            run_to_completion(variant, &mut values);
            assert_eq!(
                values,
                vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
                "{} sort failed",
                variant.name()
            );
        }
    }

    #[test]
    fn test_degenerate_inputs_complete_with_zero_yields() {
        for variant in [
            SortVariant::Bubble,
            SortVariant::Selection,
            SortVariant::Insertion,
        ] {
            let mut empty: Vec<u32> = vec![];
            assert_eq!(run_to_completion(variant, &mut empty), 0);

            let mut single = vec![42];
            assert_eq!(run_to_completion(variant, &mut single), 0);
            assert_eq!(single, vec![42]);
        }
    }

    #[test]
    fn test_step_after_completion_is_noop() {
        let mut values = vec![2, 1];
        let mut generator = StepGenerator::new(SortVariant::Bubble, values.len());
        while generator.step(&mut values) == StepOutcome::Suspended {}

        let before = values.clone();
        assert_eq!(generator.step(&mut values), StepOutcome::Completed);
        assert_eq!(generator.step(&mut values), StepOutcome::Completed);
        assert_eq!(values, before);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut values = vec![4, 3, 2, 1];
        let mut generator = StepGenerator::new(SortVariant::Bubble, values.len());
        generator.step(&mut values);
        let partial = values.clone();

        generator.cancel();
        generator.cancel();
        assert!(generator.is_finished());

        // Stepping after cancel neither mutates nor resumes
        assert_eq!(generator.step(&mut values), StepOutcome::Completed);
        assert_eq!(values, partial);
    }

    #[test]
    fn test_cancel_before_first_step() {
        let mut values = vec![3, 1, 2];
        let mut generator = StepGenerator::new(SortVariant::Selection, values.len());
        generator.cancel();
        assert_eq!(generator.step(&mut values), StepOutcome::Completed);
        assert_eq!(values, vec![3, 1, 2], "Cancelled generator mutated buffer");
    }
}
