//! # Introduction
//!
//! sortty animates classic sorting algorithms in the terminal by advancing
//! them one discrete step at a time under control of the frame clock, so
//! every intermediate state of the array can be rendered between steps.
//!
//! ## Execution pipeline
//!
//! ```text
//! Permutation → Step Generator → Sequence Buffer → TUI
//!                      ↑
//!               Step Scheduler (fixed 10ms interval)
//! ```
//!
//! 1. [`sequence`] — the shared buffer: a random permutation of `1..=N`,
//!    mutated in place by the algorithms.
//! 2. [`stepper`] — the resumable-computation core: each sort is an explicit
//!    state machine advanced by a single `step` operation that runs to the
//!    next yield point or to completion.
//! 3. [`session`] — step timing against a fixed interval and arbitration of
//!    start/cancel/refill requests, with at most one run active at a time.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble sort (one yield per comparison), selection sort (one yield per
//! pass), insertion sort (one yield per three cumulative shifts).

pub mod sequence;
pub mod session;
pub mod stepper;
pub mod ui;
