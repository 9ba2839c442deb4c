//! Top-level session state: one buffer, at most one active run

use crate::sequence::SequenceBuffer;
use crate::session::scheduler::StepScheduler;
use crate::stepper::{SortVariant, StepGenerator, StepOutcome};
use rustc_hash::FxHashMap;

/// Whether a sort is currently in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Running,
}

/// Completed-run statistics for one variant, shown in the status bar
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    /// Number of runs of this variant driven to completion
    pub runs: u32,
    /// Yields taken by the most recent completed run
    pub last_yields: usize,
}

/// Owns the sequence buffer and arbitrates start/cancel requests.
///
/// At most one [`StepGenerator`] is active at a time; the session is
/// [`Running`](SessionStatus::Running) exactly while one is held. The
/// controller hands the generator a mutable borrow of the buffer for the
/// duration of a single step only, so observers reading
/// [`snapshot`](Self::snapshot) between frames always see settled state.
#[derive(Debug)]
pub struct SessionController {
    buffer: SequenceBuffer,
    scheduler: StepScheduler,
    generator: Option<StepGenerator>,
    /// Yields taken by the run in progress
    current_yields: usize,
    stats: FxHashMap<SortVariant, RunStats>,
}

impl SessionController {
    pub fn new(buffer: SequenceBuffer) -> Self {
        SessionController {
            buffer,
            scheduler: StepScheduler::default(),
            generator: None,
            current_yields: 0,
            stats: FxHashMap::default(),
        }
    }

    /// Begin a run of `variant` over the current buffer contents.
    ///
    /// Silently ignored while a run is already active; a start request racing
    /// against an in-flight run is benign, not an error.
    pub fn request_start(&mut self, variant: SortVariant) {
        if self.generator.is_some() {
            return;
        }
        self.generator = Some(StepGenerator::new(variant, self.buffer.len()));
        self.current_yields = 0;
    }

    /// Cancel the active run, keeping the buffer's partial progress.
    ///
    /// No-op when idle.
    pub fn request_cancel(&mut self) {
        if let Some(mut generator) = self.generator.take() {
            generator.cancel();
        }
    }

    /// Re-randomize the buffer. Ignored while a run is active.
    pub fn request_refill(&mut self) {
        if self.generator.is_none() {
            self.buffer.shuffle();
        }
    }

    /// Feed `dt` seconds of host time to the scheduler and run at most one
    /// generator step if the interval elapsed. Returns the status afterwards.
    pub fn advance(&mut self, dt: f32) -> SessionStatus {
        let fired = self.scheduler.tick(dt);

        if fired {
            if let Some(generator) = &mut self.generator {
                match generator.step(self.buffer.values_mut()) {
                    StepOutcome::Suspended => self.current_yields += 1,
                    StepOutcome::Completed => {
                        let entry = self.stats.entry(generator.variant()).or_default();
                        entry.runs += 1;
                        entry.last_yields = self.current_yields;
                        self.generator = None;
                    }
                }
            }
        }

        self.status()
    }

    pub fn status(&self) -> SessionStatus {
        if self.generator.is_some() {
            SessionStatus::Running
        } else {
            SessionStatus::Idle
        }
    }

    /// Variant of the active run, if any
    pub fn active_variant(&self) -> Option<SortVariant> {
        self.generator.as_ref().map(StepGenerator::variant)
    }

    /// Read-only view of the buffer for rendering
    pub fn snapshot(&self) -> &[u32] {
        self.buffer.values()
    }

    /// Completed-run statistics for `variant`, if it ever finished
    pub fn stats(&self, variant: SortVariant) -> Option<RunStats> {
        self.stats.get(&variant).copied()
    }
}
