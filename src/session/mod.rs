//! Run arbitration and step timing
//!
//! This module is the boundary between the host's frame loop and the
//! stepping core:
//! - [`scheduler`]: converts wall-clock frame deltas into discrete step fires
//! - [`controller`]: owns the buffer, arbitrates start/cancel, drives the
//!   active generator
//!
//! # Control Flow
//!
//! The host calls [`SessionController::advance`] once per frame with the
//! elapsed time. The controller forwards it to the [`StepScheduler`]; when
//! the fixed step interval has elapsed, exactly one generator step runs,
//! mutating the buffer and either suspending or completing. The controller
//! is the only owner of the buffer, so there is never a second writer.

pub mod controller;
pub mod scheduler;

pub use controller::{RunStats, SessionController, SessionStatus};
pub use scheduler::StepScheduler;
