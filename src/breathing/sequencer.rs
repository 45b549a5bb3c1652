//! Breathing phase sequencer
//!
//! The whole exercise state lives in one `Copy` value and every operation
//! is a pure function from state to state. The timer driver in
//! [`crate::breathing::driver`] is the only thing that decides *when* a
//! tick happens; this module only decides *what* a tick does.

use super::phase::{Animation, Phase};
use serde::Serialize;

/// Fields are private so only [`SequencerState::new`] and the transition
/// methods can produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequencerState {
    /// Position in [`Phase::ALL`], always `< Phase::COUNT`.
    phase_index: usize,
    /// Seconds left in the current phase, within `[0, phase duration]`.
    remaining_secs: u32,
    /// Ticks processed since the last reset.
    total_elapsed_secs: u64,
    /// Number of wraps from the last phase back to the first.
    completed_cycles: u64,
    is_running: bool,
}

impl Default for SequencerState {
    fn default() -> Self {
        Self::new()
    }
}

impl SequencerState {
    /// Initial state: paused at the start of the first inhale.
    pub const fn new() -> Self {
        Self {
            phase_index: 0,
            remaining_secs: Phase::Inhale.duration_secs(),
            total_elapsed_secs: 0,
            completed_cycles: 0,
            is_running: false,
        }
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_elapsed_secs(&self) -> u64 {
        self.total_elapsed_secs
    }

    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn current_phase(&self) -> Phase {
        Phase::from_index(self.phase_index)
    }

    pub fn phase_duration(&self) -> u32 {
        self.current_phase().duration_secs()
    }

    /// Advance by one second.
    ///
    /// A paused state is returned untouched. When the countdown would drop
    /// below one the sequencer moves to the next phase in the same tick, so
    /// no phase ever shows zero seconds.
    #[must_use]
    pub fn tick(self) -> Self {
        if !self.is_running {
            return self;
        }

        let total_elapsed_secs = self.total_elapsed_secs + 1;
        let remaining = self.remaining_secs.saturating_sub(1);

        if remaining > 0 {
            return Self {
                remaining_secs: remaining,
                total_elapsed_secs,
                ..self
            };
        }

        let next_index = (self.phase_index + 1) % Phase::COUNT;
        let completed_cycles = if next_index == 0 {
            self.completed_cycles + 1
        } else {
            self.completed_cycles
        };

        Self {
            phase_index: next_index,
            remaining_secs: Phase::from_index(next_index).duration_secs(),
            total_elapsed_secs,
            completed_cycles,
            is_running: self.is_running,
        }
    }

    #[must_use]
    pub fn start(self) -> Self {
        Self {
            is_running: true,
            ..self
        }
    }

    #[must_use]
    pub fn pause(self) -> Self {
        Self {
            is_running: false,
            ..self
        }
    }

    /// Single start/pause control.
    #[must_use]
    pub fn toggle(self) -> Self {
        if self.is_running {
            self.pause()
        } else {
            self.start()
        }
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Share of the current phase already elapsed, `1 - remaining / duration`.
    ///
    /// Not clamped beyond what the invariants already guarantee: it stays in
    /// `[0, 1]` and only reads `1.0` at a phase boundary.
    pub fn progress_fraction(&self) -> f64 {
        1.0 - f64::from(self.remaining_secs) / f64::from(self.phase_duration())
    }

    pub fn snapshot(&self) -> SequencerSnapshot {
        let phase = self.current_phase();
        SequencerSnapshot {
            phase,
            label: phase.label(),
            instruction: phase.instruction(),
            animation: phase.animation(),
            phase_duration_secs: phase.duration_secs(),
            remaining_secs: self.remaining_secs,
            progress_fraction: self.progress_fraction(),
            completed_cycles: self.completed_cycles,
            total_elapsed_secs: self.total_elapsed_secs,
            is_running: self.is_running,
        }
    }
}

/// Read model handed to renderers once per update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencerSnapshot {
    pub phase: Phase,
    pub label: &'static str,
    pub instruction: &'static str,
    pub animation: Animation,
    pub phase_duration_secs: u32,
    pub remaining_secs: u32,
    pub progress_fraction: f64,
    pub completed_cycles: u64,
    pub total_elapsed_secs: u64,
    pub is_running: bool,
}

impl Default for SequencerSnapshot {
    fn default() -> Self {
        SequencerState::new().snapshot()
    }
}
