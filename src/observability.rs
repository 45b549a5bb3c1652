use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Counters for one breathing session
#[derive(Debug, Default)]
pub struct SessionMetrics {
    pub ticks: AtomicU64,
    pub phase_transitions: AtomicU64,
    pub cycles_completed: AtomicU64,
    pub control_commands: AtomicU64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_phase_transition(&self) {
        self.phase_transitions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cycle(&self) {
        self.cycles_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_command(&self) {
        self.control_commands.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> SessionStats {
        SessionStats {
            ticks: self.ticks.load(Ordering::Relaxed),
            phase_transitions: self.phase_transitions.load(Ordering::Relaxed),
            cycles_completed: self.cycles_completed.load(Ordering::Relaxed),
            control_commands: self.control_commands.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            ticks = stats.ticks,
            phase_transitions = stats.phase_transitions,
            cycles_completed = stats.cycles_completed,
            control_commands = stats.control_commands,
            "Breathing session metrics"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub phase_transitions: u64,
    pub cycles_completed: u64,
    pub control_commands: u64,
}
