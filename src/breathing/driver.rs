//! Timer driver for the breathing sequencer
//!
//! One tokio task owns the [`SequencerState`] for the lifetime of a session.
//! Ticks from a single persistent interval and control commands from the
//! [`SessionHandle`] are handled in the same `select!` loop, so they can
//! never interleave. Commands win ties, which is what lets a reset supersede
//! a tick that is already due.

use super::sequencer::{SequencerSnapshot, SequencerState};
use crate::observability::SessionMetrics;
use crate::telemetry::{create_session_span, generate_session_id};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, Instrument};

const COMMAND_BUFFER: usize = 16;

/// Shortest tick period a session will run with
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Breathing session has ended")]
    Closed,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wall-clock length of one tick
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl From<&crate::config::BreathingConfig> for SessionConfig {
    fn from(config: &crate::config::BreathingConfig) -> Self {
        Self {
            tick_interval: config.tick_interval(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlKind {
    Start,
    Pause,
    Toggle,
    Reset,
    Shutdown,
}

struct Control {
    kind: ControlKind,
    reply: oneshot::Sender<SequencerState>,
}

/// Task side of a breathing session
pub struct BreathingSession {
    state: SequencerState,
    tick_interval: Duration,
    commands: mpsc::Receiver<Control>,
    snapshots: watch::Sender<SequencerSnapshot>,
    metrics: Arc<SessionMetrics>,
}

impl BreathingSession {
    /// Spawn the session task on the current runtime.
    ///
    /// The session starts paused. It ends on [`SessionHandle::shutdown`] or
    /// once every handle has been dropped. A tick interval shorter than
    /// [`MIN_TICK_INTERVAL`] is raised to it.
    pub fn spawn(config: SessionConfig) -> SessionHandle {
        let session_id = generate_session_id();
        let state = SequencerState::new();
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());
        let metrics = Arc::new(SessionMetrics::new());

        let session = BreathingSession {
            state,
            tick_interval: config.tick_interval.max(MIN_TICK_INTERVAL),
            commands: command_rx,
            snapshots: snapshot_tx,
            metrics: Arc::clone(&metrics),
        };

        let span = create_session_span("breathing", &session_id);
        tokio::spawn(session.run().instrument(span));

        SessionHandle {
            session_id,
            commands: command_tx,
            snapshots: snapshot_rx,
            metrics,
        }
    }

    async fn run(mut self) -> SequencerState {
        let mut ticker = interval_at(Instant::now() + self.tick_interval, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(tick_interval_ms = self.tick_interval.as_millis() as u64, "Breathing session opened");

        loop {
            tokio::select! {
                biased;

                command = self.commands.recv() => {
                    let Some(Control { kind, reply }) = command else {
                        debug!("All session handles dropped");
                        break;
                    };
                    self.apply(kind, &mut ticker);
                    let _ = reply.send(self.state);
                    if kind == ControlKind::Shutdown {
                        break;
                    }
                }
                _ = ticker.tick(), if self.state.is_running() => {
                    self.on_tick();
                }
            }
        }

        self.metrics.log_stats();
        info!(
            total_elapsed_secs = self.state.total_elapsed_secs(),
            completed_cycles = self.state.completed_cycles(),
            "Breathing session closed"
        );
        self.state
    }

    fn apply(&mut self, kind: ControlKind, ticker: &mut Interval) {
        self.metrics.record_command();
        let was_running = self.state.is_running();

        self.state = match kind {
            ControlKind::Start => self.state.start(),
            ControlKind::Pause | ControlKind::Shutdown => self.state.pause(),
            ControlKind::Toggle => self.state.toggle(),
            ControlKind::Reset => self.state.reset(),
        };

        // Resuming restarts the period so the first tick lands a full
        // interval after the start command.
        if self.state.is_running() && !was_running {
            ticker.reset();
        }

        info!(command = ?kind, is_running = self.state.is_running(), "Session control applied");
        self.publish();
    }

    fn on_tick(&mut self) {
        let before = self.state;
        self.state = self.state.tick();
        self.metrics.record_tick();

        if self.state.phase_index() != before.phase_index() {
            self.metrics.record_phase_transition();
            info!(
                phase = %self.state.current_phase(),
                total_elapsed_secs = self.state.total_elapsed_secs(),
                "Phase transition"
            );
        } else {
            debug!(remaining_secs = self.state.remaining_secs(), "Tick");
        }

        if self.state.completed_cycles() != before.completed_cycles() {
            self.metrics.record_cycle();
            info!(completed_cycles = self.state.completed_cycles(), "Breathing cycle completed");
        }

        self.publish();
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.snapshot());
    }
}

/// Control and read surface used by the presentation layer
#[derive(Clone)]
pub struct SessionHandle {
    session_id: String,
    commands: mpsc::Sender<Control>,
    snapshots: watch::Receiver<SequencerSnapshot>,
    metrics: Arc<SessionMetrics>,
}

impl SessionHandle {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub async fn start(&self) -> Result<SequencerState, SessionError> {
        self.send(ControlKind::Start).await
    }

    pub async fn pause(&self) -> Result<SequencerState, SessionError> {
        self.send(ControlKind::Pause).await
    }

    pub async fn toggle(&self) -> Result<SequencerState, SessionError> {
        self.send(ControlKind::Toggle).await
    }

    pub async fn reset(&self) -> Result<SequencerState, SessionError> {
        self.send(ControlKind::Reset).await
    }

    /// Stop the session task and return its final state
    pub async fn shutdown(&self) -> Result<SequencerState, SessionError> {
        self.send(ControlKind::Shutdown).await
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> SequencerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SequencerSnapshot> {
        self.snapshots.clone()
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Run until `cycles` full cycles have completed, then pause.
    pub async fn run_cycles(&self, cycles: u64) -> Result<SequencerSnapshot, SessionError> {
        let mut updates = self.subscribe();
        self.start().await?;

        loop {
            let snapshot = updates.borrow_and_update().clone();
            if snapshot.completed_cycles >= cycles {
                break;
            }
            updates.changed().await.map_err(|_| SessionError::Closed)?;
        }

        self.pause().await?;
        Ok(self.snapshot())
    }

    async fn send(&self, kind: ControlKind) -> Result<SequencerState, SessionError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Control { kind, reply })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Closed)
    }
}
