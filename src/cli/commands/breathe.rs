use super::Command;
use crate::breathing::{Animation, BreathingSession, SequencerSnapshot, SessionConfig};
use crate::shutdown::ShutdownCoordinator;
use anyhow::Result;
use std::io::Write;
use std::time::Duration;

const PROGRESS_WIDTH: usize = 20;

const BENEFITS: [&str; 5] = [
    "Reduces stress and anxiety",
    "Lowers blood pressure",
    "Improves focus and concentration",
    "Helps you manage emotions",
    "Promotes better sleep quality",
];

pub struct BreatheCommand {
    pub cycles: Option<u64>,
    pub tick_interval: Duration,
    pub json: bool,
}

impl BreatheCommand {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            cycles: None,
            tick_interval,
            json: false,
        }
    }

    pub fn with_cycles(mut self, cycles: Option<u64>) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn render(&self, snapshot: &SequencerSnapshot, out: &mut impl Write) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(snapshot)?)?;
        } else {
            writeln!(out, "{}", render_frame(snapshot))?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Command for BreatheCommand {
    async fn execute(&self) -> Result<()> {
        let handle = BreathingSession::spawn(SessionConfig {
            tick_interval: self.tick_interval,
        });
        let mut shutdown = ShutdownCoordinator::install();
        let mut updates = handle.subscribe();
        let mut stdout = std::io::stdout();

        if !self.json {
            println!("🌬️  Breathing Exercise");
            println!("Take a moment to relax with this guided breathing exercise");
            match self.cycles {
                Some(n) => println!("Running {n} cycle(s). Press Ctrl-C to stop early."),
                None => println!("Press Ctrl-C to stop."),
            }
            println!();
        }

        handle.start().await?;
        tracing::info!(session_id = handle.session_id(), cycles = ?self.cycles, "Breathing exercise started");

        loop {
            let snapshot = updates.borrow_and_update().clone();
            self.render(&snapshot, &mut stdout)?;

            if self
                .cycles
                .is_some_and(|target| snapshot.completed_cycles >= target)
            {
                break;
            }

            tokio::select! {
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = shutdown.wait() => break,
            }
        }

        let final_state = handle.shutdown().await?;

        if !self.json {
            println!();
            println!(
                "✅ Session complete: {} cycle(s), {}s of breathing",
                final_state.completed_cycles(),
                final_state.total_elapsed_secs()
            );
            println!();
            println!("Benefits of Deep Breathing");
            for benefit in BENEFITS {
                println!("  • {benefit}");
            }
            println!();
            println!("Practice these exercises regularly for best results. If you experience any discomfort, please stop and consult a healthcare professional.");
        }

        Ok(())
    }
}

/// One text line of the breathing display
pub fn render_frame(snapshot: &SequencerSnapshot) -> String {
    let circle = match snapshot.animation {
        Animation::Expand => "◯→",
        Animation::Contract => "→◯",
        Animation::Steady => " ◯",
    };
    format!(
        "{circle} {:<6} {:>2}s {}  {:<18}  Completed cycles: {}",
        snapshot.label,
        snapshot.remaining_secs,
        progress_bar(snapshot.progress_fraction),
        snapshot.instruction,
        snapshot.completed_cycles,
    )
}

fn progress_bar(fraction: f64) -> String {
    let filled = ((fraction.clamp(0.0, 1.0)) * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breathing::SequencerState;

    #[test]
    fn test_render_initial_frame() {
        let frame = render_frame(&SequencerState::new().snapshot());
        assert!(frame.contains("Inhale"));
        assert!(frame.contains(" 4s"));
        assert!(frame.contains("Breathe in slowly"));
        assert!(frame.contains("Completed cycles: 0"));
        assert!(frame.contains(&format!("[{}]", "-".repeat(PROGRESS_WIDTH))));
    }

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(progress_bar(0.5), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(1.0), format!("[{}]", "#".repeat(PROGRESS_WIDTH)));
    }

    #[test]
    fn test_json_render_is_one_line() {
        let command = BreatheCommand::new(Duration::from_secs(1)).with_json(true);
        let mut out = Vec::new();
        command
            .render(&SequencerState::new().start().snapshot(), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["phase"], "inhale");
        assert_eq!(value["remaining_secs"], 4);
        assert_eq!(value["is_running"], true);
    }
}
