use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use mindful::cli::commands::{
    show_welcome, BreatheCommand, ChatCommand, Command, MoodCommand, ResourcesCommand,
};
use mindful::cli::{Cli, Commands};
use mindful::{config, init_telemetry};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config()?;

    let mut observability = config.observability.clone();
    if cli.verbose {
        observability.log_level = "debug".to_string();
    }
    init_telemetry(&observability)?;

    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        // Default behavior: no subcommand shows the landing screen
        None => show_welcome(),
        Some(Commands::Breathe {
            cycles,
            interval_ms,
            json,
        }) => {
            let tick_interval = interval_ms
                .map(|ms| Duration::from_millis(ms.max(1)))
                .unwrap_or_else(|| config.breathing.tick_interval());
            runtime.block_on(async {
                BreatheCommand::new(tick_interval)
                    .with_cycles(cycles)
                    .with_json(json)
                    .execute()
                    .await
            })
        }
        Some(Commands::Mood { mood, note, json }) => runtime.block_on(async {
            MoodCommand::new(mood, note).with_json(json).execute().await
        }),
        Some(Commands::Chat { message, delay_ms }) => {
            let reply_delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.chat.reply_delay());
            runtime.block_on(async {
                ChatCommand::new(reply_delay)
                    .with_message(message)
                    .execute()
                    .await
            })
        }
        Some(Commands::Resources { kind, json }) => runtime.block_on(async {
            ResourcesCommand::new(kind).with_json(json).execute().await
        }),
    }
}
