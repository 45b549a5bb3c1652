use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "mindful")]
#[command(about = "Your personal mental wellness companion")]
#[command(long_about = "Mindful offers guided breathing, a daily mood check-in, a supportive chat \
                       companion and a directory of professional resources. Get started with \
                       'mindful breathe' or 'mindful chat'.")]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Guided inhale/hold/exhale/rest breathing exercise
    Breathe {
        /// Stop after this many full cycles (runs until Ctrl-C otherwise)
        #[arg(long, help = "Number of full 16-second cycles to run")]
        cycles: Option<u64>,
        /// Override the tick length in milliseconds
        #[arg(long, help = "Milliseconds per tick (default from config: 1000)")]
        interval_ms: Option<u64>,
        /// Emit one JSON snapshot per line instead of the text display
        #[arg(long, help = "Print snapshots as JSON lines")]
        json: bool,
    },
    /// Record how you are feeling today
    Mood {
        /// One of: great, good, okay, low, bad
        #[arg(help = "Your mood: great, good, okay, low or bad")]
        mood: Option<String>,
        /// What is influencing your mood
        #[arg(long, short = 'n', help = "Optional note about what's influencing your mood")]
        note: Option<String>,
        /// Print the recorded entry as JSON
        #[arg(long, help = "Print the recorded check-in as JSON")]
        json: bool,
    },
    /// Talk with the wellness companion
    Chat {
        /// Send a single message and exit
        #[arg(long, short = 'm', help = "Send one message non-interactively")]
        message: Option<String>,
        /// Override the simulated typing delay
        #[arg(long, help = "Companion reply delay in milliseconds (default from config: 1500)")]
        delay_ms: Option<u64>,
    },
    /// List professional support services and reading material
    Resources {
        /// Only show one kind of resource
        #[arg(long, help = "Filter by kind: hotline, chat or article")]
        kind: Option<String>,
        /// Print the directory as JSON
        #[arg(long, help = "Print resources as JSON")]
        json: bool,
    },
}
