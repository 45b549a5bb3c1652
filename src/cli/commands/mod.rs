use anyhow::Result;

pub mod breathe;
pub mod chat;
pub mod mood;
pub mod resources;

pub use breathe::BreatheCommand;
pub use chat::ChatCommand;
pub use mood::MoodCommand;
pub use resources::ResourcesCommand;

pub const CARE_DISCLAIMER: &str = "Mindful is designed to support mental wellbeing but is not a replacement for professional mental health care.";

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Landing screen shown when no subcommand is given
pub fn show_welcome() -> Result<()> {
    println!("🌿 Mindful  ·  Mental Wellness  ·  AI-Powered");
    println!();
    println!("   Your personal mental wellness companion");
    println!();
    println!("  💗 Daily Check-ins      Track your mood and mental state");
    println!("  🧠 Guided Exercises     Interactive breathing and meditation exercises");
    println!("  ✨ Wellness Resources   Connect with mental health professionals and resources");
    println!();
    println!("Get started:");
    println!("  💬 mindful chat         # Talk with your companion");
    println!("  🌬️  mindful breathe      # Guided breathing exercise");
    println!("  📝 mindful mood good    # Daily mood check-in");
    println!("  📚 mindful resources    # Professional support services");
    println!();
    println!("{CARE_DISCLAIMER}");
    Ok(())
}
