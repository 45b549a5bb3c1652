use super::Command;
use crate::resources::{by_kind, directory, Resource, ResourceKind};
use anyhow::Result;

pub struct ResourcesCommand {
    pub kind: Option<String>,
    pub json: bool,
}

impl ResourcesCommand {
    pub fn new(kind: Option<String>) -> Self {
        Self { kind, json: false }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

impl Command for ResourcesCommand {
    async fn execute(&self) -> Result<()> {
        let resources: Vec<&Resource> = match self.kind.as_deref() {
            Some(raw) => by_kind(raw.parse::<ResourceKind>()?).collect(),
            None => directory().iter().collect(),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&resources)?);
            return Ok(());
        }

        println!("📚 Mental Health Resources");
        println!("Connect with professional mental health services, support groups, and educational resources for your wellbeing journey.");
        println!();

        for resource in resources {
            let icon = match resource.kind {
                ResourceKind::Hotline => "📞",
                ResourceKind::Chat => "💬",
                ResourceKind::Article => "📄",
            };
            println!("{icon} {}", resource.title);
            println!("   {}", resource.description);
            println!("   {} → {}", resource.kind.action_label(), resource.action_target());
            println!();
        }

        println!("If you are in immediate danger, please contact your local emergency services.");
        Ok(())
    }
}
