//! Support Resources Directory
//!
//! A fixed list of crisis lines, chat services and reading material.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Hotline,
    Chat,
    Article,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Contact {
    Phone(&'static str),
    Link(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ResourceKind,
    pub contact: Contact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown resource kind '{0}' (expected hotline, chat or article)")]
pub struct UnknownKind(pub String);

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Hotline => "hotline",
            ResourceKind::Chat => "chat",
            ResourceKind::Article => "article",
        }
    }

    /// Text of the call-to-action shown next to a resource
    pub fn action_label(self) -> &'static str {
        match self {
            ResourceKind::Hotline => "Call Now",
            ResourceKind::Chat => "Chat Now",
            ResourceKind::Article => "Read More",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hotline" => Ok(ResourceKind::Hotline),
            "chat" => Ok(ResourceKind::Chat),
            "article" => Ok(ResourceKind::Article),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

impl Resource {
    /// Where the call-to-action points: a `tel:` URI or a web link
    pub fn action_target(&self) -> String {
        match self.contact {
            Contact::Phone(number) => format!("tel:{number}"),
            Contact::Link(url) => url.to_string(),
        }
    }
}

static DIRECTORY: [Resource; 6] = [
    Resource {
        id: 1,
        title: "National Suicide Prevention Lifeline",
        description: "24/7, free and confidential support for people in distress",
        kind: ResourceKind::Hotline,
        contact: Contact::Phone("1-800-273-8255"),
    },
    Resource {
        id: 2,
        title: "Crisis Text Line",
        description: "Text HOME to 741741 to connect with a Crisis Counselor",
        kind: ResourceKind::Chat,
        contact: Contact::Link("https://www.crisistextline.org/"),
    },
    Resource {
        id: 3,
        title: "SAMHSA's National Helpline",
        description: "Treatment referral and information service for individuals and families",
        kind: ResourceKind::Hotline,
        contact: Contact::Phone("1-800-662-4357"),
    },
    Resource {
        id: 4,
        title: "Understanding Anxiety",
        description: "Learn about different types of anxiety and coping strategies",
        kind: ResourceKind::Article,
        contact: Contact::Link("https://www.nimh.nih.gov/health/topics/anxiety-disorders"),
    },
    Resource {
        id: 5,
        title: "7 Cups",
        description: "Connect with trained listeners for emotional support",
        kind: ResourceKind::Chat,
        contact: Contact::Link("https://www.7cups.com/"),
    },
    Resource {
        id: 6,
        title: "Mental Health First Aid",
        description: "Learn how to identify, understand and respond to mental health issues",
        kind: ResourceKind::Article,
        contact: Contact::Link("https://www.mentalhealthfirstaid.org/"),
    },
];

pub fn directory() -> &'static [Resource] {
    &DIRECTORY
}

pub fn by_kind(kind: ResourceKind) -> impl Iterator<Item = &'static Resource> {
    DIRECTORY.iter().filter(move |resource| resource.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_contents() {
        assert_eq!(directory().len(), 6);
        assert_eq!(by_kind(ResourceKind::Hotline).count(), 2);
        assert_eq!(by_kind(ResourceKind::Chat).count(), 2);
        assert_eq!(by_kind(ResourceKind::Article).count(), 2);
    }

    #[test]
    fn test_action_targets() {
        let lifeline = &directory()[0];
        assert_eq!(lifeline.action_target(), "tel:1-800-273-8255");
        assert_eq!(lifeline.kind.action_label(), "Call Now");

        let seven_cups = directory().iter().find(|r| r.title == "7 Cups").unwrap();
        assert_eq!(seven_cups.action_target(), "https://www.7cups.com/");
        assert_eq!(seven_cups.kind.action_label(), "Chat Now");
    }

    #[test]
    fn test_every_hotline_has_a_phone_number() {
        for resource in by_kind(ResourceKind::Hotline) {
            assert!(matches!(resource.contact, Contact::Phone(_)));
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Article".parse::<ResourceKind>(), Ok(ResourceKind::Article));
        assert!("podcast".parse::<ResourceKind>().is_err());
    }
}
