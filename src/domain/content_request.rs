use std::fmt;

use serde::Deserialize;

use super::present;

/// Kinds of marketing copy the renderer knows how to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    BlogPost,
    SocialMedia,
    Newsletter,
    EventPromotion,
    ProductAnnouncement,
    EducationalContent,
}

impl ContentKind {
    pub const ALL: [Self; 6] = [
        Self::BlogPost,
        Self::SocialMedia,
        Self::Newsletter,
        Self::EventPromotion,
        Self::ProductAnnouncement,
        Self::EducationalContent,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == label.trim())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlogPost => "blog_post",
            Self::SocialMedia => "social_media",
            Self::Newsletter => "newsletter",
            Self::EventPromotion => "event_promotion",
            Self::ProductAnnouncement => "product_announcement",
            Self::EducationalContent => "educational_content",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured brief for a single piece of copy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentRequest {
    pub content_type: Option<String>,
    pub primary_topic: Option<String>,
    pub key_talking_points: Option<String>,
    pub call_to_action: Option<String>,
}

impl ContentRequest {
    /// Raw label as sent, which may name a kind the renderer does not know.
    pub fn content_type(&self) -> Option<&str> {
        present(self.content_type.as_ref())
    }

    pub fn kind(&self) -> Option<ContentKind> {
        self.content_type().and_then(ContentKind::from_label)
    }

    /// The topic verbatim; empty when not supplied or blank.
    pub fn primary_topic(&self) -> &str {
        self.primary_topic
            .as_deref()
            .filter(|topic| !topic.trim().is_empty())
            .unwrap_or_default()
    }

    pub fn key_talking_points(&self) -> Option<&str> {
        present(self.key_talking_points.as_ref())
    }

    pub fn call_to_action(&self) -> Option<&str> {
        present(self.call_to_action.as_ref())
    }
}
