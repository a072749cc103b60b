use std::fmt;

use serde::{Deserialize, Serialize};

use super::present;

const FALLBACK_WINERY_NAME: &str = "Our Winery";

/// Tenant identifier as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WineryId(String);

impl WineryId {
    pub fn parse(raw: Option<&String>) -> Option<Self> {
        present(raw).map(|id| Self(id.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WineryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WineryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Brand description of a winery.
///
/// Every field is optional. Accessors return `None` for missing or blank values so
/// renderers can drop the matching fragment instead of printing a placeholder.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WineryProfile {
    pub winery_name: Option<String>,
    pub location: Option<String>,
    pub brand_personality_summary: Option<String>,
    /// Comma-separated descriptors, most important first.
    pub brand_tone: Option<String>,
    pub messaging_style: Option<String>,
    /// Comma-separated.
    pub vocabulary_to_use: Option<String>,
    /// Comma-separated.
    pub vocabulary_to_avoid: Option<String>,
    pub ai_writing_guidelines: Option<String>,
    pub backstory: Option<String>,
    pub target_audience: Option<String>,
    pub wine_types: Option<Vec<String>>,
}

impl WineryProfile {
    pub fn winery_name(&self) -> Option<&str> {
        present(self.winery_name.as_ref())
    }

    /// Name used inside templates.
    pub fn display_name(&self) -> &str {
        self.winery_name().unwrap_or(FALLBACK_WINERY_NAME)
    }

    pub fn location(&self) -> Option<&str> {
        present(self.location.as_ref())
    }

    pub fn brand_personality_summary(&self) -> Option<&str> {
        present(self.brand_personality_summary.as_ref())
    }

    pub fn brand_tone(&self) -> Option<&str> {
        present(self.brand_tone.as_ref())
    }

    pub fn messaging_style(&self) -> Option<&str> {
        present(self.messaging_style.as_ref())
    }

    pub fn vocabulary_to_use(&self) -> Option<&str> {
        present(self.vocabulary_to_use.as_ref())
    }

    pub fn vocabulary_to_avoid(&self) -> Option<&str> {
        present(self.vocabulary_to_avoid.as_ref())
    }

    pub fn ai_writing_guidelines(&self) -> Option<&str> {
        present(self.ai_writing_guidelines.as_ref())
    }

    pub fn backstory(&self) -> Option<&str> {
        present(self.backstory.as_ref())
    }

    pub fn target_audience(&self) -> Option<&str> {
        present(self.target_audience.as_ref())
    }

    /// Non-blank wine types in the order given. Empty when none are listed.
    pub fn wine_types(&self) -> Vec<&str> {
        self.wine_types
            .iter()
            .flatten()
            .filter_map(|w| present(Some(w)))
            .collect()
    }
}
