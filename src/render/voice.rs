use crate::domain::WineryProfile;

const DEFAULT_TONE: &str = "passionate";
const DEFAULT_VOCABULARY: &str = "crafted";

/// The two words every template borrows from the brand voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescriptors {
    /// First `brand_tone` entry, lower-cased.
    pub tone: String,
    /// First `vocabulary_to_use` entry.
    pub vocabulary: String,
}

impl VoiceDescriptors {
    pub fn from_profile(profile: &WineryProfile) -> Self {
        Self {
            tone: first_entry(profile.brand_tone())
                .map_or_else(|| DEFAULT_TONE.to_owned(), str::to_lowercase),
            vocabulary: first_entry(profile.vocabulary_to_use())
                .unwrap_or(DEFAULT_VOCABULARY)
                .to_owned(),
        }
    }
}

fn first_entry(list: Option<&str>) -> Option<&str> {
    list.and_then(|l| l.split(',').next())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

/// Writer instructions describing the brand voice, one sentence per populated field.
pub fn brand_voice_prompt(profile: &WineryProfile) -> String {
    let mut prompt = format!(
        "You are writing marketing copy for {}.",
        profile.display_name()
    );
    let wine_types = profile.wine_types().join(", ");
    let clauses = [
        ("Brand personality", profile.brand_personality_summary()),
        ("Tone", profile.brand_tone()),
        ("Messaging style", profile.messaging_style()),
        ("Preferred vocabulary", profile.vocabulary_to_use()),
        ("Avoid these words", profile.vocabulary_to_avoid()),
        ("Writing guidelines", profile.ai_writing_guidelines()),
        ("Backstory", profile.backstory()),
        ("Target audience", profile.target_audience()),
        ("Wine types", Some(wine_types.as_str()).filter(|w| !w.is_empty())),
    ];
    for (label, value) in clauses {
        if let Some(value) = value {
            prompt.push(' ');
            prompt.push_str(label);
            prompt.push_str(": ");
            prompt.push_str(value);
            prompt.push('.');
        }
    }
    prompt
}
