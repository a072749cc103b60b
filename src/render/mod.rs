//! Brand-voice driven copy templates.
//!
//! Rendering is total: missing profile or request fields drop the section that
//! would have shown them, and the two voice descriptors fall back to defaults.

mod from_profile;
mod requested;
mod research;
mod voice;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

pub use from_profile::{render_from_profile, DEFAULT_THEME};
pub use requested::{render_requested, requested_title};
pub use research::render_research_post;
pub use voice::{brand_voice_prompt, VoiceDescriptors};

/// A rendered piece of copy, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub title: String,
    pub content: String,
}

impl Rendered {
    /// Words in the body with markup removed.
    pub fn word_count(&self) -> usize {
        strip_tags(&self.content).unicode_words().count()
    }
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

fn html_list(items: &[&str]) -> String {
    let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
    format!("<ul>{items}</ul>")
}

fn call_to_action_paragraph(cta: &str) -> String {
    format!("<p><strong>{cta}</strong></p>")
}

/// `Napa Valley` becomes `#NapaValley`.
fn hashtag(phrase: &str) -> Option<String> {
    let tag: String = phrase.chars().filter(|c| c.is_alphanumeric()).collect();
    (!tag.is_empty()).then(|| format!("#{tag}"))
}

fn hashtags(phrases: &[Option<&str>]) -> String {
    phrases
        .iter()
        .flatten()
        .filter_map(|p| hashtag(p))
        .chain(["#Wine".to_owned(), "#WineLovers".to_owned()])
        .collect::<Vec<_>>()
        .join(" ")
}
