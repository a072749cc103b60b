mod content_request;
mod research_brief;
mod winery;

pub use content_request::{ContentKind, ContentRequest};
pub use research_brief::{research_region, ResearchBrief};
pub use winery::{WineryId, WineryProfile};

/// Blank strings count as missing.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}
