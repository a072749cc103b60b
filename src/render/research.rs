use super::{html_list, Rendered, VoiceDescriptors};
use crate::domain::{research_region, ResearchBrief, WineryProfile};

/// Blog post that follows up a research brief.
pub fn render_research_post(profile: &WineryProfile, brief: &ResearchBrief) -> Rendered {
    let region = research_region(profile);
    let winery = profile.display_name();
    let voice = VoiceDescriptors::from_profile(profile);
    let title = format!("Discovering {region}: A Wine Lover's Guide");
    let points: Vec<&str> = brief.key_points.iter().map(String::as_str).collect();

    let sections = [
        format!("<h1>{title}</h1>"),
        format!("<p>{}</p>", brief.seasonal_context),
        format!("<h2>{}</h2>", brief.suggested_theme),
        html_list(&points),
        format!("<h2>Coming Up: {}</h2>", brief.local_event_name),
        format!(
            "<p>Mark your calendar for {} on {} in {}.</p>",
            brief.local_event_name,
            brief.local_event_date.format("%B %-d, %Y"),
            brief.local_event_location
        ),
        format!(
            "<p>At {winery}, we bring a {} approach to every vintage, and each bottle is {} to reflect the character of {region}.</p>",
            voice.tone, voice.vocabulary
        ),
    ];

    Rendered {
        title,
        content: sections.join("\n"),
    }
}
