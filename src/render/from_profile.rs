use super::{hashtags, html_list, Rendered, VoiceDescriptors};
use crate::domain::{ContentKind, WineryProfile};

pub const DEFAULT_THEME: &str = "Our Latest Vintages";

/// Renders copy straight from the profile when no structured request was sent.
///
/// Only blog posts, social posts and newsletters have a layout here; every other
/// kind falls back to the blog layout.
pub fn render_from_profile(
    profile: &WineryProfile,
    kind: Option<ContentKind>,
    theme: Option<&str>,
) -> Rendered {
    let theme = theme
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_THEME);
    let voice = VoiceDescriptors::from_profile(profile);

    match kind {
        Some(ContentKind::SocialMedia) => social_media(profile, theme, &voice),
        Some(ContentKind::Newsletter) => newsletter(profile, theme, &voice),
        Some(
            ContentKind::BlogPost
            | ContentKind::EventPromotion
            | ContentKind::ProductAnnouncement
            | ContentKind::EducationalContent,
        )
        | None => blog_post(profile, theme, &voice),
    }
}

fn blog_post(profile: &WineryProfile, theme: &str, voice: &VoiceDescriptors) -> Rendered {
    let winery = profile.display_name();
    let welcome = match profile.location() {
        Some(location) => format!("Welcome to {winery} in {location}."),
        None => format!("Welcome to {winery}."),
    };
    let intro = match profile.brand_personality_summary() {
        Some(personality) => format!("<p>{welcome} {personality}</p>"),
        None => format!("<p>{welcome}</p>"),
    };

    let mut sections = vec![format!("<h1>{theme}</h1>"), intro];
    if let Some(backstory) = profile.backstory() {
        sections.push("<h2>Our Story</h2>".to_owned());
        sections.push(format!("<p>{backstory}</p>"));
    }
    let wines = profile.wine_types();
    if !wines.is_empty() {
        sections.push("<h2>Our Wines</h2>".to_owned());
        sections.push(html_list(&wines));
    }
    sections.push(format!(
        "<p>Every wine we pour is {} with a {} dedication to our craft.</p>",
        voice.vocabulary, voice.tone
    ));
    if let Some(audience) = profile.target_audience() {
        sections.push(format!("<p>Made for {audience}.</p>"));
    }

    Rendered {
        title: format!("{theme}: Stories from {winery}"),
        content: sections.join("\n"),
    }
}

fn social_media(profile: &WineryProfile, theme: &str, voice: &VoiceDescriptors) -> Rendered {
    let winery = profile.display_name();
    let from = profile
        .location()
        .map(|l| format!(" from {l}"))
        .unwrap_or_default();
    let wines = profile.wine_types();
    let lineup = if wines.is_empty() {
        String::new()
    } else {
        format!(": {}", wines.join(", "))
    };

    let sections = [
        format!("🍇 {theme} at {winery}!"),
        format!("Discover our {} wines{from}{lineup}.", voice.tone),
        format!("Every bottle is {} with care.", voice.vocabulary),
        hashtags(&[profile.location(), Some(winery)]),
    ];

    Rendered {
        title: format!("{theme} - Social Media Post"),
        content: sections.join("\n\n"),
    }
}

fn newsletter(profile: &WineryProfile, theme: &str, voice: &VoiceDescriptors) -> Rendered {
    let winery = profile.display_name();
    let greeting = profile.location().map_or_else(
        || "Greetings from the vineyard!".to_owned(),
        |l| format!("Greetings from {l}!"),
    );

    let mut sections = vec![
        format!("<h1>{winery} Newsletter</h1>"),
        format!("<h2>{theme}</h2>"),
        "<p>Dear friends,</p>".to_owned(),
        format!(
            "<p>{greeting} We are {} to share {theme} with you, each bottle {} for the season.</p>",
            voice.tone, voice.vocabulary
        ),
    ];
    let wines = profile.wine_types();
    if !wines.is_empty() {
        sections.push("<h3>Featured Wines</h3>".to_owned());
        sections.push(html_list(&wines));
    }
    if let Some(backstory) = profile.backstory() {
        sections.push("<h3>Our Story</h3>".to_owned());
        sections.push(format!("<p>{backstory}</p>"));
    }
    sections.push(format!("<p>Cheers,<br>The {winery} Team</p>"));

    Rendered {
        title: format!("{winery} Newsletter - {theme}"),
        content: sections.join("\n"),
    }
}
