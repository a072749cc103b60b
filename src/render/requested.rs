use super::{call_to_action_paragraph, hashtags, Rendered, VoiceDescriptors};
use crate::domain::{ContentKind, ContentRequest, WineryProfile};

/// Values every request template interpolates.
struct Context<'a> {
    winery: &'a str,
    location: Option<&'a str>,
    topic: &'a str,
    points: Option<&'a str>,
    backstory: Option<&'a str>,
    cta: Option<&'a str>,
    voice: VoiceDescriptors,
}

impl Context<'_> {
    /// `, nestled in Sonoma` or nothing.
    fn nestled_in(&self) -> String {
        self.location
            .map(|l| format!(", nestled in {l}"))
            .unwrap_or_default()
    }

    fn points_paragraph(&self) -> Option<String> {
        self.points.map(|p| format!("<p>{p}</p>"))
    }
}

/// Title for a requested piece. Unknown kinds keep the topic verbatim.
pub fn requested_title(kind: Option<ContentKind>, topic: &str, winery: &str) -> String {
    match kind {
        None | Some(ContentKind::BlogPost) => topic.to_owned(),
        Some(ContentKind::SocialMedia) => format!("{topic} - Social Media Post"),
        Some(ContentKind::Newsletter) => format!("{winery} Newsletter - {topic}"),
        Some(ContentKind::EventPromotion) => format!("{topic} at {winery}"),
        Some(ContentKind::ProductAnnouncement) => format!("Exciting News: {topic}"),
        Some(ContentKind::EducationalContent) => format!("Learn About {topic}"),
    }
}

/// Renders a structured request. Unknown kinds use the blog layout.
pub fn render_requested(profile: &WineryProfile, request: &ContentRequest) -> Rendered {
    let kind = request.kind();
    let ctx = Context {
        winery: profile.display_name(),
        location: profile.location(),
        topic: request.primary_topic(),
        points: request.key_talking_points(),
        backstory: profile.backstory(),
        cta: request.call_to_action(),
        voice: VoiceDescriptors::from_profile(profile),
    };

    let content = match kind.unwrap_or(ContentKind::BlogPost) {
        ContentKind::BlogPost => blog_post(&ctx),
        ContentKind::SocialMedia => social_media(&ctx),
        ContentKind::Newsletter => newsletter(&ctx),
        ContentKind::EventPromotion => event_promotion(&ctx),
        ContentKind::ProductAnnouncement => product_announcement(&ctx),
        ContentKind::EducationalContent => educational_content(&ctx),
    };

    Rendered {
        title: requested_title(kind, ctx.topic, ctx.winery),
        content,
    }
}

fn blog_post(ctx: &Context<'_>) -> String {
    let mut sections = vec![
        format!("<h1>{}</h1>", ctx.topic),
        format!(
            "<p>At {}{}, we bring a {} spirit to every glass. Today we want to share something close to our hearts: {}.</p>",
            ctx.winery,
            ctx.nestled_in(),
            ctx.voice.tone,
            ctx.topic
        ),
    ];
    if let Some(backstory) = ctx.backstory {
        sections.push("<h2>Our Story</h2>".to_owned());
        sections.push(format!("<p>{backstory}</p>"));
    }
    if let Some(points) = ctx.points_paragraph() {
        sections.push("<h2>What You Need to Know</h2>".to_owned());
        sections.push(points);
    }
    sections.push(format!(
        "<p>Like every wine we make, this story is {} with care and attention to detail.</p>",
        ctx.voice.vocabulary
    ));
    sections.extend(ctx.cta.map(call_to_action_paragraph));
    sections.join("\n")
}

fn social_media(ctx: &Context<'_>) -> String {
    let mut sections = vec![format!("🍷 {} at {}!", ctx.topic, ctx.winery)];
    sections.extend(ctx.points.map(str::to_owned));
    let place = ctx.location.map(|l| format!(" in {l}")).unwrap_or_default();
    sections.push(format!(
        "Our {} team has {} something special{place}.",
        ctx.voice.tone, ctx.voice.vocabulary
    ));
    sections.extend(ctx.cta.map(|cta| format!("👉 {cta}")));
    sections.push(hashtags(&[ctx.location, Some(ctx.winery)]));
    sections.join("\n\n")
}

fn newsletter(ctx: &Context<'_>) -> String {
    let greeting = ctx.location.map_or_else(
        || "Greetings from the vineyard!".to_owned(),
        |l| format!("Greetings from {l}!"),
    );
    let mut sections = vec![
        format!("<h1>{} Newsletter</h1>", ctx.winery),
        format!("<h2>{}</h2>", ctx.topic),
        format!("<p>Dear friends of {},</p>", ctx.winery),
        format!(
            "<p>{greeting} This season we are feeling {} about {}.</p>",
            ctx.voice.tone, ctx.topic
        ),
    ];
    if let Some(points) = ctx.points_paragraph() {
        sections.push("<h3>This Month's Highlights</h3>".to_owned());
        sections.push(points);
    }
    if let Some(backstory) = ctx.backstory {
        sections.push("<h3>From Our Family</h3>".to_owned());
        sections.push(format!("<p>{backstory}</p>"));
    }
    sections.push(format!(
        "<p>As always, every bottle is {} with the care you have come to expect from us.</p>",
        ctx.voice.vocabulary
    ));
    sections.extend(ctx.cta.map(call_to_action_paragraph));
    sections.push(format!("<p>Cheers,<br>The {} Team</p>", ctx.winery));
    sections.join("\n")
}

fn event_promotion(ctx: &Context<'_>) -> String {
    let place = ctx.location.map(|l| format!(" in {l}")).unwrap_or_default();
    let mut sections = vec![
        format!("<h1>{} at {}</h1>", ctx.topic, ctx.winery),
        format!(
            "<p>Join us{place} for {}, a {} celebration of wine, food and friendship.</p>",
            ctx.topic, ctx.voice.tone
        ),
    ];
    if let Some(points) = ctx.points_paragraph() {
        sections.push("<h2>Event Highlights</h2>".to_owned());
        sections.push(points);
    }
    if let Some(backstory) = ctx.backstory {
        sections.push(format!("<h2>About {}</h2>", ctx.winery));
        sections.push(format!("<p>{backstory}</p>"));
    }
    sections.push(format!(
        "<p>Every pour on the day is {} to make it memorable.</p>",
        ctx.voice.vocabulary
    ));
    sections.extend(ctx.cta.map(call_to_action_paragraph));
    sections.join("\n")
}

fn product_announcement(ctx: &Context<'_>) -> String {
    let mut sections = vec![
        format!("<h1>Exciting News: {}</h1>", ctx.topic),
        format!(
            "<p>We are thrilled to announce {} from {}{}.</p>",
            ctx.topic,
            ctx.winery,
            ctx.nestled_in()
        ),
    ];
    if let Some(points) = ctx.points_paragraph() {
        sections.push("<h2>What Makes It Special</h2>".to_owned());
        sections.push(points);
    }
    sections.push(format!(
        "<p>This release reflects our {} commitment to wines that are {} from vine to bottle.</p>",
        ctx.voice.tone, ctx.voice.vocabulary
    ));
    if let Some(backstory) = ctx.backstory {
        sections.push("<h2>Rooted in Our Story</h2>".to_owned());
        sections.push(format!("<p>{backstory}</p>"));
    }
    sections.extend(ctx.cta.map(call_to_action_paragraph));
    sections.join("\n")
}

fn educational_content(ctx: &Context<'_>) -> String {
    let inspired_by = ctx
        .location
        .map(|l| format!(", inspired by our home in {l}"))
        .unwrap_or_default();
    let mut sections = vec![
        format!("<h1>Learn About {}</h1>", ctx.topic),
        format!(
            "<p>At {}, we love sharing what we know. Here is a {} look at {}{inspired_by}.</p>",
            ctx.winery, ctx.voice.tone, ctx.topic
        ),
    ];
    if let Some(points) = ctx.points_paragraph() {
        sections.push("<h2>Key Points</h2>".to_owned());
        sections.push(points);
    }
    if let Some(backstory) = ctx.backstory {
        sections.push("<h2>How We Approach It</h2>".to_owned());
        sections.push(format!("<p>{backstory}</p>"));
    }
    sections.push(format!(
        "<p>Understanding {} helps explain why every wine we make is {} with intention.</p>",
        ctx.topic, ctx.voice.vocabulary
    ));
    sections.extend(ctx.cta.map(call_to_action_paragraph));
    sections.join("\n")
}
