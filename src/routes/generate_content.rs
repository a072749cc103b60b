use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::payload::{parse_body, Availability, Parsed, Success, WineryPayload};
use super::ApiError;
use crate::app::AppState;
use crate::domain::{ContentKind, ContentRequest, WineryProfile};
use crate::ledger::{ContentRecord, NewContent};
use crate::render::{brand_voice_prompt, render_from_profile, render_requested, VoiceDescriptors};

#[derive(Debug, Deserialize)]
pub struct GenerateContentPayload {
    #[serde(flatten)]
    winery: WineryPayload,
    content_request: Option<ContentRequest>,
    /// Kind hint used when `content_request` is absent or names no kind.
    content_type: Option<String>,
    theme: Option<String>,
}

#[derive(Serialize)]
struct BrandVoiceApplied<'a> {
    brand_personality_summary: Option<&'a str>,
    brand_tone: Option<&'a str>,
    messaging_style: Option<&'a str>,
    vocabulary_to_use: Option<&'a str>,
    vocabulary_to_avoid: Option<&'a str>,
    tone_descriptor: String,
    preferred_vocabulary: String,
}

impl<'a> BrandVoiceApplied<'a> {
    fn new(profile: &'a WineryProfile, voice: VoiceDescriptors) -> Self {
        Self {
            brand_personality_summary: profile.brand_personality_summary(),
            brand_tone: profile.brand_tone(),
            messaging_style: profile.messaging_style(),
            vocabulary_to_use: profile.vocabulary_to_use(),
            vocabulary_to_avoid: profile.vocabulary_to_avoid(),
            tone_descriptor: voice.tone,
            preferred_vocabulary: voice.vocabulary,
        }
    }
}

#[derive(Serialize)]
struct GeneratedContent<'a> {
    content: ContentRecord,
    brand_voice_applied: BrandVoiceApplied<'a>,
    content_request_used: bool,
    word_count: usize,
}

#[tracing::instrument(
    name = "Generate marketing content",
    skip_all,
    fields(winery_id = tracing::field::Empty, content_type = tracing::field::Empty)
)]
pub async fn generate_content(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payload: GenerateContentPayload = match parse_body(&body)? {
        Parsed::Ping => return Ok(Json(Availability::of("Content generation")).into_response()),
        Parsed::Payload(payload) => payload,
    };
    let (winery_id, profile) = payload.winery.validate()?;
    let span = tracing::Span::current();
    span.record("winery_id", tracing::field::display(&winery_id));
    tracing::debug!(prompt = %brand_voice_prompt(&profile), "Built brand voice prompt");

    let hint = payload
        .content_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let content_request_used = payload.content_request.is_some();
    let (rendered, content_type) = if let Some(mut request) = payload.content_request {
        if request.content_type().is_none() {
            request.content_type = hint.map(str::to_owned);
        }
        let content_type = request
            .content_type()
            .unwrap_or(ContentKind::BlogPost.as_str())
            .to_owned();
        (render_requested(&profile, &request), content_type)
    } else {
        let rendered = render_from_profile(
            &profile,
            hint.and_then(ContentKind::from_label),
            payload.theme.as_deref(),
        );
        (rendered, hint.unwrap_or(ContentKind::BlogPost.as_str()).to_owned())
    };
    span.record("content_type", content_type.as_str());

    let word_count = rendered.word_count();
    let content = state
        .ledger
        .insert_content(NewContent::draft(winery_id, rendered, content_type))
        .await
        .map_err(ApiError::persisting("content"))?;
    tracing::info!(content_id = %content.id, word_count, "Content generated");

    let data = GeneratedContent {
        content,
        brand_voice_applied: BrandVoiceApplied::new(&profile, VoiceDescriptors::from_profile(&profile)),
        content_request_used,
        word_count,
    };
    Ok(Json(Success::new(data, "Content generated successfully")).into_response())
}
