use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use super::payload::{parse_body, Availability, Parsed, Success, WineryPayload};
use super::ApiError;
use crate::app::AppState;
use crate::domain::{ContentKind, ResearchBrief};
use crate::ledger::{ContentRecord, NewContent, NewResearchBrief, ResearchBriefRecord};
use crate::render::render_research_post;

#[derive(Serialize)]
struct ResearchOutcome {
    research_brief: ResearchBriefRecord,
    content: ContentRecord,
}

/// Writes the brief, then a follow-up blog post pointing at it.
///
/// The two inserts are not transactional: if the post fails the brief stays.
#[tracing::instrument(
    name = "Generate research brief",
    skip_all,
    fields(winery_id = tracing::field::Empty)
)]
pub async fn generate_research_brief(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payload: WineryPayload = match parse_body(&body)? {
        Parsed::Ping => return Ok(Json(Availability::of("Research brief")).into_response()),
        Parsed::Payload(payload) => payload,
    };
    let (winery_id, profile) = payload.validate()?;
    tracing::Span::current().record("winery_id", tracing::field::display(&winery_id));

    let brief = ResearchBrief::synthesize(&profile, Utc::now());
    let post = render_research_post(&profile, &brief);

    let research_brief = state
        .ledger
        .insert_research_brief(NewResearchBrief {
            winery_id: winery_id.clone(),
            brief,
        })
        .await
        .map_err(ApiError::persisting("research brief"))?;

    let follow_up = NewContent::draft(winery_id, post, ContentKind::BlogPost.as_str())
        .following_brief(research_brief.id);
    let content = state
        .ledger
        .insert_content(follow_up)
        .await
        .map_err(ApiError::persisting("content"))?;
    tracing::info!(
        research_brief_id = %research_brief.id,
        content_id = %content.id,
        "Research brief generated"
    );

    let data = ResearchOutcome {
        research_brief,
        content,
    };
    Ok(Json(Success::new(data, "Research brief and content generated successfully")).into_response())
}
