use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{ResearchBrief, WineryId};
use crate::render::Rendered;

pub const DRAFT_STATUS: &str = "draft";

/// A content row about to be written.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub winery_id: WineryId,
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub research_brief_id: Option<Uuid>,
}

impl NewContent {
    pub fn draft(winery_id: WineryId, rendered: Rendered, content_type: impl Into<String>) -> Self {
        Self {
            winery_id,
            title: rendered.title,
            content: rendered.content,
            content_type: content_type.into(),
            research_brief_id: None,
        }
    }

    #[must_use]
    pub fn following_brief(mut self, research_brief_id: Uuid) -> Self {
        self.research_brief_id = Some(research_brief_id);
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewResearchBrief {
    pub winery_id: WineryId,
    pub brief: ResearchBrief,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContentRecord {
    pub id: Uuid,
    pub winery_id: String,
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub status: String,
    pub research_brief_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ResearchBriefRecord {
    pub id: Uuid,
    pub winery_id: String,
    pub suggested_theme: String,
    pub key_points: Vec<String>,
    pub local_event_name: String,
    pub local_event_date: DateTime<Utc>,
    pub local_event_location: String,
    pub seasonal_context: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Append-only store for generated copy and research briefs.
///
/// Rows are inserted once and never updated by this service.
#[async_trait]
pub trait Ledger: Send + Sync {
    async fn insert_content(&self, content: NewContent) -> Result<ContentRecord, LedgerError>;

    async fn insert_research_brief(
        &self,
        brief: NewResearchBrief,
    ) -> Result<ResearchBriefRecord, LedgerError>;
}

pub struct PgLedger {
    pool: PgPool,
}

impl PgLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Ledger for PgLedger {
    #[tracing::instrument(
        name = "Saving generated content",
        skip(self, content),
        fields(winery_id = %content.winery_id, content_type = %content.content_type)
    )]
    async fn insert_content(&self, content: NewContent) -> Result<ContentRecord, LedgerError> {
        let record = sqlx::query_as::<_, ContentRecord>(
            r#"
            INSERT INTO content_pieces
                (id, winery_id, title, content, content_type, status, research_brief_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, winery_id, title, content, content_type, status, research_brief_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(content.winery_id.as_str())
        .bind(&content.title)
        .bind(&content.content)
        .bind(&content.content_type)
        .bind(DRAFT_STATUS)
        .bind(content.research_brief_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    #[tracing::instrument(
        name = "Saving research brief",
        skip(self, brief),
        fields(winery_id = %brief.winery_id)
    )]
    async fn insert_research_brief(
        &self,
        brief: NewResearchBrief,
    ) -> Result<ResearchBriefRecord, LedgerError> {
        let NewResearchBrief { winery_id, brief } = brief;
        let record = sqlx::query_as::<_, ResearchBriefRecord>(
            r#"
            INSERT INTO research_briefs
                (id, winery_id, suggested_theme, key_points, local_event_name,
                 local_event_date, local_event_location, seasonal_context)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, winery_id, suggested_theme, key_points, local_event_name,
                      local_event_date, local_event_location, seasonal_context, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(winery_id.as_str())
        .bind(&brief.suggested_theme)
        .bind(&brief.key_points)
        .bind(&brief.local_event_name)
        .bind(brief.local_event_date)
        .bind(&brief.local_event_location)
        .bind(&brief.seasonal_context)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
