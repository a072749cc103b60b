use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use serde_json::Value;
use uuid::Uuid;
use winecopy::app::run;
use winecopy::config::get_configuration;
use winecopy::ledger::{
    ContentRecord, Ledger, LedgerError, NewContent, NewResearchBrief, ResearchBriefRecord,
    DRAFT_STATUS,
};
use winecopy::telemetry::setup_tracing;

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let env_filter = "debug";
    if std::env::var("TEST_LOG").is_ok() {
        setup_tracing(name, env_filter, std::io::stdout);
    } else {
        setup_tracing(name, env_filter, std::io::sink);
    };
});

/// Ledger double that keeps rows in memory and can be told to refuse inserts.
#[derive(Default)]
pub struct RecordingLedger {
    content: Mutex<Vec<ContentRecord>>,
    briefs: Mutex<Vec<ResearchBriefRecord>>,
    reject_content: AtomicBool,
    reject_briefs: AtomicBool,
}

impl RecordingLedger {
    pub fn content_rows(&self) -> Vec<ContentRecord> {
        self.content.lock().unwrap().clone()
    }

    pub fn brief_rows(&self) -> Vec<ResearchBriefRecord> {
        self.briefs.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.content_rows().len() + self.brief_rows().len()
    }

    pub fn reject_content(&self) {
        self.reject_content.store(true, Ordering::SeqCst);
    }

    pub fn reject_briefs(&self) {
        self.reject_briefs.store(true, Ordering::SeqCst);
    }
}

pub const REJECTION: &str = "new row violates row-level security policy";

#[async_trait]
impl Ledger for RecordingLedger {
    async fn insert_content(&self, content: NewContent) -> Result<ContentRecord, LedgerError> {
        if self.reject_content.load(Ordering::SeqCst) {
            return Err(sqlx::Error::Protocol(REJECTION.into()).into());
        }
        let record = ContentRecord {
            id: Uuid::new_v4(),
            winery_id: content.winery_id.as_str().to_owned(),
            title: content.title,
            content: content.content,
            content_type: content.content_type,
            status: DRAFT_STATUS.into(),
            research_brief_id: content.research_brief_id,
            created_at: Utc::now(),
        };
        self.content.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn insert_research_brief(
        &self,
        brief: NewResearchBrief,
    ) -> Result<ResearchBriefRecord, LedgerError> {
        if self.reject_briefs.load(Ordering::SeqCst) {
            return Err(sqlx::Error::Protocol(REJECTION.into()).into());
        }
        let NewResearchBrief { winery_id, brief } = brief;
        let record = ResearchBriefRecord {
            id: Uuid::new_v4(),
            winery_id: winery_id.as_str().to_owned(),
            suggested_theme: brief.suggested_theme,
            key_points: brief.key_points,
            local_event_name: brief.local_event_name,
            local_event_date: brief.local_event_date,
            local_event_location: brief.local_event_location,
            seasonal_context: brief.seasonal_context,
            created_at: Utc::now(),
        };
        self.briefs.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

pub struct TestApp {
    pub address: SocketAddr,
    pub ledger: Arc<RecordingLedger>,
    client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("Origin", "https://dashboard.example.com")
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_generate_content(&self, body: &Value) -> reqwest::Response {
        self.post_json("/generate-content", body).await
    }

    pub async fn post_research_brief(&self, body: &Value) -> reqwest::Response {
        self.post_json("/generate-research-brief", body).await
    }

    /// Posts `body` as-is, with no `Content-Type` header.
    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn preflight(&self, path: &str) -> reqwest::Response {
        self.client
            .request(reqwest::Method::OPTIONS, self.url(path))
            .header("Origin", "https://dashboard.example.com")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type,authorization")
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let settings = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = 0;
        c
    };

    let ledger = Arc::new(RecordingLedger::default());
    let server = run(&settings, ledger.clone()).expect("Failed to build application.");
    let address = server.local_addr();
    let _ = tokio::spawn(server);

    TestApp {
        address,
        ledger,
        client: reqwest::Client::new(),
    }
}

pub async fn json_body(response: reqwest::Response) -> Value {
    response
        .json::<Value>()
        .await
        .expect("Response body was not JSON.")
}
