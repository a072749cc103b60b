use chrono::Utc;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;
use winecopy::config::{get_configuration, DatabaseSettings};
use winecopy::domain::{ResearchBrief, WineryId, WineryProfile};
use winecopy::ledger::{Ledger, NewContent, NewResearchBrief, PgLedger};
use winecopy::render::render_research_post;

async fn configure_database(config: &DatabaseSettings) -> PgPool {
    PgConnection::connect_with(&config.without_db())
        .await
        .expect("Failed to connect to Postgres")
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database.");

    let db_pool = PgPool::connect_with(config.with_db())
        .await
        .expect("Failed to connect to Postgres.");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Error running migrations.");

    db_pool
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn pg_ledger_round_trips_a_brief_and_its_post() {
    let mut config = get_configuration().expect("Failed to read configuration.");
    config.database.database_name = Uuid::new_v4().to_string();
    let pool = configure_database(&config.database).await;
    let ledger = PgLedger::new(pool.clone());

    let profile = WineryProfile {
        location: Some("Sonoma".into()),
        ..WineryProfile::default()
    };
    let winery_id = WineryId::parse(Some(&"winery-7".to_owned())).unwrap();
    let brief = ResearchBrief::synthesize(&profile, Utc::now());
    let post = render_research_post(&profile, &brief);

    let saved_brief = ledger
        .insert_research_brief(NewResearchBrief {
            winery_id: winery_id.clone(),
            brief,
        })
        .await
        .expect("Failed to save research brief.");
    let saved_post = ledger
        .insert_content(NewContent::draft(winery_id, post, "blog_post").following_brief(saved_brief.id))
        .await
        .expect("Failed to save content.");

    assert_eq!(saved_brief.key_points.len(), 4);
    assert_eq!(saved_post.status, "draft");
    assert_eq!(saved_post.research_brief_id, Some(saved_brief.id));

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM content_pieces WHERE research_brief_id = $1")
        .bind(saved_brief.id)
        .fetch_one(&pool)
        .await
        .expect("Failed to count content rows.");
    assert_eq!(stored, 1);
}
