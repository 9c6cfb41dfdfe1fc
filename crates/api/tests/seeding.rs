//! Startup seeding of default chatbot entries.

use campus_api::seed::ensure_default_chatbot_entries;
use campus_db::models::chatbot_entry::CreateChatbotEntry;
use campus_db::repositories::ChatbotRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_seeding_inserts_defaults_once(pool: PgPool) {
    ensure_default_chatbot_entries(&pool).await;

    let first = ChatbotRepo::list(&pool).await.unwrap();
    assert!(!first.is_empty(), "defaults should be inserted on first run");

    // Running again must not duplicate anything.
    ensure_default_chatbot_entries(&pool).await;
    let second = ChatbotRepo::list(&pool).await.unwrap();
    assert_eq!(first.len(), second.len());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_seeding_skips_existing_questions_case_insensitively(pool: PgPool) {
    ensure_default_chatbot_entries(&pool).await;
    let seeded = ChatbotRepo::list(&pool).await.unwrap();

    // Re-insert one default with different casing, then reseed: the
    // comparison is case-insensitive, so nothing new appears.
    let custom = CreateChatbotEntry {
        question: seeded[0].question.to_uppercase(),
        answer: "Custom answer.".to_string(),
    };
    sqlx::query("DELETE FROM chatbot_entries WHERE id = $1")
        .bind(seeded[0].id)
        .execute(&pool)
        .await
        .unwrap();
    ChatbotRepo::create(&pool, &custom).await.unwrap();

    ensure_default_chatbot_entries(&pool).await;
    let after = ChatbotRepo::list(&pool).await.unwrap();
    assert_eq!(after.len(), seeded.len());
}
