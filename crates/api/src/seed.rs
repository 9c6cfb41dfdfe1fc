//! Startup seeding of default chatbot question/answer pairs.
//!
//! Runs once after migrations. Best-effort: a failure to read or insert
//! is logged and startup continues; nothing is surfaced to clients.

use campus_db::models::chatbot_entry::CreateChatbotEntry;
use campus_db::repositories::ChatbotRepo;
use campus_db::DbPool;

/// Starter Q&A pairs inserted when no entry with the same question
/// (case-insensitive) exists yet.
const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    (
        "What is the campus system?",
        "A system for managing students, courses, classes, subjects and questions via chatbot.",
    ),
    (
        "How do I add a student?",
        "Go to 'Students', fill in name, registration number and e-mail, pick a course and class, then click 'Add'.",
    ),
    (
        "How do I create a course?",
        "Under 'Courses', enter the name, short code (e.g. ADS), area and a description.",
    ),
    (
        "What is a course code?",
        "A short abbreviation such as 'ADS' for Analysis and Development of Systems.",
    ),
    (
        "How do I create a class?",
        "Under 'Classes', type a name (e.g. 1A-MORNING), select the course and optionally a description.",
    ),
    (
        "How do I assign a student to a class?",
        "When adding the student, select the class; the course is filled in from it automatically.",
    ),
    (
        "Does the system update in real time?",
        "Yes. Every change is pushed to connected sessions immediately over WebSocket.",
    ),
    (
        "How do I search?",
        "Use the search field at the top of each page. It filters the cached list as you type.",
    ),
];

/// Insert any missing default entries.
pub async fn ensure_default_chatbot_entries(pool: &DbPool) {
    let existing = match ChatbotRepo::questions(pool).await {
        Ok(questions) => questions,
        Err(e) => {
            tracing::warn!(error = %e, "Skipping chatbot seeding: could not read existing questions");
            return;
        }
    };
    let existing: std::collections::HashSet<String> =
        existing.iter().map(|q| q.trim().to_lowercase()).collect();

    let mut inserted = 0;
    for (question, answer) in DEFAULT_ENTRIES {
        if existing.contains(&question.trim().to_lowercase()) {
            continue;
        }
        let input = CreateChatbotEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        };
        match ChatbotRepo::create(pool, &input).await {
            Ok(_) => inserted += 1,
            Err(e) => {
                tracing::warn!(error = %e, question, "Failed to seed chatbot entry");
            }
        }
    }

    if inserted > 0 {
        tracing::info!(inserted, "Seeded default chatbot entries");
    }
}
