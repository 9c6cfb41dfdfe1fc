//! Repositories: one per table, CRUD via parameterized statements.
//!
//! Methods take any `PgExecutor` so reads can run straight against the
//! pool while writes run inside the caller's transaction.

mod chatbot_repo;
mod class_repo;
mod course_repo;
mod credential_repo;
mod student_repo;
mod subject_repo;

pub use chatbot_repo::ChatbotRepo;
pub use class_repo::ClassRepo;
pub use course_repo::CourseRepo;
pub use credential_repo::CredentialRepo;
pub use student_repo::StudentRepo;
pub use subject_repo::SubjectRepo;
