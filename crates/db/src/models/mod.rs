//! Entity models: one row struct per table plus its write DTO.
//!
//! Updates are full-field replaces keyed by id, so the create DTO is
//! reused for updates instead of a separate all-optional variant.

pub mod chatbot_entry;
pub mod class;
pub mod course;
pub mod credential;
pub mod student;
pub mod subject;
