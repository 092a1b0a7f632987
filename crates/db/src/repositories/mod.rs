//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod feedback_session_repo;
pub mod reference_repo;

pub use feedback_session_repo::FeedbackSessionRepo;
pub use reference_repo::ReferenceRepo;
