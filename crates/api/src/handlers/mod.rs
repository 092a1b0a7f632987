//! Request handlers.
//!
//! Handlers delegate to the repositories in `feedback_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod feedback;
pub mod feedback_session;
pub mod reference;
