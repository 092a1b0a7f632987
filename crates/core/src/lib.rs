//! Domain types for the chatbot feedback workflow.
//!
//! Everything in this crate is pure: no I/O, no async. The client crate
//! drives these types through the submission and confirmation pages, and the
//! API crate uses the submission DTOs and score aggregation when persisting.

pub mod draft;
pub mod error;
pub mod reference;
pub mod response_set;
pub mod review;
pub mod score;
pub mod step;
pub mod submission;
pub mod transfer;
pub mod types;
