//! Tester-facing feedback workflow.
//!
//! Drives the two pages of a submission: the form ([`submission`]) and the
//! read-only review ([`confirmation`]), talking to the feedback API through
//! the [`api::FeedbackApi`] trait.

pub mod api;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod loader;
pub mod navigation;
pub mod notification;
pub mod submission;
