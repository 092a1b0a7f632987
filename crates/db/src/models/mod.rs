//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching database rows or joined views
//! - `Deserialize` DTOs for inserts and updates

pub mod feedback_session;
pub mod reference;
