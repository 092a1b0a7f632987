//! Division and venue rows and DTOs.
//!
//! Both lookup tables share one shape, so one set of structs serves both;
//! [`ReferenceKind`] selects the table.

use feedback_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Which lookup table a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Division,
    Venue,
}

impl ReferenceKind {
    pub fn table(self) -> &'static str {
        match self {
            Self::Division => "divisions",
            Self::Venue => "venues",
        }
    }

    /// Column on `feedback_sessions` referencing this table.
    pub fn session_column(self) -> &'static str {
        match self {
            Self::Division => "division_id",
            Self::Venue => "venue_id",
        }
    }

    /// Entity label used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Division => "Division",
            Self::Venue => "Venue",
        }
    }
}

/// A row from `divisions` or `venues`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReferenceRow {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or renaming a division or venue.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceInput {
    pub name: String,
}
