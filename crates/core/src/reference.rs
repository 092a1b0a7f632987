//! Lookup entries (divisions, venues) offered by the submission form.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// One selectable division or venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: DbId,
    pub name: String,
}

/// Both lookup lists, loaded together.
///
/// The loader only builds one once both requests have succeeded. Either
/// list may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub divisions: Vec<ReferenceEntry>,
    pub venues: Vec<ReferenceEntry>,
}

impl ReferenceData {
    pub fn new(divisions: Vec<ReferenceEntry>, venues: Vec<ReferenceEntry>) -> Self {
        Self { divisions, venues }
    }

    pub fn has_division(&self, id: DbId) -> bool {
        self.divisions.iter().any(|d| d.id == id)
    }

    pub fn has_venue(&self, id: DbId) -> bool {
        self.venues.iter().any(|v| v.id == id)
    }

    /// Display name of a division, if loaded.
    pub fn division_name(&self, id: DbId) -> Option<&str> {
        self.divisions
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.as_str())
    }

    /// Display name of a venue, if loaded.
    pub fn venue_name(&self, id: DbId) -> Option<&str> {
        self.venues
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: DbId, name: &str) -> ReferenceEntry {
        ReferenceEntry {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn lookups_match_by_id() {
        let data = ReferenceData::new(vec![entry(1, "Retail")], vec![entry(7, "Main Hall")]);

        assert!(data.has_division(1));
        assert!(!data.has_division(7));
        assert!(data.has_venue(7));
        assert_eq!(data.division_name(1), Some("Retail"));
        assert_eq!(data.venue_name(8), None);
    }

    #[test]
    fn empty_lists_match_nothing() {
        let data = ReferenceData::new(vec![entry(1, "Retail")], Vec::new());

        assert!(data.has_division(1));
        assert!(!data.has_venue(1));
        assert!(!ReferenceData::default().has_division(1));
    }
}
