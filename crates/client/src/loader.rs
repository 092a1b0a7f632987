//! Reference data loading for the submission form.

use feedback_core::reference::ReferenceData;

use crate::api::FeedbackApi;
use crate::error::ClientError;

/// Fetch divisions and venues concurrently.
///
/// Both requests are in flight at once and joined; if either fails the
/// whole load fails and no partial data is returned. Nothing is cached.
pub async fn load_reference_data(api: &dyn FeedbackApi) -> Result<ReferenceData, ClientError> {
    let (divisions, venues) =
        futures::future::try_join(api.list_divisions(), api.list_venues())
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load reference data"))?;

    tracing::debug!(
        divisions = divisions.len(),
        venues = venues.len(),
        "Reference data loaded",
    );
    Ok(ReferenceData::new(divisions, venues))
}
