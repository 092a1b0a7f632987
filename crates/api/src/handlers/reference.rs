//! Handlers for divisions and venues.
//!
//! The public list endpoints feed the submission form; the admin endpoints
//! manage the lookup tables. Both tables share [`ReferenceKind`]-parameterised
//! helpers, with one thin handler per kind for routing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use feedback_core::error::CoreError;
use feedback_core::reference::ReferenceEntry;
use feedback_core::types::DbId;
use feedback_db::models::reference::{ReferenceInput, ReferenceKind, ReferenceRow};
use feedback_db::repositories::ReferenceRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public lookup lists
// ---------------------------------------------------------------------------

/// GET /api/divisions
pub async fn list_divisions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    list_entries(&state, ReferenceKind::Division).await
}

/// GET /api/venues
pub async fn list_venues(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    list_entries(&state, ReferenceKind::Venue).await
}

async fn list_entries(
    state: &AppState,
    kind: ReferenceKind,
) -> AppResult<Json<DataResponse<Vec<ReferenceEntry>>>> {
    let entries = ReferenceRepo::list(&state.pool, kind)
        .await?
        .into_iter()
        .map(|row| ReferenceEntry {
            id: row.id,
            name: row.name,
        })
        .collect();

    Ok(Json(DataResponse { data: entries }))
}

// ---------------------------------------------------------------------------
// Admin: divisions
// ---------------------------------------------------------------------------

/// GET /api/admin/divisions
pub async fn admin_list_divisions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    admin_list(&state, ReferenceKind::Division).await
}

/// POST /api/admin/divisions
pub async fn create_division(
    State(state): State<AppState>,
    Json(input): Json<ReferenceInput>,
) -> AppResult<impl IntoResponse> {
    create(&state, ReferenceKind::Division, input).await
}

/// GET /api/admin/divisions/{id}
pub async fn get_division(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    get(&state, ReferenceKind::Division, id).await
}

/// PUT /api/admin/divisions/{id}
pub async fn rename_division(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReferenceInput>,
) -> AppResult<impl IntoResponse> {
    rename(&state, ReferenceKind::Division, id, input).await
}

/// DELETE /api/admin/divisions/{id}
///
/// Refused with 409 while any feedback session references the division.
pub async fn delete_division(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    delete(&state, ReferenceKind::Division, id).await
}

// ---------------------------------------------------------------------------
// Admin: venues
// ---------------------------------------------------------------------------

/// GET /api/admin/venues
pub async fn admin_list_venues(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    admin_list(&state, ReferenceKind::Venue).await
}

/// POST /api/admin/venues
pub async fn create_venue(
    State(state): State<AppState>,
    Json(input): Json<ReferenceInput>,
) -> AppResult<impl IntoResponse> {
    create(&state, ReferenceKind::Venue, input).await
}

/// GET /api/admin/venues/{id}
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    get(&state, ReferenceKind::Venue, id).await
}

/// PUT /api/admin/venues/{id}
pub async fn rename_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReferenceInput>,
) -> AppResult<impl IntoResponse> {
    rename(&state, ReferenceKind::Venue, id, input).await
}

/// DELETE /api/admin/venues/{id}
///
/// Refused with 409 while any feedback session references the venue.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    delete(&state, ReferenceKind::Venue, id).await
}

// ---------------------------------------------------------------------------
// Shared admin helpers
// ---------------------------------------------------------------------------

async fn admin_list(
    state: &AppState,
    kind: ReferenceKind,
) -> AppResult<Json<DataResponse<Vec<ReferenceRow>>>> {
    let rows = ReferenceRepo::list(&state.pool, kind).await?;
    Ok(Json(DataResponse { data: rows }))
}

async fn create(
    state: &AppState,
    kind: ReferenceKind,
    input: ReferenceInput,
) -> AppResult<(StatusCode, Json<DataResponse<ReferenceRow>>)> {
    ensure_name(kind, &input)?;
    let row = ReferenceRepo::create(&state.pool, kind, &input).await?;

    tracing::info!(
        entity = kind.entity(),
        id = row.id,
        name = %row.name,
        "Reference entry created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

async fn get(
    state: &AppState,
    kind: ReferenceKind,
    id: DbId,
) -> AppResult<Json<DataResponse<ReferenceRow>>> {
    let row = ReferenceRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }))?;

    Ok(Json(DataResponse { data: row }))
}

async fn rename(
    state: &AppState,
    kind: ReferenceKind,
    id: DbId,
    input: ReferenceInput,
) -> AppResult<Json<DataResponse<ReferenceRow>>> {
    ensure_name(kind, &input)?;
    let row = ReferenceRepo::rename(&state.pool, kind, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }))?;

    tracing::info!(entity = kind.entity(), id, name = %row.name, "Reference entry renamed");

    Ok(Json(DataResponse { data: row }))
}

async fn delete(state: &AppState, kind: ReferenceKind, id: DbId) -> AppResult<StatusCode> {
    let in_use = ReferenceRepo::count_sessions(&state.pool, kind, id).await?;
    if in_use > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "{} {id} is referenced by {in_use} feedback session(s)",
            kind.entity(),
        ))));
    }

    let deleted = ReferenceRepo::delete(&state.pool, kind, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }));
    }

    tracing::info!(entity = kind.entity(), id, "Reference entry deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn ensure_name(kind: ReferenceKind, input: &ReferenceInput) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest(format!(
            "{} name must not be empty",
            kind.entity()
        )));
    }
    Ok(())
}
