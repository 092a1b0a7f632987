//! Repository for the `divisions` and `venues` lookup tables.

use feedback_core::types::DbId;
use sqlx::PgPool;

use crate::models::reference::{ReferenceInput, ReferenceKind, ReferenceRow};

/// Column list shared across queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// CRUD for divisions and venues, parameterised by [`ReferenceKind`].
pub struct ReferenceRepo;

impl ReferenceRepo {
    /// List every entry ordered by name, then id.
    pub async fn list(pool: &PgPool, kind: ReferenceKind) -> Result<Vec<ReferenceRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY name, id",
            kind.table()
        );
        sqlx::query_as::<_, ReferenceRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        kind: ReferenceKind,
        id: DbId,
    ) -> Result<Option<ReferenceRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", kind.table());
        sqlx::query_as::<_, ReferenceRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an entry with this id exists.
    pub async fn exists(pool: &PgPool, kind: ReferenceKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", kind.table());
        let (exists,): (bool,) = sqlx::query_as(&query).bind(id).fetch_one(pool).await?;
        Ok(exists)
    }

    /// Insert a new entry. The name is stored trimmed.
    pub async fn create(
        pool: &PgPool,
        kind: ReferenceKind,
        input: &ReferenceInput,
    ) -> Result<ReferenceRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING {COLUMNS}",
            kind.table()
        );
        sqlx::query_as::<_, ReferenceRow>(&query)
            .bind(input.name.trim())
            .fetch_one(pool)
            .await
    }

    /// Rename an entry. Returns `None` if no row with the given `id` exists.
    pub async fn rename(
        pool: &PgPool,
        kind: ReferenceKind,
        id: DbId,
        input: &ReferenceInput,
    ) -> Result<Option<ReferenceRow>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET name = $2 WHERE id = $1 RETURNING {COLUMNS}",
            kind.table()
        );
        sqlx::query_as::<_, ReferenceRow>(&query)
            .bind(id)
            .bind(input.name.trim())
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool, kind: ReferenceKind) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", kind.table());
        let (count,): (i64,) = sqlx::query_as(&query).fetch_one(pool).await?;
        Ok(count)
    }

    /// Number of feedback sessions pointing at this entry.
    pub async fn count_sessions(
        pool: &PgPool,
        kind: ReferenceKind,
        id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM feedback_sessions WHERE {} = $1",
            kind.session_column()
        );
        let (count,): (i64,) = sqlx::query_as(&query).bind(id).fetch_one(pool).await?;
        Ok(count)
    }

    /// Delete an entry by ID. Returns `true` if a row was removed.
    ///
    /// Entries still referenced by a session are protected by the foreign
    /// key; callers check [`Self::count_sessions`] first to report it cleanly.
    pub async fn delete(pool: &PgPool, kind: ReferenceKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
