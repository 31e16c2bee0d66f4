//! Identity repository implementation using SQLite
//!
//! Identities are owned by the authentication side; this store only needs
//! them for the name/avatar join and for account deletion.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use devfolio_core::IdentityRepository as IdentityRepositoryPort;
use devfolio_domain::{
    DevfolioError, Identity, IdentityId, IdentitySummary, Result as DomainResult,
};
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use tokio::task;

use super::codec::{format_timestamp, parse_id, parse_timestamp};
use super::manager::{map_sql_error, DbManager};

/// Ids bound per `IN (...)` lookup, well under SQLite's variable limit.
const SUMMARY_CHUNK_SIZE: usize = 500;

/// SQLite-backed implementation of `IdentityRepository`
pub struct SqliteIdentityRepository {
    db: Arc<DbManager>,
}

impl SqliteIdentityRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdentityRepositoryPort for SqliteIdentityRepository {
    async fn create(&self, identity: Identity) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO identities (id, name, email, avatar, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    identity.id.to_string(),
                    identity.name,
                    identity.email,
                    identity.avatar,
                    format_timestamp(identity.created_at),
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_by_id(&self, id: IdentityId) -> DomainResult<Option<Identity>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Identity>> {
            let conn = db.get_connection()?;
            conn.query_row(
                "SELECT id, name, email, avatar, created_at FROM identities WHERE id = ?1",
                params![id.to_string()],
                map_identity_row,
            )
            .optional()
            .map_err(map_sql_error)?
            .map(IdentityRow::into_identity)
            .transpose()
        })
        .await
        .map_err(map_join_error)?
    }

    async fn summaries(
        &self,
        ids: &[IdentityId],
    ) -> DomainResult<HashMap<IdentityId, IdentitySummary>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let db = Arc::clone(&self.db);
        let keys: Vec<String> = ids.iter().map(ToString::to_string).collect();

        task::spawn_blocking(move || -> DomainResult<HashMap<IdentityId, IdentitySummary>> {
            let conn = db.get_connection()?;
            let mut summaries = HashMap::with_capacity(keys.len());

            for chunk in keys.chunks(SUMMARY_CHUNK_SIZE) {
                let placeholders = vec!["?"; chunk.len()].join(", ");
                let mut stmt = conn
                    .prepare_cached(&format!(
                        "SELECT id, name, avatar FROM identities WHERE id IN ({placeholders})"
                    ))
                    .map_err(map_sql_error)?;

                let rows = stmt
                    .query_map(params_from_iter(chunk.iter()), |row| {
                        Ok((
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, Option<String>>(2)?,
                        ))
                    })
                    .map_err(map_sql_error)?
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(map_sql_error)?;

                for (raw_id, name, avatar) in rows {
                    let id = parse_id::<IdentityId>(&raw_id, "identity id")?;
                    summaries.insert(id, IdentitySummary { id, name, avatar });
                }
            }

            Ok(summaries)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, id: IdentityId) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let deleted = conn
                .execute("DELETE FROM identities WHERE id = ?1", params![id.to_string()])
                .map_err(map_sql_error)?;
            Ok(deleted > 0)
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct IdentityRow {
    id: String,
    name: String,
    email: String,
    avatar: Option<String>,
    created_at: String,
}

impl IdentityRow {
    fn into_identity(self) -> DomainResult<Identity> {
        Ok(Identity {
            id: parse_id(&self.id, "identity id")?,
            name: self.name,
            email: self.email,
            avatar: self.avatar,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

fn map_identity_row(row: &Row<'_>) -> rusqlite::Result<IdentityRow> {
    Ok(IdentityRow {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        avatar: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn map_join_error(err: task::JoinError) -> DevfolioError {
    DevfolioError::Internal(format!("Task join error: {err}"))
}
