//! Profile repository implementation using SQLite
//!
//! Scalars live in their own columns; skills, social links and the two
//! timelines are stored as JSON documents on the profile row.

use std::sync::Arc;

use async_trait::async_trait;
use devfolio_core::ProfileRepository as ProfileRepositoryPort;
use devfolio_domain::{
    DevfolioError, IdentityId, Profile, ProfileFields, ProfileId, Result as DomainResult,
};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql, TransactionBehavior};
use tokio::task;

use super::codec::{decode_json, encode_json, format_timestamp, parse_id, parse_timestamp};
use super::manager::{map_sql_error, DbManager};

const PROFILE_COLUMNS: &str = "id, owner_id, company, website, location, bio, status,
        github_username, skills_json, social_json, experience_json, education_json, created_at";

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepositoryPort for SqliteProfileRepository {
    async fn find_by_owner(&self, owner: IdentityId) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            select_by_owner(&conn, owner)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_all(&self) -> DomainResult<Vec<Profile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Profile>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at ASC, rowid ASC"
                ))
                .map_err(map_sql_error)?;

            let rows = stmt
                .query_map([], map_profile_row)
                .map_err(map_sql_error)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(map_sql_error)?;

            rows.into_iter().map(ProfileRow::into_profile).collect()
        })
        .await
        .map_err(map_join_error)?
    }

    async fn insert(&self, profile: Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            insert_profile(&conn, &profile)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update_fields(&self, fields: ProfileFields) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let mut conn = db.get_connection()?;
            // Read-merge-write under one write lock so concurrent merges don't
            // drop each other's fields.
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(map_sql_error)?;

            let Some(mut profile) = select_by_owner(&tx, fields.owner)? else {
                return Ok(None);
            };
            profile.apply_fields(&fields);
            update_profile(&tx, &profile)?;

            tx.commit().map_err(map_sql_error)?;
            Ok(Some(profile))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, profile: Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            if update_profile(&conn, &profile)? == 0 {
                return Err(DevfolioError::NotFound(format!(
                    "profile {} does not exist",
                    profile.id
                )));
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_by_owner(&self, owner: IdentityId) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let deleted = conn
                .execute("DELETE FROM profiles WHERE owner_id = ?1", params![owner.to_string()])
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

/// Raw column values of one `profiles` row
struct ProfileRow {
    id: String,
    owner_id: String,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    status: Option<String>,
    github_username: Option<String>,
    skills_json: String,
    social_json: String,
    experience_json: String,
    education_json: String,
    created_at: String,
}

impl ProfileRow {
    fn into_profile(self) -> DomainResult<Profile> {
        Ok(Profile {
            id: parse_id::<ProfileId>(&self.id, "profile id")?,
            owner: parse_id::<IdentityId>(&self.owner_id, "owner id")?,
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            status: self.status,
            github_username: self.github_username,
            skills: decode_json(&self.skills_json)?,
            social: decode_json(&self.social_json)?,
            experience: decode_json(&self.experience_json)?,
            education: decode_json(&self.education_json)?,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Map a row to its raw column values
fn map_profile_row(row: &Row<'_>) -> rusqlite::Result<ProfileRow> {
    Ok(ProfileRow {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        company: row.get(2)?,
        website: row.get(3)?,
        location: row.get(4)?,
        bio: row.get(5)?,
        status: row.get(6)?,
        github_username: row.get(7)?,
        skills_json: row.get(8)?,
        social_json: row.get(9)?,
        experience_json: row.get(10)?,
        education_json: row.get(11)?,
        created_at: row.get(12)?,
    })
}

fn select_by_owner(conn: &Connection, owner: IdentityId) -> DomainResult<Option<Profile>> {
    conn.query_row(
        &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE owner_id = ?1"),
        params![owner.to_string()],
        map_profile_row,
    )
    .optional()
    .map_err(map_sql_error)?
    .map(ProfileRow::into_profile)
    .transpose()
}

/// Insert a profile; fails on a second profile for the same owner
fn insert_profile(conn: &Connection, profile: &Profile) -> DomainResult<()> {
    let id = profile.id.to_string();
    let owner = profile.owner.to_string();
    let skills = encode_json(&profile.skills)?;
    let social = encode_json(&profile.social)?;
    let experience = encode_json(&profile.experience)?;
    let education = encode_json(&profile.education)?;
    let created_at = format_timestamp(profile.created_at);

    let params: [&dyn ToSql; 13] = [
        &id,
        &owner,
        &profile.company,
        &profile.website,
        &profile.location,
        &profile.bio,
        &profile.status,
        &profile.github_username,
        &skills,
        &social,
        &experience,
        &education,
        &created_at,
    ];

    conn.execute(
        &format!(
            "INSERT INTO profiles ({PROFILE_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
        ),
        params.as_slice(),
    )
    .map_err(map_sql_error)?;

    Ok(())
}

/// Overwrite every mutable column of a profile, returning the rows touched
fn update_profile(conn: &Connection, profile: &Profile) -> DomainResult<usize> {
    let id = profile.id.to_string();
    let skills = encode_json(&profile.skills)?;
    let social = encode_json(&profile.social)?;
    let experience = encode_json(&profile.experience)?;
    let education = encode_json(&profile.education)?;

    let params: [&dyn ToSql; 11] = [
        &profile.company,
        &profile.website,
        &profile.location,
        &profile.bio,
        &profile.status,
        &profile.github_username,
        &skills,
        &social,
        &experience,
        &education,
        &id, // WHERE clause
    ];

    conn.execute(
        "UPDATE profiles SET
            company = ?1, website = ?2, location = ?3, bio = ?4, status = ?5,
            github_username = ?6, skills_json = ?7, social_json = ?8,
            experience_json = ?9, education_json = ?10
         WHERE id = ?11",
        params.as_slice(),
    )
    .map_err(map_sql_error)
}

// =============================================================================
// Error Mapping
// =============================================================================

fn map_join_error(err: task::JoinError) -> DevfolioError {
    DevfolioError::Internal(format!("Task join error: {err}"))
}
