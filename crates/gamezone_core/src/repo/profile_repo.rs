//! Profile repository contracts and SQLite implementation.
//!
//! # Invariants
//! - One profile per user id.
//! - A missing profile is `Ok(None)`, never an error.

use crate::model::article::UserId;
use crate::model::profile::Profile;
use crate::repo::article_repo::{parse_uuid, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface over the `profiles` table.
pub trait ProfileRepository {
    fn get_profile(&self, user_id: UserId) -> RepoResult<Option<Profile>>;
    /// Inserts the profile or replaces the role of an existing one.
    fn upsert_profile(&self, profile: &Profile) -> RepoResult<()>;
}

/// SQLite-backed profile repository.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn get_profile(&self, user_id: UserId) -> RepoResult<Option<Profile>> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, role
             FROM profiles
             WHERE user_id = ?1;",
        )?;

        let mut rows = stmt.query([user_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(Profile {
                user_id: parse_uuid(row.get("user_id")?, "profiles.user_id")?,
                role: row.get("role")?,
            }));
        }

        Ok(None)
    }

    fn upsert_profile(&self, profile: &Profile) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO profiles (user_id, role)
             VALUES (?1, ?2)
             ON CONFLICT(user_id) DO UPDATE SET
                role = excluded.role,
                updated_at = (CAST(strftime('%s', 'now') AS INTEGER) * 1000);",
            params![profile.user_id.to_string(), profile.role.as_str()],
        )?;
        Ok(())
    }
}
