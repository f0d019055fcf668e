//! Profile operations and queries.

use rusqlite::{params, OptionalExtension, Row};

use super::utils::{now, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::Profile,
};

const SELECT_PROFILE_SQL: &str = "SELECT user_id, full_name, company, created_at, updated_at FROM profiles WHERE user_id = ?1";
const UPSERT_PROFILE_SQL: &str = "INSERT INTO profiles (user_id, full_name, company, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4) \
     ON CONFLICT(user_id) DO UPDATE SET full_name = excluded.full_name, company = excluded.company, updated_at = excluded.updated_at";

impl super::Database {
    fn build_profile_from_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
        Ok(Profile {
            user_id: row.get(0)?,
            full_name: row.get(1)?,
            company: row.get(2)?,
            created_at: timestamp_column(row, 3)?,
            updated_at: timestamp_column(row, 4)?,
        })
    }

    /// Retrieves the user's profile, if one was ever saved.
    pub fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        self.connection
            .query_row(SELECT_PROFILE_SQL, params![user_id], Self::build_profile_from_row)
            .optional()
            .db_context("Failed to query profile")
    }

    /// Creates or updates the user's profile.
    ///
    /// `None` keeps the stored value of a field, `Some(None)` clears it.
    pub fn upsert_profile(
        &mut self,
        user_id: &str,
        full_name: Option<Option<String>>,
        company: Option<Option<String>>,
    ) -> Result<Profile> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let existing = tx
            .query_row(SELECT_PROFILE_SQL, params![user_id], Self::build_profile_from_row)
            .optional()
            .db_context("Failed to query profile")?;

        let now = now();
        let profile = match existing {
            Some(current) => Profile {
                full_name: full_name.unwrap_or(current.full_name),
                company: company.unwrap_or(current.company),
                updated_at: now,
                ..current
            },
            None => Profile {
                user_id: user_id.to_string(),
                full_name: full_name.flatten(),
                company: company.flatten(),
                created_at: now,
                updated_at: now,
            },
        };

        tx.execute(
            UPSERT_PROFILE_SQL,
            params![
                user_id,
                profile.full_name.as_deref(),
                profile.company.as_deref(),
                now.to_string()
            ],
        )
        .db_context("Failed to save profile")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(profile)
    }
}
