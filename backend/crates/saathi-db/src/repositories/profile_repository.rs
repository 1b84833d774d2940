//! Profile documents stored as JSON text, one row per uid.

use crate::{DbError, Result as DbErrorResult};

use error_location::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, TimeDelta, Utc};
use saathi_core::models::profile_patch::UPDATED_AT_FIELD;
use saathi_core::{ProfilePatch, UserProfile};
use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, uid: &str) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query("SELECT uid, document FROM profiles WHERE uid = ?")
            .bind(uid)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| map_row(&row)).transpose()
    }

    /// Write the whole document.
    ///
    /// Replacing an existing row keeps its `created_at` ordering key and the
    /// document's original `createdAt`.
    pub async fn upsert(&self, profile: &UserProfile) -> DbErrorResult<()> {
        let document = serde_json::to_string(profile)?;

        sqlx::query(
            r#"
              INSERT INTO profiles (uid, email, created_at, document)
              VALUES (?, ?, ?, ?)
              ON CONFLICT(uid) DO UPDATE SET
                  email = excluded.email,
                  document = json_set(
                      excluded.document,
                      '$.createdAt',
                      COALESCE(
                          json_extract(profiles.document, '$.createdAt'),
                          json_extract(excluded.document, '$.createdAt')
                      )
                  )
              "#,
        )
        .bind(&profile.uid)
        .bind(profile.email.to_lowercase())
        .bind(profile.created_at.timestamp_micros())
        .bind(document)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert the document unless one already exists for its uid.
    ///
    /// Returns whether the row was written.
    pub async fn insert_if_absent(&self, profile: &UserProfile) -> DbErrorResult<bool> {
        let document = serde_json::to_string(profile)?;

        let result = sqlx::query(
            r#"
              INSERT INTO profiles (uid, email, created_at, document)
              VALUES (?, ?, ?, ?)
              ON CONFLICT(uid) DO NOTHING
              "#,
        )
        .bind(&profile.uid)
        .bind(profile.email.to_lowercase())
        .bind(profile.created_at.timestamp_micros())
        .bind(document)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Shallow-merge `patch` into the stored document inside one transaction.
    ///
    /// Keys absent from the patch keep their stored JSON exactly. `updatedAt`
    /// is set to the current time, or one microsecond past the previous value
    /// when the clock has not moved forward.
    pub async fn merge(&self, uid: &str, patch: &ProfilePatch) -> DbErrorResult<Option<UserProfile>> {
        // Take the write lock before reading; a deferred transaction cannot
        // upgrade once another connection has committed under WAL
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let row = sqlx::query("SELECT document FROM profiles WHERE uid = ?")
            .bind(uid)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row.try_get("document")?;
        let mut document = parse_document(uid, &raw)?;
        let previous = document
            .get(UPDATED_AT_FIELD)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        let updated_at = next_updated_at(previous, Utc::now());

        patch.apply_to(&mut document, serde_json::to_value(updated_at)?);

        let merged = serde_json::to_string(&document)?;
        let profile: UserProfile = serde_json::from_value(Value::Object(document))
            .map_err(|e| DbError::corrupt(uid, e.to_string()))?;

        sqlx::query("UPDATE profiles SET document = ? WHERE uid = ?")
            .bind(merged)
            .bind(uid)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(profile))
    }

    pub async fn delete(&self, uid: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE uid = ?")
            .bind(uid)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Vec<UserProfile>> {
        let rows = sqlx::query(
            "SELECT uid, document FROM profiles WHERE email = ? ORDER BY created_at DESC, uid DESC",
        )
        .bind(email.trim().to_lowercase())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    /// Newest first; `cursor` is the uid of the last row of the previous page
    pub async fn page(&self, limit: usize, cursor: Option<&str>) -> DbErrorResult<Vec<UserProfile>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = match cursor {
            None => {
                sqlx::query(
                    r#"
                      SELECT uid, document FROM profiles
                      ORDER BY created_at DESC, uid DESC
                      LIMIT ?
                      "#,
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            Some(cursor) => {
                let anchor = sqlx::query("SELECT created_at FROM profiles WHERE uid = ?")
                    .bind(cursor)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| DbError::InvalidCursor {
                        cursor: cursor.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                let anchor_created_at: i64 = anchor.try_get("created_at")?;

                sqlx::query(
                    r#"
                      SELECT uid, document FROM profiles
                      WHERE created_at < ? OR (created_at = ? AND uid < ?)
                      ORDER BY created_at DESC, uid DESC
                      LIMIT ?
                      "#,
                )
                .bind(anchor_created_at)
                .bind(anchor_created_at)
                .bind(cursor)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(map_row).collect()
    }
}

fn map_row(row: &SqliteRow) -> DbErrorResult<UserProfile> {
    let uid: String = row.try_get("uid")?;
    let raw: String = row.try_get("document")?;
    let document = parse_document(&uid, &raw)?;

    serde_json::from_value(Value::Object(document)).map_err(|e| DbError::corrupt(uid, e.to_string()))
}

#[track_caller]
fn parse_document(uid: &str, raw: &str) -> DbErrorResult<Map<String, Value>> {
    serde_json::from_str(raw).map_err(|e| DbError::corrupt(uid, e.to_string()))
}

/// Strictly after `previous`, otherwise `now`
pub(crate) fn next_updated_at(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match previous {
        Some(previous) if now <= previous => previous + TimeDelta::microseconds(1),
        _ => now,
    }
}
