use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use saathi_core::{CustomClaims, Identity, IdentityUpdate};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Identity row together with its password hash
#[derive(Debug, Clone)]
pub struct StoredIdentity {
    pub identity: Identity,
    pub password_hash: String,
}

pub struct IdentityRepository {
    pool: SqlitePool,
}

const SELECT_COLUMNS: &str = "SELECT uid, email, password_hash, email_verified, display_name, \
     photo_url, phone_number, disabled, custom_claims, created_at FROM identities";

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, identity: &Identity, password_hash: &str) -> DbErrorResult<()> {
        let custom_claims = serde_json::to_string(&identity.custom_claims)?;

        sqlx::query(
            r#"
              INSERT INTO identities (uid, email, password_hash, email_verified, display_name,
                                      photo_url, phone_number, disabled, custom_claims, created_at)
              VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&identity.uid)
        .bind(&identity.email)
        .bind(password_hash)
        .bind(identity.email_verified)
        .bind(&identity.display_name)
        .bind(&identity.photo_url)
        .bind(&identity.phone_number)
        .bind(identity.disabled)
        .bind(custom_claims)
        .bind(identity.created_at.timestamp_micros())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_uid(&self, uid: &str) -> DbErrorResult<Option<StoredIdentity>> {
        let row = sqlx::query(&format!("{} WHERE uid = ?", SELECT_COLUMNS))
            .bind(uid)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| map_row(&row)).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<StoredIdentity>> {
        let row = sqlx::query(&format!("{} WHERE email = ?", SELECT_COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| map_row(&row)).transpose()
    }

    /// Apply mirrored display attributes. An empty photo URL clears it.
    pub async fn update_display(&self, uid: &str, update: &IdentityUpdate) -> DbErrorResult<bool> {
        let photo_url = update
            .photo_url
            .as_ref()
            .map(|url| (!url.is_empty()).then(|| url.clone()));

        let result = sqlx::query(
            r#"
              UPDATE identities
              SET display_name = COALESCE(?, display_name),
                  photo_url = CASE WHEN ? THEN ? ELSE photo_url END
              WHERE uid = ?
              "#,
        )
        .bind(&update.display_name)
        .bind(photo_url.is_some())
        .bind(photo_url.flatten())
        .bind(uid)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_custom_claims(&self, uid: &str, claims: CustomClaims) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE identities SET custom_claims = ? WHERE uid = ?")
            .bind(serde_json::to_string(&claims)?)
            .bind(uid)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_disabled(&self, uid: &str, disabled: bool) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE identities SET disabled = ? WHERE uid = ?")
            .bind(disabled)
            .bind(uid)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, uid: &str) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM verification_codes WHERE uid = ?")
            .bind(uid)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM identities WHERE uid = ?")
            .bind(uid)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}

pub(crate) fn map_row(row: &SqliteRow) -> DbErrorResult<StoredIdentity> {
    let uid: String = row.try_get("uid")?;
    let custom_claims: String = row.try_get("custom_claims")?;
    let custom_claims: CustomClaims = serde_json::from_str(&custom_claims)
        .map_err(|e| DbError::corrupt(&uid, format!("custom_claims: {}", e)))?;
    let created_at = micros_to_datetime(&uid, row.try_get("created_at")?)?;

    Ok(StoredIdentity {
        identity: Identity {
            email: row.try_get("email")?,
            email_verified: row.try_get("email_verified")?,
            display_name: row.try_get("display_name")?,
            photo_url: row.try_get("photo_url")?,
            phone_number: row.try_get("phone_number")?,
            disabled: row.try_get("disabled")?,
            custom_claims,
            created_at,
            uid,
        },
        password_hash: row.try_get("password_hash")?,
    })
}

#[track_caller]
pub(crate) fn micros_to_datetime(uid: &str, micros: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| DbError::corrupt(uid, format!("timestamp out of range: {}", micros)))
}
