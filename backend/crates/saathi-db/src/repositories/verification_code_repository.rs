use crate::Result as DbErrorResult;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

pub struct VerificationCodeRepository {
    pool: SqlitePool,
}

impl VerificationCodeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        code: &str,
        uid: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO verification_codes (code, uid, created_at, expires_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(code)
        .bind(uid)
        .bind(created_at.timestamp())
        .bind(expires_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Most recent unconsumed, unexpired code for `uid`
    pub async fn find_pending(&self, uid: &str, now: DateTime<Utc>) -> DbErrorResult<Option<String>> {
        let row = sqlx::query(
            r#"
              SELECT code FROM verification_codes
              WHERE uid = ? AND consumed_at IS NULL AND expires_at > ?
              ORDER BY created_at DESC, rowid DESC
              LIMIT 1
              "#,
        )
        .bind(uid)
        .bind(now.timestamp())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("code")?)),
            None => Ok(None),
        }
    }

    /// Mark a code consumed and flip the owner's verified flag, atomically.
    ///
    /// Returns the owning uid, or `None` if the code is unknown, used or expired.
    pub async fn consume(&self, code: &str, now: DateTime<Utc>) -> DbErrorResult<Option<String>> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let row = sqlx::query(
            r#"
              SELECT uid FROM verification_codes
              WHERE code = ? AND consumed_at IS NULL AND expires_at > ?
              "#,
        )
        .bind(code)
        .bind(now.timestamp())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let uid: String = row.try_get("uid")?;

        sqlx::query("UPDATE verification_codes SET consumed_at = ? WHERE code = ?")
            .bind(now.timestamp())
            .bind(code)
            .execute(&mut *tx)
            .await?;
        // Never written back to 0
        sqlx::query("UPDATE identities SET email_verified = 1 WHERE uid = ?")
            .bind(&uid)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(uid))
    }
}
