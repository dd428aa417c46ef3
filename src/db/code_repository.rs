// src/db/code_repository.rs
// DOCUMENTATION: Email verification code database operations
// PURPOSE: Issue, look up and consume verification codes

use crate::errors::StorageError;
use crate::models::Code;
use sqlx::PgPool;

pub struct CodeRepository;

impl CodeRepository {
    /// Issue a fresh verification code for an email address
    pub async fn issue(pool: &PgPool, email: &str) -> Result<Code, StorageError> {
        let code = sqlx::query_as::<_, Code>(
            r#"
            INSERT INTO social_codes (email, code)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(Code::generate())
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to issue code for {}: {}", email, e);
            StorageError::from(e)
        })?;

        log::info!("Issued verification code for {}", email);
        Ok(code)
    }

    /// Look up a code by its value
    pub async fn get_code(pool: &PgPool, code: &str) -> Result<Option<Code>, StorageError> {
        let record = sqlx::query_as::<_, Code>("SELECT * FROM social_codes WHERE code = $1")
            .bind(code)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Mark a code as verified, reporting whether it matched an unverified row
    pub async fn mark_verified(pool: &PgPool, code: &str) -> Result<bool, StorageError> {
        let rows = sqlx::query(
            r#"
            UPDATE social_codes
            SET verified = true
            WHERE code = $1 AND verified = false
            "#,
        )
        .bind(code)
        .execute(pool)
        .await?
        .rows_affected();

        Ok(rows > 0)
    }
}
