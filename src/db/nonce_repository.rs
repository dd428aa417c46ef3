// src/db/nonce_repository.rs
// DOCUMENTATION: OpenID nonce database operations
// PURPOSE: Replay protection via get-or-create on the nonce triple

use crate::errors::StorageError;
use crate::models::Nonce;
use sqlx::PgPool;

pub struct NonceRepository;

impl NonceRepository {
    /// Record a nonce, reporting whether it was newly created
    /// DOCUMENTATION: INSERT .. ON CONFLICT DO NOTHING keeps this race-free;
    /// a false created flag means the triple was already used (replay)
    pub async fn use_nonce(
        pool: &PgPool,
        server_url: &str,
        timestamp: i64,
        salt: &str,
    ) -> Result<(Nonce, bool), StorageError> {
        let inserted = sqlx::query_as::<_, Nonce>(
            r#"
            INSERT INTO social_nonces (server_url, timestamp, salt)
            VALUES ($1, $2, $3)
            ON CONFLICT (server_url, timestamp, salt) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(server_url)
        .bind(timestamp)
        .bind(salt)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to record nonce for {}: {}", server_url, e);
            StorageError::from(e)
        })?;

        if let Some(nonce) = inserted {
            return Ok((nonce, true));
        }

        // Conflict path: the triple already exists, fetch it
        let existing = sqlx::query_as::<_, Nonce>(
            r#"
            SELECT * FROM social_nonces
            WHERE server_url = $1 AND timestamp = $2 AND salt = $3
            "#,
        )
        .bind(server_url)
        .bind(timestamp)
        .bind(salt)
        .fetch_one(pool)
        .await?;

        log::warn!(
            "Nonce replay detected for {} at timestamp {}",
            server_url,
            timestamp
        );
        Ok((existing, false))
    }
}
