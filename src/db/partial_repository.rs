// src/db/partial_repository.rs
// DOCUMENTATION: Partial pipeline state database operations
// PURPOSE: Park, resume and discard half-finished authentication flows

use crate::errors::StorageError;
use crate::models::{Partial, StorePartial};
use sqlx::PgPool;

pub struct PartialRepository;

impl PartialRepository {
    /// Park pipeline state under its token
    /// DOCUMENTATION: Re-storing the same token overwrites the parked state,
    /// so a flow that pauses twice keeps a single row
    pub async fn store(pool: &PgPool, req: &StorePartial) -> Result<Partial, StorageError> {
        let partial = sqlx::query_as::<_, Partial>(
            r#"
            INSERT INTO social_partials (token, backend, next_step, data)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (token) DO UPDATE
            SET backend = EXCLUDED.backend,
                next_step = EXCLUDED.next_step,
                data = EXCLUDED.data
            RETURNING *
            "#,
        )
        .bind(&req.token)
        .bind(&req.backend)
        .bind(req.next_step)
        .bind(&req.data)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to store partial for backend {}: {}", req.backend, e);
            StorageError::from(e)
        })?;

        Ok(partial)
    }

    /// Load parked state by token
    pub async fn load(pool: &PgPool, token: &str) -> Result<Option<Partial>, StorageError> {
        let partial = sqlx::query_as::<_, Partial>("SELECT * FROM social_partials WHERE token = $1")
            .bind(token)
            .fetch_optional(pool)
            .await?;

        Ok(partial)
    }

    /// Discard parked state; destroying an unknown token is a no-op
    pub async fn destroy(pool: &PgPool, token: &str) -> Result<(), StorageError> {
        let rows = sqlx::query("DELETE FROM social_partials WHERE token = $1")
            .bind(token)
            .execute(pool)
            .await?
            .rows_affected();

        if rows > 0 {
            log::info!("Destroyed partial session {}", token);
        }
        Ok(())
    }
}
