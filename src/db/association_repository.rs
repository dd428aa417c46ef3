// src/db/association_repository.rs
// DOCUMENTATION: OpenID association database operations
// PURPOSE: Upsert, lookup and expiry cleanup for provider associations

use crate::errors::StorageError;
use crate::models::{Association, StoreAssociation};
use sqlx::PgPool;
use uuid::Uuid;

pub struct AssociationRepository;

impl AssociationRepository {
    /// Store or refresh an association for (server_url, handle)
    /// DOCUMENTATION: Providers re-negotiate associations; the upsert replaces
    /// the secret and validity window in place
    pub async fn store(
        pool: &PgPool,
        req: &StoreAssociation,
    ) -> Result<Association, StorageError> {
        let association = sqlx::query_as::<_, Association>(
            r#"
            INSERT INTO social_associations (
                server_url, handle, secret, issued, lifetime, assoc_type
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (server_url, handle) DO UPDATE
            SET secret = EXCLUDED.secret,
                issued = EXCLUDED.issued,
                lifetime = EXCLUDED.lifetime,
                assoc_type = EXCLUDED.assoc_type
            RETURNING *
            "#,
        )
        .bind(&req.server_url)
        .bind(&req.handle)
        .bind(req.encoded_secret())
        .bind(req.issued)
        .bind(req.lifetime)
        .bind(&req.assoc_type)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to store association for {}: {}", req.server_url, e);
            StorageError::from(e)
        })?;

        Ok(association)
    }

    /// Find associations, optionally narrowed by server_url and/or handle
    pub async fn find(
        pool: &PgPool,
        server_url: Option<&str>,
        handle: Option<&str>,
    ) -> Result<Vec<Association>, StorageError> {
        let associations = match (server_url, handle) {
            (Some(server_url), Some(handle)) => {
                sqlx::query_as::<_, Association>(
                    r#"
                    SELECT * FROM social_associations
                    WHERE server_url = $1 AND handle = $2
                    ORDER BY issued DESC
                    "#,
                )
                .bind(server_url)
                .bind(handle)
                .fetch_all(pool)
                .await?
            }
            (Some(server_url), None) => {
                sqlx::query_as::<_, Association>(
                    r#"
                    SELECT * FROM social_associations
                    WHERE server_url = $1
                    ORDER BY issued DESC
                    "#,
                )
                .bind(server_url)
                .fetch_all(pool)
                .await?
            }
            (None, Some(handle)) => {
                sqlx::query_as::<_, Association>(
                    r#"
                    SELECT * FROM social_associations
                    WHERE handle = $1
                    ORDER BY issued DESC
                    "#,
                )
                .bind(handle)
                .fetch_all(pool)
                .await?
            }
            (None, None) => {
                sqlx::query_as::<_, Association>(
                    "SELECT * FROM social_associations ORDER BY issued DESC",
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(associations)
    }

    /// Delete associations by primary key
    pub async fn remove(pool: &PgPool, ids: &[Uuid]) -> Result<u64, StorageError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let rows = sqlx::query("DELETE FROM social_associations WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to remove {} associations: {}", ids.len(), e);
                StorageError::from(e)
            })?
            .rows_affected();

        log::info!("Removed {} associations", rows);
        Ok(rows)
    }

    /// Delete all associations whose lifetime has elapsed
    /// DOCUMENTATION: issued + lifetime <= now(epoch); meant for periodic
    /// housekeeping by the host application
    pub async fn delete_expired(pool: &PgPool, now_epoch: i64) -> Result<u64, StorageError> {
        let rows = sqlx::query(
            "DELETE FROM social_associations WHERE issued + lifetime <= $1",
        )
        .bind(now_epoch)
        .execute(pool)
        .await?
        .rows_affected();

        if rows > 0 {
            log::info!("Expired {} associations", rows);
        }
        Ok(rows)
    }
}
