// src/db/account_repository.rs
// DOCUMENTATION: Social account database operations
// PURPOSE: CRUD for user-provider links plus disconnect policy queries

use crate::errors::StorageError;
use crate::models::{CreateSocialAccount, SocialAccount, SocialAuthUser};
use sqlx::PgPool;
use uuid::Uuid;

pub struct AccountRepository;

impl AccountRepository {
    /// Link a provider identity to a local user
    /// DOCUMENTATION: (provider, uid) is unique; a duplicate link surfaces as
    /// StorageError::AlreadyExists so the pipeline can merge instead
    pub async fn create(
        pool: &PgPool,
        req: &CreateSocialAccount,
    ) -> Result<SocialAccount, StorageError> {
        let account = sqlx::query_as::<_, SocialAccount>(
            r#"
            INSERT INTO social_accounts (user_id, provider, uid, extra_data)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(req.user_id)
        .bind(&req.provider)
        .bind(&req.uid)
        .bind(&req.extra_data)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!(
                "Failed to link {}:{} to user {}: {}",
                req.provider,
                req.uid,
                req.user_id,
                e
            );
            StorageError::from(e)
        })?;

        log::info!(
            "Linked {}:{} to user {}",
            account.provider,
            account.uid,
            account.user_id
        );
        Ok(account)
    }

    /// Look up the account for a provider identity
    pub async fn get_by_provider_uid(
        pool: &PgPool,
        provider: &str,
        uid: &str,
    ) -> Result<Option<SocialAccount>, StorageError> {
        let account = sqlx::query_as::<_, SocialAccount>(
            r#"
            SELECT * FROM social_accounts
            WHERE provider = $1 AND uid = $2
            "#,
        )
        .bind(provider)
        .bind(uid)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// List a user's accounts, optionally narrowed to a provider or single id
    /// DOCUMENTATION: Mirrors the lookup used when rendering "connected
    /// accounts" and when the pipeline resolves a specific association
    pub async fn get_for_user(
        pool: &PgPool,
        user_id: Uuid,
        provider: Option<&str>,
        id: Option<Uuid>,
    ) -> Result<Vec<SocialAccount>, StorageError> {
        let mut query = String::from("SELECT * FROM social_accounts WHERE user_id = $1");
        if provider.is_some() {
            query.push_str(" AND provider = $2");
        }
        if id.is_some() {
            // $2 when no provider filter, $3 otherwise
            query.push_str(if provider.is_some() {
                " AND id = $3"
            } else {
                " AND id = $2"
            });
        }
        query.push_str(" ORDER BY created_at ASC");

        let mut q = sqlx::query_as::<_, SocialAccount>(&query).bind(user_id);
        if let Some(provider) = provider {
            q = q.bind(provider);
        }
        if let Some(id) = id {
            q = q.bind(id);
        }

        let accounts = q.fetch_all(pool).await.map_err(|e| {
            log::error!("Failed to fetch accounts for user {}: {}", user_id, e);
            StorageError::from(e)
        })?;

        Ok(accounts)
    }

    /// Fetch a single account by primary key
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<SocialAccount, StorageError> {
        sqlx::query_as::<_, SocialAccount>("SELECT * FROM social_accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StorageError::NotFound(format!("social account {}", id)))
    }

    /// Replace an account's extra_data, reporting whether anything changed
    /// DOCUMENTATION: The pipeline calls this on every login; skipping the
    /// write when the JSON is identical keeps updated_at meaningful
    pub async fn set_extra_data(
        pool: &PgPool,
        id: Uuid,
        extra_data: &serde_json::Value,
    ) -> Result<bool, StorageError> {
        let rows = sqlx::query(
            r#"
            UPDATE social_accounts
            SET extra_data = $2, updated_at = NOW()
            WHERE id = $1 AND extra_data IS DISTINCT FROM $2
            "#,
        )
        .bind(id)
        .bind(extra_data)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update extra_data for account {}: {}", id, e);
            StorageError::from(e)
        })?
        .rows_affected();

        Ok(rows > 0)
    }

    /// Remove a provider link
    pub async fn disconnect(pool: &PgPool, id: Uuid) -> Result<(), StorageError> {
        let rows = sqlx::query("DELETE FROM social_accounts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(StorageError::NotFound(format!("social account {}", id)));
        }

        log::info!("Disconnected social account {}", id);
        Ok(())
    }

    /// Whether a user may disconnect from a backend without locking themselves out
    /// DOCUMENTATION: Allowed when the user has a usable password, or when at
    /// least one other connection would remain (another account id when a
    /// specific association is named, another provider otherwise)
    pub async fn allowed_to_disconnect<U: SocialAuthUser + ?Sized>(
        pool: &PgPool,
        user: &U,
        backend_name: &str,
        association_id: Option<Uuid>,
    ) -> Result<bool, StorageError> {
        if user.has_usable_password() {
            return Ok(true);
        }

        let remaining: (i64,) = match association_id {
            Some(association_id) => {
                sqlx::query_as(
                    r#"
                    SELECT COUNT(*) FROM social_accounts
                    WHERE user_id = $1 AND id != $2
                    "#,
                )
                .bind(user.id())
                .bind(association_id)
                .fetch_one(pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT COUNT(*) FROM social_accounts
                    WHERE user_id = $1 AND provider != $2
                    "#,
                )
                .bind(user.id())
                .bind(backend_name)
                .fetch_one(pool)
                .await?
            }
        };

        Ok(remaining.0 > 0)
    }
}
