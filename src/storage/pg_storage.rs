// src/storage/pg_storage.rs
// DOCUMENTATION: PostgreSQL implementation of the storage contract
// PURPOSE: Delegate each contract operation to its repository

use crate::db::{
    AccountRepository, AssociationRepository, CodeRepository, NonceRepository, PartialRepository,
};
use crate::errors::StorageError;
use crate::models::{
    Association, Code, CreateSocialAccount, Nonce, Partial, SocialAccount, SocialAuthUser,
    StoreAssociation, StorePartial,
};
use crate::storage::SocialAuthStorage;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed social-auth storage
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        PgStorage { pool }
    }

    /// Access the underlying pool (e.g. for host-side transactions)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SocialAuthStorage for PgStorage {
    async fn get_social_account(
        &self,
        provider: &str,
        uid: &str,
    ) -> Result<Option<SocialAccount>, StorageError> {
        AccountRepository::get_by_provider_uid(&self.pool, provider, uid).await
    }

    async fn accounts_for_user(
        &self,
        user_id: Uuid,
        provider: Option<&str>,
        id: Option<Uuid>,
    ) -> Result<Vec<SocialAccount>, StorageError> {
        AccountRepository::get_for_user(&self.pool, user_id, provider, id).await
    }

    async fn create_social_account(
        &self,
        req: &CreateSocialAccount,
    ) -> Result<SocialAccount, StorageError> {
        AccountRepository::create(&self.pool, req).await
    }

    async fn set_extra_data(
        &self,
        id: Uuid,
        extra_data: &serde_json::Value,
    ) -> Result<bool, StorageError> {
        AccountRepository::set_extra_data(&self.pool, id, extra_data).await
    }

    async fn disconnect(&self, id: Uuid) -> Result<(), StorageError> {
        AccountRepository::disconnect(&self.pool, id).await
    }

    async fn allowed_to_disconnect(
        &self,
        user: &(dyn SocialAuthUser + Sync),
        backend_name: &str,
        association_id: Option<Uuid>,
    ) -> Result<bool, StorageError> {
        AccountRepository::allowed_to_disconnect(&self.pool, user, backend_name, association_id)
            .await
    }

    async fn use_nonce(
        &self,
        server_url: &str,
        timestamp: i64,
        salt: &str,
    ) -> Result<(Nonce, bool), StorageError> {
        NonceRepository::use_nonce(&self.pool, server_url, timestamp, salt).await
    }

    async fn store_association(
        &self,
        req: &StoreAssociation,
    ) -> Result<Association, StorageError> {
        AssociationRepository::store(&self.pool, req).await
    }

    async fn find_associations(
        &self,
        server_url: Option<&str>,
        handle: Option<&str>,
    ) -> Result<Vec<Association>, StorageError> {
        AssociationRepository::find(&self.pool, server_url, handle).await
    }

    async fn remove_associations(&self, ids: &[Uuid]) -> Result<u64, StorageError> {
        AssociationRepository::remove(&self.pool, ids).await
    }

    async fn delete_expired_associations(&self, now_epoch: i64) -> Result<u64, StorageError> {
        AssociationRepository::delete_expired(&self.pool, now_epoch).await
    }

    async fn issue_code(&self, email: &str) -> Result<Code, StorageError> {
        CodeRepository::issue(&self.pool, email).await
    }

    async fn get_code(&self, code: &str) -> Result<Option<Code>, StorageError> {
        CodeRepository::get_code(&self.pool, code).await
    }

    async fn verify_code(&self, code: &str) -> Result<bool, StorageError> {
        CodeRepository::mark_verified(&self.pool, code).await
    }

    async fn store_partial(&self, req: &StorePartial) -> Result<Partial, StorageError> {
        PartialRepository::store(&self.pool, req).await
    }

    async fn load_partial(&self, token: &str) -> Result<Option<Partial>, StorageError> {
        PartialRepository::load(&self.pool, token).await
    }

    async fn destroy_partial(&self, token: &str) -> Result<(), StorageError> {
        PartialRepository::destroy(&self.pool, token).await
    }
}
