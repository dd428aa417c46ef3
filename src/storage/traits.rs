// src/storage/traits.rs
// DOCUMENTATION: The generic storage contract for social authentication
// PURPOSE: Seam between the auth pipeline and a concrete persistence backend

use crate::errors::StorageError;
use crate::models::{
    Association, Code, CreateSocialAccount, Nonce, Partial, SocialAccount, SocialAuthUser,
    StoreAssociation, StorePartial,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Storage contract consumed by a social-authentication pipeline
/// DOCUMENTATION: Groups the five record families the pipeline persists:
/// provider accounts, OpenID nonces and associations, email verification
/// codes, and parked partial-pipeline state. `PgStorage` is the bundled
/// PostgreSQL implementation; hosts can supply their own for other backends.
#[async_trait]
pub trait SocialAuthStorage: Send + Sync {
    // -- social accounts ----------------------------------------------------

    /// Account linked to a provider identity, if any
    async fn get_social_account(
        &self,
        provider: &str,
        uid: &str,
    ) -> Result<Option<SocialAccount>, StorageError>;

    /// All accounts for a user, optionally narrowed by provider or account id
    async fn accounts_for_user(
        &self,
        user_id: Uuid,
        provider: Option<&str>,
        id: Option<Uuid>,
    ) -> Result<Vec<SocialAccount>, StorageError>;

    /// Link a provider identity to a local user
    async fn create_social_account(
        &self,
        req: &CreateSocialAccount,
    ) -> Result<SocialAccount, StorageError>;

    /// Replace an account's provider payload; true when the value changed
    async fn set_extra_data(
        &self,
        id: Uuid,
        extra_data: &serde_json::Value,
    ) -> Result<bool, StorageError>;

    /// Remove a provider link
    async fn disconnect(&self, id: Uuid) -> Result<(), StorageError>;

    /// Disconnect policy: never strand a user without a way to sign in
    async fn allowed_to_disconnect(
        &self,
        user: &(dyn SocialAuthUser + Sync),
        backend_name: &str,
        association_id: Option<Uuid>,
    ) -> Result<bool, StorageError>;

    // -- nonces -------------------------------------------------------------

    /// Record a nonce; the flag is false when the triple was seen before
    async fn use_nonce(
        &self,
        server_url: &str,
        timestamp: i64,
        salt: &str,
    ) -> Result<(Nonce, bool), StorageError>;

    // -- associations -------------------------------------------------------

    /// Store or refresh an association for (server_url, handle)
    async fn store_association(
        &self,
        req: &StoreAssociation,
    ) -> Result<Association, StorageError>;

    /// Find associations by optional server_url / handle filters
    async fn find_associations(
        &self,
        server_url: Option<&str>,
        handle: Option<&str>,
    ) -> Result<Vec<Association>, StorageError>;

    /// Delete associations by id; returns the number removed
    async fn remove_associations(&self, ids: &[Uuid]) -> Result<u64, StorageError>;

    /// Housekeeping: drop associations past issued + lifetime
    async fn delete_expired_associations(&self, now_epoch: i64) -> Result<u64, StorageError>;

    // -- verification codes -------------------------------------------------

    /// Issue a fresh verification code for an email address
    async fn issue_code(&self, email: &str) -> Result<Code, StorageError>;

    /// Look up a code by value
    async fn get_code(&self, code: &str) -> Result<Option<Code>, StorageError>;

    /// Consume a code; true when it matched an unverified row
    async fn verify_code(&self, code: &str) -> Result<bool, StorageError>;

    // -- partial pipeline state ----------------------------------------------

    /// Park pipeline state under its token
    async fn store_partial(&self, req: &StorePartial) -> Result<Partial, StorageError>;

    /// Load parked state by token
    async fn load_partial(&self, token: &str) -> Result<Option<Partial>, StorageError>;

    /// Discard parked state; unknown tokens are ignored
    async fn destroy_partial(&self, token: &str) -> Result<(), StorageError>;

    // -- error classification -----------------------------------------------

    /// Whether a raw database error was a unique-constraint violation
    fn is_integrity_error(&self, err: &sqlx::Error) -> bool {
        crate::errors::is_integrity_error(err)
    }
}
