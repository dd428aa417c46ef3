// src/lib.rs
// DOCUMENTATION: Crate entry point
// PURPOSE: Social authentication storage adapter backed by SQLx/PostgreSQL
//
// The crate owns the five social-auth record families (provider accounts,
// OpenID nonces and associations, email verification codes, partial pipeline
// state) and exposes them behind the SocialAuthStorage trait. The host
// application keeps its own user model and plugs it in via SocialAuthUser.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod storage;

pub use config::{init_db_pool, run_migrations, StorageConfig};
pub use errors::{is_integrity_error, StorageError};
pub use models::{
    Association, Code, CreateSocialAccount, Nonce, Partial, SocialAccount, SocialAuthUser,
    StoreAssociation, StorePartial,
};
pub use storage::{PgStorage, SocialAuthStorage};

/// Crate version, resolved from the package manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_manifest() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!VERSION.is_empty());
    }
}
