// src/storage/mod.rs
// DOCUMENTATION: Storage contract module organization
// PURPOSE: Re-export the storage trait and its PostgreSQL implementation

pub mod pg_storage;
pub mod traits;

pub use pg_storage::PgStorage;
pub use traits::SocialAuthStorage;
