// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export repository components

pub mod account_repository;
pub mod association_repository;
pub mod code_repository;
pub mod nonce_repository;
pub mod partial_repository;

pub use account_repository::*;
pub use association_repository::*;
pub use code_repository::*;
pub use nonce_repository::*;
pub use partial_repository::*;
