// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod association;
pub mod code;
pub mod nonce;
pub mod partial;
pub mod social_account;

pub use association::*;
pub use code::*;
pub use nonce::*;
pub use partial::*;
pub use social_account::*;
