// src/models/nonce.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One-time-use OpenID nonce
/// DOCUMENTATION: The (server_url, timestamp, salt) triple is unique; seeing
/// the same triple twice means a replayed authentication response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Nonce {
    pub id: Uuid,
    pub server_url: String,
    pub timestamp: i64,
    pub salt: String,
    pub created_at: DateTime<Utc>,
}
