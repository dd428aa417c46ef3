// src/models/association.rs

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// OpenID association negotiated with a provider
/// DOCUMENTATION: The shared secret is binary; it is stored base64-encoded in
/// a text column and decoded on demand. One association per
/// (server_url, handle) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Association {
    pub id: Uuid,
    pub server_url: String,
    pub handle: String,
    /// Base64-encoded shared secret
    pub secret: String,
    /// Issue time as epoch seconds
    pub issued: i64,
    /// Validity window in seconds
    pub lifetime: i32,
    pub assoc_type: String,
    pub created_at: DateTime<Utc>,
}

/// Request to store (or refresh) an association
#[derive(Debug, Clone)]
pub struct StoreAssociation {
    pub server_url: String,
    pub handle: String,
    pub secret: Vec<u8>,
    pub issued: i64,
    pub lifetime: i32,
    pub assoc_type: String,
}

impl StoreAssociation {
    /// Encode the raw secret for the text column
    pub fn encoded_secret(&self) -> String {
        STANDARD.encode(&self.secret)
    }
}

impl Association {
    /// Decode the stored secret back to raw bytes
    pub fn secret_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.secret)
    }

    /// Epoch second after which this association must not be used
    pub fn expires_at(&self) -> i64 {
        self.issued + i64::from(self.lifetime)
    }

    /// Whether the association has outlived its negotiated lifetime
    pub fn is_expired(&self, now_epoch: i64) -> bool {
        self.expires_at() <= now_epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(issued: i64, lifetime: i32) -> Association {
        Association {
            id: Uuid::new_v4(),
            server_url: "https://openid.example.com".to_string(),
            handle: "handle-1".to_string(),
            secret: STANDARD.encode(b"shared-secret"),
            issued,
            lifetime,
            assoc_type: "HMAC-SHA1".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn secret_round_trips_through_base64() {
        let req = StoreAssociation {
            server_url: "https://openid.example.com".to_string(),
            handle: "handle-1".to_string(),
            secret: vec![0x00, 0xff, 0x10, 0x7f],
            issued: 1_700_000_000,
            lifetime: 3600,
            assoc_type: "HMAC-SHA256".to_string(),
        };

        let encoded = req.encoded_secret();
        let assoc = Association {
            secret: encoded,
            ..sample(1_700_000_000, 3600)
        };
        assert_eq!(assoc.secret_bytes().unwrap(), vec![0x00, 0xff, 0x10, 0x7f]);
    }

    #[test]
    fn expiry_is_issued_plus_lifetime() {
        let assoc = sample(1_700_000_000, 3600);
        assert_eq!(assoc.expires_at(), 1_700_003_600);
        assert!(!assoc.is_expired(1_700_003_599));
        assert!(assoc.is_expired(1_700_003_600));
    }
}
