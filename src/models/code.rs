// src/models/code.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Email verification code
/// DOCUMENTATION: Issued during email validation steps of the auth pipeline.
/// The code value itself is an opaque 32-char hex token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Code {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Code {
    /// Generate a fresh opaque code value
    pub fn generate() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_are_32_hex_chars() {
        let code = Code::generate();
        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_codes_are_unique() {
        assert_ne!(Code::generate(), Code::generate());
    }
}
