// src/models/partial.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Saved state of a half-finished authentication pipeline
/// DOCUMENTATION: When a flow pauses (e.g. waiting for email confirmation),
/// the pipeline position and its keyword arguments are parked here under an
/// opaque token so the flow can resume later.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Partial {
    pub id: Uuid,
    pub token: String,
    pub backend: String,
    pub next_step: i32,
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Request to park pipeline state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorePartial {
    pub token: String,
    pub backend: String,
    pub next_step: i32,
    pub data: Option<serde_json::Value>,
}

impl StorePartial {
    /// Park state under a freshly generated token
    pub fn new(backend: &str, next_step: i32, data: Option<serde_json::Value>) -> Self {
        StorePartial {
            token: generate_token(),
            backend: backend.to_string(),
            next_step,
            data,
        }
    }
}

/// Generate an opaque resume token (32-char hex)
pub fn generate_token() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_partial_gets_a_token() {
        let req = StorePartial::new("google-oauth2", 3, None);
        assert_eq!(req.token.len(), 32);
        assert_eq!(req.backend, "google-oauth2");
        assert_eq!(req.next_step, 3);
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn partial_data_round_trips_as_json() {
        let req = StorePartial::new(
            "github",
            1,
            Some(serde_json::json!({"kwargs": {"username": "octocat"}})),
        );
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["data"]["kwargs"]["username"], "octocat");
    }
}
