// src/models/social_account.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A link between a local user and an identity at a social provider
/// DOCUMENTATION: One row per (provider, uid) pair. extra_data holds whatever
/// the provider returned beyond the uid (tokens, profile fields) as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SocialAccount {
    pub id: Uuid,
    pub user_id: Uuid,
    pub provider: String,
    pub uid: String,
    pub extra_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to link a provider identity to a local user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSocialAccount {
    pub user_id: Uuid,
    pub provider: String,
    pub uid: String,
    pub extra_data: Option<serde_json::Value>,
}

impl CreateSocialAccount {
    /// Build a link request, coercing any displayable uid to its string form
    /// (providers hand back numeric ids as often as strings)
    pub fn new(user_id: Uuid, provider: &str, uid: impl ToString) -> Self {
        CreateSocialAccount {
            user_id,
            provider: provider.to_string(),
            uid: uid.to_string(),
            extra_data: None,
        }
    }
}

/// The host application's user model, seen from the storage layer
/// DOCUMENTATION: The storage adapter never owns users; the host implements
/// this trait on its own user type so disconnect policy and username lookups
/// can be evaluated here.
pub trait SocialAuthUser {
    /// Primary key of the user row in the host application
    fn id(&self) -> Uuid;

    /// Login name, if the host exposes one
    fn username(&self) -> Option<String> {
        None
    }

    /// Whether the user can still sign in without any social account.
    /// Users without a usable password must keep at least one connection.
    fn has_usable_password(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestUser {
        id: Uuid,
    }

    impl SocialAuthUser for TestUser {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    #[test]
    fn create_request_coerces_numeric_uid() {
        let user_id = Uuid::new_v4();
        let req = CreateSocialAccount::new(user_id, "github", 12345u64);
        assert_eq!(req.uid, "12345");
        assert_eq!(req.provider, "github");
        assert!(req.extra_data.is_none());
    }

    #[test]
    fn user_trait_defaults_to_usable_password() {
        let user = TestUser { id: Uuid::new_v4() };
        assert!(user.has_usable_password());
        assert!(user.username().is_none());
    }

    #[test]
    fn account_serializes_extra_data_as_json() {
        let account = SocialAccount {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            provider: "google-oauth2".to_string(),
            uid: "someone@example.com".to_string(),
            extra_data: Some(serde_json::json!({"access_token": "abc123"})),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["provider"], "google-oauth2");
        assert_eq!(value["extra_data"]["access_token"], "abc123");
    }
}
