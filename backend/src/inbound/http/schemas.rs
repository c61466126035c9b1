//! JSON request and response shapes for the users API.
//!
//! Domain types stay framework-agnostic: they derive neither `serde` nor
//! `ToSchema`. The wire shapes live here, in the inbound adapter, together
//! with their conversions to and from the domain.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserDraft};

/// Request body for creating or replacing a user.
///
/// All three fields are required. Unknown fields are ignored.
///
/// Example JSON:
/// `{"name":"Ann","email":"ann@x.com","description":"bio"}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserCreate {
    /// Display name.
    #[schema(example = "Ann")]
    pub name: String,
    /// Contact email; must not belong to another user.
    #[schema(example = "ann@x.com")]
    pub email: String,
    /// Free-text description.
    #[schema(example = "bio")]
    pub description: String,
}

impl From<UserCreate> for UserDraft {
    fn from(value: UserCreate) -> Self {
        let UserCreate {
            name,
            email,
            description,
        } = value;
        Self::new(name, email, Some(description))
    }
}

/// A stored user as returned by every users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    /// Storage-assigned identity.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Description; `null` when none is stored.
    pub description: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            description: user.description().map(str::to_owned),
        }
    }
}

/// Error payload returned by every failing request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "User not found")]
    pub detail: String,
}

/// Greeting returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct RootMessage {
    /// Fixed greeting text.
    #[schema(example = "Hello World")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn create_payload_ignores_unknown_fields() {
        let payload: UserCreate = serde_json::from_value(json!({
            "name": "Ann",
            "email": "ann@x.com",
            "description": "bio",
            "id": 99,
        }))
        .expect("payload parses");

        let draft = UserDraft::from(payload);
        assert_eq!(draft, UserDraft::new("Ann", "ann@x.com", Some("bio".to_owned())));
    }

    #[rstest]
    fn create_payload_requires_description() {
        let result = serde_json::from_value::<UserCreate>(json!({
            "name": "Ann",
            "email": "ann@x.com",
        }));
        assert!(result.is_err());
    }

    #[rstest]
    fn response_serialises_missing_description_as_null() {
        let user = User::new(UserId::new(3), UserDraft::new("Bo", "bo@x.com", None));

        let value = serde_json::to_value(UserResponse::from(user)).expect("serialise");

        assert_eq!(
            value,
            json!({"id": 3, "name": "Bo", "email": "bo@x.com", "description": null})
        );
    }
}
