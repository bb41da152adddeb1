use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// Public view of a user record. Carries no password field, so the
/// projection cannot leak it.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request body for creating a user. Fields are optional at the serde layer;
/// required-ness is checked by the handler so that missing fields come back
/// as a 400 listing the violations rather than a deserialize rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Partial update; only the provided fields overwrite the stored record.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
