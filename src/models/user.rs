use chrono::{DateTime, Utc};

/// Internal user record. The `password` field exists only inside the store;
/// this type is never serialized, so it cannot reach a response body.
#[derive(Debug, Default, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
