//! User entity.

use crate::Entity;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Maximum username length, matching the `users.username` column.
pub const USERNAME_MAX_LEN: usize = 30;

/// Maximum email length, matching the `users.email` column.
pub const EMAIL_MAX_LEN: usize = 50;

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-generated identifier.
    pub id: i64,
    /// Display name; not unique.
    pub username: String,
    /// Email address; unique across all users.
    pub email: String,
}

impl User {
    /// Projects the user into its wire representation `{id, username, email}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "username": self.username,
            "email": self.email,
        })
    }

    /// Overwrites the mutable fields in place.
    pub fn apply(&mut self, changes: NewUser) {
        self.username = changes.username;
        self.email = changes.email;
    }
}

impl Entity for User {
    type Id = i64;
    type Draft = NewUser;

    const NAME: &'static str = "user";

    fn id(&self) -> i64 {
        self.id
    }
}

/// A user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    /// Creates a new draft.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Attaches a store-generated id.
    #[must_use]
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_has_exactly_three_fields() {
        let user = NewUser::new("alice", "alice@example.com").into_user(7);
        let json = user.to_json();

        assert_eq!(json["id"], 7);
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json.as_object().map(serde_json::Map::len), Some(3));
    }

    #[test]
    fn test_to_json_matches_serde() {
        let user = NewUser::new("bob", "bob@example.com").into_user(1);
        assert_eq!(user.to_json(), serde_json::to_value(&user).unwrap());
    }

    #[test]
    fn test_apply_overwrites_fields_and_keeps_id() {
        let mut user = NewUser::new("carol", "carol@example.com").into_user(3);
        user.apply(NewUser::new("caroline", "caroline@example.com"));

        assert_eq!(user.id, 3);
        assert_eq!(user.username, "caroline");
        assert_eq!(user.email, "caroline@example.com");
    }

    #[test]
    fn test_entity_impl() {
        let user = NewUser::new("dave", "dave@example.com").into_user(11);
        assert_eq!(Entity::id(&user), 11);
        assert_eq!(User::NAME, "user");
    }
}
