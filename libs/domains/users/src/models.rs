use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Assigned by the repository on create; 0 until then
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// Not validated for format
    pub email: String,
}

impl User {
    /// Create a user that has not been stored yet (ID unset)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} <{}>",
            self.id, self.first_name, self.last_name, self.email
        )
    }
}

/// Body of `POST /users`.
///
/// Absent or `null` fields decode as empty strings and are then reported as
/// "missing field".
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateUserRequest {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "missing field"))]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "missing field"))]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "missing field"))]
    pub email: String,
}

/// Body of `PUT /users/{id}`: a whole-record replacement.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "missing field"))]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "missing field"))]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "missing field"))]
    pub email: String,
}

/// `null` reads the same as an absent field.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl UpdateUserRequest {
    pub fn into_user(self, id: u64) -> User {
        User::new(self.first_name, self.last_name, self.email).with_id(id)
    }
}
