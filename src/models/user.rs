use serde::{Deserialize, Serialize};

use super::Resource;

/// A dashboard user. Timestamps are kept as the backend formats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating a user
#[derive(Clone, PartialEq, Serialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    type Create = UserCreate;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_hides_password() {
        let payload = UserCreate {
            username: "trader".to_string(),
            email: "trader@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", payload);
        assert!(rendered.contains("trader@example.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
