//! User record.

use serde::{Deserialize, Serialize};
use tracktor_core::Id;

/// A registered user. Never mutated client-side; the password never
/// leaves the signup/login requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "user_id")]
    pub id: Id,
    #[serde(rename = "user_name")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_remote_row() {
        let user: User = serde_json::from_str(r#"{"id": 5, "user_name": "janedoe"}"#).unwrap();
        assert_eq!(user.id, 5);
        assert_eq!(user.name, "janedoe");
    }
}
