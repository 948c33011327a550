//! Wire DTOs for the identity and relay services.
//!
//! DESIGN
//! ======
//! Field names follow the third-party JSON contracts exactly; serde renames
//! keep Rust-side names idiomatic where the wire uses underscores.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Profile of the signed-in admin, as persisted in the auth store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

/// Userinfo endpoint response. Only the fields the site reads are modeled;
/// unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub picture: Option<String>,
    /// Stable provider account id.
    pub sub: Option<String>,
}

impl From<UserInfo> for User {
    fn from(info: UserInfo) -> Self {
        Self {
            email: info.email,
            name: info.name,
            picture: info.picture,
        }
    }
}

/// JSON body posted to the form relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_template")]
    pub template: String,
}
