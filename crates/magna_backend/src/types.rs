//! Row and session shapes crossing the backend boundary

use serde::{Deserialize, Serialize};

/// Email/password pair for sign-up and sign-in
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The authenticated user inside a session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    /// Username captured in sign-up metadata, if any
    pub username: Option<String>,
}

/// An authenticated session, or absence thereof at the call site
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
}

/// A row in the `users` table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}
