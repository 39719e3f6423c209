//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Placeholder for messages without a sender (e.g. channel posts).
    pub fn unknown() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}
