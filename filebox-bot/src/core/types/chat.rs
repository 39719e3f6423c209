//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat (private, group or channel) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    pub fn private(id: i64) -> Self {
        Self {
            id,
            chat_type: "private".to_string(),
        }
    }
}
