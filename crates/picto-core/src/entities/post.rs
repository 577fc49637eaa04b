use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A post owned by a user. Comments and media hang off it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i64,
    pub content: String,
}

impl NewPost {
    #[must_use]
    pub fn with_id(self, id: i64) -> Post {
        Post {
            id,
            user_id: self.user_id,
            content: self.content,
        }
    }
}
