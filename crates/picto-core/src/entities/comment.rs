use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A comment written by `author_id` on `post_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewComment {
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}

impl NewComment {
    #[must_use]
    pub fn with_id(self, id: i64) -> Comment {
        Comment {
            id,
            comment_text: self.comment_text,
            author_id: self.author_id,
            post_id: self.post_id,
        }
    }
}
