use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A media item attached to a post.
///
/// The `type` column is free text (e.g. `image`, `video`), at most 50 chars.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Media {
    pub id: i64,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub post_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewMedia {
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub post_id: i64,
}

impl NewMedia {
    #[must_use]
    pub fn with_id(self, id: i64) -> Media {
        Media {
            id,
            media_type: self.media_type,
            url: self.url,
            post_id: self.post_id,
        }
    }
}
