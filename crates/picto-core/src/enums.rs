//! Entity kinds for Picto.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five record types declared by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Post,
    Comment,
    Media,
    Follower,
}

impl EntityKind {
    /// All entity kinds, parents before children.
    pub const ALL: [Self; 5] = [
        Self::User,
        Self::Follower,
        Self::Post,
        Self::Comment,
        Self::Media,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Media => "media",
            Self::Follower => "follower",
        }
    }

    /// SQL table backing this entity. Table names are singular.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EntityKind::User, "user")]
    #[case(EntityKind::Post, "post")]
    #[case(EntityKind::Comment, "comment")]
    #[case(EntityKind::Media, "media")]
    #[case(EntityKind::Follower, "follower")]
    fn serde_matches_as_str(#[case] kind: EntityKind, #[case] expected: &str) {
        assert_eq!(kind.as_str(), expected);
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, serde_json::Value::String(expected.to_string()));
        let back: EntityKind = serde_json::from_value(json).unwrap();
        assert_eq!(back, kind);
    }

    #[test]
    fn display_is_table_name() {
        assert_eq!(EntityKind::Follower.to_string(), "follower");
        assert_eq!(EntityKind::Media.table_name(), "media");
    }
}
