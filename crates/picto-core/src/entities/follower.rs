use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Join row for the self-referential "follows" relation:
/// `user_from_id` follows `user_to_id`.
///
/// The pair is the primary key; there is no separate id.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Follower {
    pub user_from_id: i64,
    pub user_to_id: i64,
}

impl Follower {
    #[must_use]
    pub const fn new(user_from_id: i64, user_to_id: i64) -> Self {
        Self {
            user_from_id,
            user_to_id,
        }
    }
}
