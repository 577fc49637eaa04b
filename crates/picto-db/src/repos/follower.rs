//! Follower repository: the self-referential "follows" join table.
//!
//! A row `(user_from_id, user_to_id)` reads "user_from follows user_to".
//! [`PictoService::followers_of`] walks the relation backwards,
//! [`PictoService::following_of`] forwards.

use picto_core::entities::Follower;

use crate::error::DatabaseError;
use crate::helpers::{collect_ids, collect_rows};
use crate::service::PictoService;

fn row_to_follower(row: &libsql::Row) -> Result<Follower, DatabaseError> {
    Ok(Follower {
        user_from_id: row.get::<i64>(0)?,
        user_to_id: row.get::<i64>(1)?,
    })
}

impl PictoService {
    /// Record that `user_from_id` follows `user_to_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Constraint` if the pair already exists or
    /// either user is missing.
    pub async fn follow(
        &self,
        user_from_id: i64,
        user_to_id: i64,
    ) -> Result<Follower, DatabaseError> {
        self.db()
            .insert(
                "INSERT INTO follower (user_from_id, user_to_id) VALUES (?1, ?2)",
                [user_from_id, user_to_id],
            )
            .await?;
        tracing::debug!(user_from_id, user_to_id, "created follower");
        Ok(Follower::new(user_from_id, user_to_id))
    }

    /// Ids of users following `user_id`, ascending.
    pub async fn followers_of(&self, user_id: i64) -> Result<Vec<i64>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT user_from_id FROM follower WHERE user_to_id = ?1 ORDER BY user_from_id",
                [user_id],
            )
            .await?;
        collect_ids(rows).await
    }

    /// Ids of users `user_id` follows, ascending.
    pub async fn following_of(&self, user_id: i64) -> Result<Vec<i64>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT user_to_id FROM follower WHERE user_from_id = ?1 ORDER BY user_to_id",
                [user_id],
            )
            .await?;
        collect_ids(rows).await
    }

    pub async fn list_followers(&self) -> Result<Vec<Follower>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT user_from_id, user_to_id FROM follower ORDER BY user_from_id, user_to_id",
                (),
            )
            .await?;
        collect_rows(rows, row_to_follower).await
    }
}
