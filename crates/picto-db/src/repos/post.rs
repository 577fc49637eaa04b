//! Post repository.

use picto_core::entities::{NewPost, Post};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, first_row};
use crate::service::PictoService;

fn row_to_post(row: &libsql::Row) -> Result<Post, DatabaseError> {
    Ok(Post {
        id: row.get::<i64>(0)?,
        user_id: row.get::<i64>(1)?,
        content: row.get::<String>(2)?,
    })
}

impl PictoService {
    /// Insert a post for an existing user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Constraint` if the user does not exist or the
    /// content is longer than 500 characters.
    pub async fn create_post(&self, new: NewPost) -> Result<Post, DatabaseError> {
        let id = self
            .db()
            .insert(
                "INSERT INTO post (user_id, content) VALUES (?1, ?2)",
                libsql::params![new.user_id, new.content.as_str()],
            )
            .await?;
        tracing::debug!(post_id = id, user_id = new.user_id, "created post");
        Ok(new.with_id(id))
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT id, user_id, content FROM post WHERE id = ?1", [id])
            .await?;
        first_row(rows, row_to_post).await
    }

    pub async fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, user_id, content FROM post WHERE user_id = ?1 ORDER BY id",
                [user_id],
            )
            .await?;
        collect_rows(rows, row_to_post).await
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT id, user_id, content FROM post ORDER BY id", ())
            .await?;
        collect_rows(rows, row_to_post).await
    }
}
