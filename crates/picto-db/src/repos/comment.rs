//! Comment repository.

use picto_core::entities::{Comment, NewComment};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, first_row};
use crate::service::PictoService;

fn row_to_comment(row: &libsql::Row) -> Result<Comment, DatabaseError> {
    Ok(Comment {
        id: row.get::<i64>(0)?,
        comment_text: row.get::<String>(1)?,
        author_id: row.get::<i64>(2)?,
        post_id: row.get::<i64>(3)?,
    })
}

impl PictoService {
    /// Insert a comment by an existing user on an existing post.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Constraint` if the author or post is missing,
    /// or the text exceeds 250 characters.
    pub async fn create_comment(&self, new: NewComment) -> Result<Comment, DatabaseError> {
        let id = self
            .db()
            .insert(
                "INSERT INTO comment (comment_text, author_id, post_id) VALUES (?1, ?2, ?3)",
                libsql::params![new.comment_text.as_str(), new.author_id, new.post_id],
            )
            .await?;
        tracing::debug!(
            comment_id = id,
            author_id = new.author_id,
            post_id = new.post_id,
            "created comment"
        );
        Ok(new.with_id(id))
    }

    pub async fn get_comment(&self, id: i64) -> Result<Comment, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, comment_text, author_id, post_id FROM comment WHERE id = ?1",
                [id],
            )
            .await?;
        first_row(rows, row_to_comment).await
    }

    pub async fn comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, comment_text, author_id, post_id FROM comment WHERE post_id = ?1 ORDER BY id",
                [post_id],
            )
            .await?;
        collect_rows(rows, row_to_comment).await
    }

    pub async fn comments_by_author(&self, author_id: i64) -> Result<Vec<Comment>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, comment_text, author_id, post_id FROM comment WHERE author_id = ?1 ORDER BY id",
                [author_id],
            )
            .await?;
        collect_rows(rows, row_to_comment).await
    }

    pub async fn list_comments(&self) -> Result<Vec<Comment>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, comment_text, author_id, post_id FROM comment ORDER BY id",
                (),
            )
            .await?;
        collect_rows(rows, row_to_comment).await
    }
}
