//! Media repository.

use picto_core::entities::{Media, NewMedia};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, first_row};
use crate::service::PictoService;

fn row_to_media(row: &libsql::Row) -> Result<Media, DatabaseError> {
    Ok(Media {
        id: row.get::<i64>(0)?,
        media_type: row.get::<String>(1)?,
        url: row.get::<String>(2)?,
        post_id: row.get::<i64>(3)?,
    })
}

impl PictoService {
    /// Attach a media item to an existing post.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Constraint` if the post is missing or `type`
    /// / `url` exceed 50 / 250 characters.
    pub async fn create_media(&self, new: NewMedia) -> Result<Media, DatabaseError> {
        let id = self
            .db()
            .insert(
                "INSERT INTO media (type, url, post_id) VALUES (?1, ?2, ?3)",
                libsql::params![new.media_type.as_str(), new.url.as_str(), new.post_id],
            )
            .await?;
        tracing::debug!(media_id = id, post_id = new.post_id, "created media");
        Ok(new.with_id(id))
    }

    pub async fn get_media(&self, id: i64) -> Result<Media, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT id, type, url, post_id FROM media WHERE id = ?1", [id])
            .await?;
        first_row(rows, row_to_media).await
    }

    pub async fn media_by_post(&self, post_id: i64) -> Result<Vec<Media>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, type, url, post_id FROM media WHERE post_id = ?1 ORDER BY id",
                [post_id],
            )
            .await?;
        collect_rows(rows, row_to_media).await
    }

    pub async fn list_media(&self) -> Result<Vec<Media>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT id, type, url, post_id FROM media ORDER BY id", ())
            .await?;
        collect_rows(rows, row_to_media).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{insert_post, insert_user, test_service};
    use rstest::rstest;

    #[tokio::test]
    async fn create_media_roundtrip() {
        let svc = test_service().await;
        let ana = insert_user(&svc, "ana").await;
        let post = insert_post(&svc, ana.id, "trip").await;

        let media = svc
            .create_media(NewMedia {
                media_type: "image".into(),
                url: "https://cdn.example/trip.jpg".into(),
                post_id: post.id,
            })
            .await
            .unwrap();
        assert_eq!(svc.get_media(media.id).await.unwrap(), media);
        assert_eq!(svc.media_by_post(post.id).await.unwrap(), vec![media]);
    }

    #[rstest]
    #[case::type_at_limit(50, 10, true)]
    #[case::type_over_limit(51, 10, false)]
    #[case::url_at_limit(5, 250, true)]
    #[case::url_over_limit(5, 251, false)]
    #[tokio::test]
    async fn length_bounds(#[case] type_len: usize, #[case] url_len: usize, #[case] accepted: bool) {
        let svc = test_service().await;
        let ana = insert_user(&svc, "ana").await;
        let post = insert_post(&svc, ana.id, "trip").await;

        let result = svc
            .create_media(NewMedia {
                media_type: "t".repeat(type_len),
                url: "u".repeat(url_len),
                post_id: post.id,
            })
            .await;
        if accepted {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(DatabaseError::Constraint(_))));
            assert!(svc.list_media().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn media_requires_post() {
        let svc = test_service().await;
        let result = svc
            .create_media(NewMedia {
                media_type: "video".into(),
                url: "https://cdn.example/v.mp4".into(),
                post_id: 1,
            })
            .await;
        assert!(matches!(result, Err(DatabaseError::Constraint(_))));
    }
}
