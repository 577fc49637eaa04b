//! Graph loading and `to_dict` serialization over stored rows.

use picto_core::dict::{CommentDict, PostDict, UserDict};
use picto_core::enums::EntityKind;
use picto_core::graph::Graph;

use crate::error::DatabaseError;
use crate::service::PictoService;

impl PictoService {
    /// Read every table, parents first, into an in-memory [`Graph`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails, or `DatabaseError::Core` if
    /// stored rows break a graph invariant (only possible when foreign keys
    /// were disabled while writing).
    pub async fn load_graph(&self) -> Result<Graph, DatabaseError> {
        let mut graph = Graph::new();

        for user in self.list_users().await? {
            graph.insert_user(user)?;
        }
        for follower in self.list_followers().await? {
            graph.insert_follower(follower)?;
        }
        for post in self.list_posts().await? {
            graph.insert_post(post)?;
        }
        for comment in self.list_comments().await? {
            graph.insert_comment(comment)?;
        }
        for media in self.list_media().await? {
            graph.insert_media(media)?;
        }

        tracing::debug!(
            users = graph.len(EntityKind::User),
            posts = graph.len(EntityKind::Post),
            comments = graph.len(EntityKind::Comment),
            media = graph.len(EntityKind::Media),
            followers = graph.len(EntityKind::Follower),
            "loaded entity graph"
        );
        Ok(graph)
    }

    /// `to_dict` for one stored user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the user does not exist.
    pub async fn user_to_dict(&self, id: i64) -> Result<UserDict, DatabaseError> {
        let graph = self.load_graph().await?;
        let user = graph.user(id).map_err(|_| DatabaseError::NoResult)?;
        Ok(user.to_dict(&graph)?)
    }

    /// `to_dict` for one stored post.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the post does not exist.
    pub async fn post_to_dict(&self, id: i64) -> Result<PostDict, DatabaseError> {
        let graph = self.load_graph().await?;
        let post = graph.post(id).map_err(|_| DatabaseError::NoResult)?;
        Ok(post.to_dict(&graph)?)
    }

    /// `to_dict` for one stored comment.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the comment does not exist.
    pub async fn comment_to_dict(&self, id: i64) -> Result<CommentDict, DatabaseError> {
        let graph = self.load_graph().await?;
        let comment = graph.comment(id).map_err(|_| DatabaseError::NoResult)?;
        Ok(comment.to_dict(&graph)?)
    }
}
