//! `to_dict` views: entities walked through the [`Graph`] into nested,
//! JSON-serializable mappings.
//!
//! Embedding rules:
//! - a user embeds its posts and comments in full, plus follower and
//!   following ids;
//! - a post embeds its comments in full and its media records;
//! - a comment embeds its author in full but its post only by id.
//!
//! The comment → post edge being an id keeps post ↔ comment from looping.
//! Comment → author can still reach a user again (a user commenting on
//! anything does this). Within one `to_dict` call each user is expanded in
//! full at most once; every later occurrence is emitted as a reference with
//! scalar fields only and relation lists absent.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Comment, Media, Post, User};
use crate::errors::CoreError;
use crate::graph::Graph;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserDict {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Absent when this user is a reference to one expanded elsewhere in the output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<PostDict>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentDict>>,
    /// Ids of users following this user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<Vec<i64>>,
    /// Ids of users this user follows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<Vec<i64>>,
}

impl UserDict {
    fn reference(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            posts: None,
            comments: None,
            followers: None,
            following: None,
        }
    }

    /// True if the relation lists were left out because this user is
    /// expanded elsewhere in the same output.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        self.posts.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PostDict {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub comments: Vec<CommentDict>,
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommentDict {
    pub id: i64,
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
    pub author: Box<UserDict>,
    /// Bare id of the commented post.
    pub post: i64,
}

impl User {
    /// Serialize this user with posts, comments, and follow ids.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if a comment reachable from this user
    /// points at an author or post missing from `graph`.
    pub fn to_dict(&self, graph: &Graph) -> Result<UserDict, CoreError> {
        Walker::new(graph).user(self)
    }
}

impl Post {
    /// Serialize this post with its comments and media.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if a comment on this post references a
    /// missing author.
    pub fn to_dict(&self, graph: &Graph) -> Result<PostDict, CoreError> {
        Walker::new(graph).post(self)
    }
}

impl Comment {
    /// Serialize this comment with its full author and its post id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the author or the post is missing
    /// from `graph`.
    pub fn to_dict(&self, graph: &Graph) -> Result<CommentDict, CoreError> {
        Walker::new(graph).comment(self)
    }
}

struct Walker<'g> {
    graph: &'g Graph,
    // Users already expanded in full during this call.
    expanded: BTreeSet<i64>,
}

impl<'g> Walker<'g> {
    const fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            expanded: BTreeSet::new(),
        }
    }

    fn user(&mut self, user: &User) -> Result<UserDict, CoreError> {
        if !self.expanded.insert(user.id) {
            return Ok(UserDict::reference(user));
        }
        self.user_in_full(user)
    }

    fn user_in_full(&mut self, user: &User) -> Result<UserDict, CoreError> {
        let graph = self.graph;

        let mut posts = Vec::new();
        for post in graph.posts_by_user(user.id) {
            posts.push(self.post(post)?);
        }

        let mut comments = Vec::new();
        for comment in graph.comments_by_author(user.id) {
            comments.push(self.comment(comment)?);
        }

        Ok(UserDict {
            posts: Some(posts),
            comments: Some(comments),
            followers: Some(graph.followers_of(user.id)),
            following: Some(graph.following_of(user.id)),
            ..UserDict::reference(user)
        })
    }

    fn post(&mut self, post: &Post) -> Result<PostDict, CoreError> {
        let graph = self.graph;

        let mut comments = Vec::new();
        for comment in graph.comments_by_post(post.id) {
            comments.push(self.comment(comment)?);
        }

        Ok(PostDict {
            id: post.id,
            user_id: post.user_id,
            content: post.content.clone(),
            comments,
            media: graph.media_by_post(post.id).into_iter().cloned().collect(),
        })
    }

    fn comment(&mut self, comment: &Comment) -> Result<CommentDict, CoreError> {
        let graph = self.graph;
        let author = graph.user(comment.author_id)?;
        let post = graph.post(comment.post_id)?;

        Ok(CommentDict {
            id: comment.id,
            comment_text: comment.comment_text.clone(),
            author_id: comment.author_id,
            post_id: comment.post_id,
            author: Box::new(self.user(author)?),
            post: post.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Follower;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use serde_json::json;

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.into(),
            first_name: format!("{username}-first"),
            last_name: format!("{username}-last"),
            email: format!("{username}@x.com"),
        }
    }

    #[test]
    fn lone_user_has_empty_lists() {
        let mut g = Graph::new();
        let ana = User {
            id: 1,
            username: "ana".into(),
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            email: "a@x.com".into(),
        };
        g.insert_user(ana.clone()).unwrap();

        let value = serde_json::to_value(ana.to_dict(&g).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "username": "ana",
                "first_name": "Ana",
                "last_name": "Lopez",
                "email": "a@x.com",
                "posts": [],
                "comments": [],
                "followers": [],
                "following": []
            })
        );
    }

    #[test]
    fn comment_embeds_author_and_post_id() {
        let mut g = Graph::new();
        g.insert_user(user(1, "ana")).unwrap();
        g.insert_user(user(2, "bo")).unwrap();
        g.insert_post(Post {
            id: 7,
            user_id: 1,
            content: "sunset".into(),
        })
        .unwrap();
        let comment = Comment {
            id: 3,
            comment_text: "nice".into(),
            author_id: 2,
            post_id: 7,
        };
        g.insert_comment(comment.clone()).unwrap();

        let value = serde_json::to_value(comment.to_dict(&g).unwrap()).unwrap();
        assert_eq!(value["post"], json!(7));
        assert_eq!(value["post_id"], json!(7));
        assert_eq!(value["author"]["id"], json!(2));
        assert_eq!(value["author"]["username"], json!("bo"));
        // The author's own comment loops back to them and is cut to a reference.
        let nested = &value["author"]["comments"][0];
        assert_eq!(nested["id"], json!(3));
        assert_eq!(nested["author"]["id"], json!(2));
        assert!(nested["author"].get("comments").is_none());
    }

    #[test]
    fn post_embeds_comments_and_media() {
        let mut g = Graph::new();
        g.insert_user(user(1, "ana")).unwrap();
        let post = Post {
            id: 1,
            user_id: 1,
            content: "beach".into(),
        };
        g.insert_post(post.clone()).unwrap();
        g.insert_media(Media {
            id: 5,
            media_type: "image".into(),
            url: "https://cdn.example/5.jpg".into(),
            post_id: 1,
        })
        .unwrap();

        let dict = post.to_dict(&g).unwrap();
        assert!(dict.comments.is_empty());
        assert_eq!(dict.media.len(), 1);

        let value = serde_json::to_value(&dict).unwrap();
        assert_eq!(
            value["media"][0],
            json!({"id": 5, "type": "image", "url": "https://cdn.example/5.jpg", "post_id": 1})
        );
    }

    #[test]
    fn self_comment_terminates() {
        let mut g = Graph::new();
        let ana = user(1, "ana");
        g.insert_user(ana.clone()).unwrap();
        g.insert_post(Post {
            id: 1,
            user_id: 1,
            content: "selfie".into(),
        })
        .unwrap();
        g.insert_comment(Comment {
            id: 1,
            comment_text: "me again".into(),
            author_id: 1,
            post_id: 1,
        })
        .unwrap();

        let dict = ana.to_dict(&g).unwrap();
        let posts = dict.posts.as_ref().unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].comments[0].author.is_reference());
        assert!(dict.comments.as_ref().unwrap()[0].author.is_reference());
        assert!(!dict.is_reference());
    }

    #[test]
    fn follow_ids_in_both_directions() {
        let mut g = Graph::new();
        let one = user(1, "one");
        let two = user(2, "two");
        g.insert_user(one.clone()).unwrap();
        g.insert_user(two.clone()).unwrap();
        g.insert_follower(Follower::new(1, 2)).unwrap();

        let one = one.to_dict(&g).unwrap();
        let two = two.to_dict(&g).unwrap();
        assert_eq!(two.followers, Some(vec![1]));
        assert_eq!(two.following, Some(vec![]));
        assert_eq!(one.following, Some(vec![2]));
        assert_eq!(one.followers, Some(vec![]));
    }

    #[test]
    fn other_users_are_embedded_in_full() {
        let mut g = Graph::new();
        g.insert_user(user(1, "ana")).unwrap();
        g.insert_user(user(2, "bo")).unwrap();
        g.insert_post(Post {
            id: 1,
            user_id: 1,
            content: "a".into(),
        })
        .unwrap();
        g.insert_post(Post {
            id: 2,
            user_id: 2,
            content: "b".into(),
        })
        .unwrap();
        g.insert_comment(Comment {
            id: 1,
            comment_text: "hey".into(),
            author_id: 2,
            post_id: 1,
        })
        .unwrap();

        let ana = g.user(1).unwrap().to_dict(&g).unwrap();
        let author = &ana.posts.as_ref().unwrap()[0].comments[0].author;
        assert_eq!(author.id, 2);
        assert!(!author.is_reference());
        assert_eq!(author.posts.as_ref().unwrap()[0].id, 2);
    }

    /// Counts `UserDict`s with relation lists, per user id.
    fn count_full_users(dict: &UserDict, counts: &mut BTreeMap<i64, usize>) {
        if dict.is_reference() {
            return;
        }
        *counts.entry(dict.id).or_default() += 1;
        let comments = dict.comments.iter().flatten();
        let post_comments = dict.posts.iter().flatten().flat_map(|p| &p.comments);
        for comment in comments.chain(post_comments) {
            count_full_users(&comment.author, counts);
        }
    }

    #[test]
    fn densely_connected_users_expand_once() {
        let n = 8;
        let mut g = Graph::new();
        for id in 1..=n {
            g.insert_user(user(id, &format!("u{id}"))).unwrap();
            g.insert_post(Post {
                id,
                user_id: id,
                content: format!("post by u{id}"),
            })
            .unwrap();
        }
        let mut comment_id = 0;
        for author in 1..=n {
            for post in (1..=n).filter(|p| *p != author) {
                comment_id += 1;
                g.insert_comment(Comment {
                    id: comment_id,
                    comment_text: "nice".into(),
                    author_id: author,
                    post_id: post,
                })
                .unwrap();
            }
        }

        let dict = g.user(1).unwrap().to_dict(&g).unwrap();
        let mut counts = BTreeMap::new();
        count_full_users(&dict, &mut counts);

        assert_eq!(counts.len(), usize::try_from(n).unwrap());
        assert!(counts.values().all(|c| *c == 1), "{counts:?}");

        let json = serde_json::to_string(&dict).unwrap();
        assert!(json.len() < 200_000, "output grew to {} bytes", json.len());
    }

    #[test]
    fn comment_with_missing_author_fails() {
        let g = Graph::new();
        let orphan = Comment {
            id: 1,
            comment_text: "?".into(),
            author_id: 4,
            post_id: 4,
        };
        assert!(matches!(
            orphan.to_dict(&g),
            Err(CoreError::NotFound { .. })
        ));
    }
}
