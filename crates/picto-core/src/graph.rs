//! In-memory entity graph.
//!
//! Storage hands over already-loaded rows; the graph keeps them in id-keyed
//! arenas plus one index per foreign key, so relationship traversal is an
//! explicit lookup instead of lazy loading. Inserts enforce the same
//! referential and uniqueness rules the SQL schema declares.

use std::collections::{BTreeMap, BTreeSet};

use crate::entities::{Comment, Follower, Media, Post, User};
use crate::enums::EntityKind;
use crate::errors::CoreError;

type Index = BTreeMap<i64, BTreeSet<i64>>;

fn index_add(index: &mut Index, key: i64, value: i64) {
    index.entry(key).or_default().insert(value);
}

fn index_get(index: &Index, key: i64) -> impl Iterator<Item = i64> + '_ {
    index.get(&key).into_iter().flatten().copied()
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    users: BTreeMap<i64, User>,
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    media: BTreeMap<i64, Media>,
    followers: BTreeSet<Follower>,

    emails: BTreeMap<String, i64>,
    posts_by_user: Index,
    comments_by_author: Index,
    comments_by_post: Index,
    media_by_post: Index,
    // user_to_id -> user_from_id
    followed_by: Index,
    // user_from_id -> user_to_id
    follows: Index,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Inserts
    // -----------------------------------------------------------------------

    /// Add a user.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` if the id or the email is already taken.
    pub fn insert_user(&mut self, user: User) -> Result<(), CoreError> {
        if self.users.contains_key(&user.id) {
            return Err(duplicate(EntityKind::User, format!("id {}", user.id)));
        }
        if self.emails.contains_key(&user.email) {
            return Err(duplicate(EntityKind::User, format!("email {}", user.email)));
        }
        self.emails.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user);
        Ok(())
    }

    /// Add a post owned by an existing user.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` on an id collision, or
    /// `CoreError::DanglingReference` if `user_id` is unknown.
    pub fn insert_post(&mut self, post: Post) -> Result<(), CoreError> {
        if self.posts.contains_key(&post.id) {
            return Err(duplicate(EntityKind::Post, format!("id {}", post.id)));
        }
        self.require_user(EntityKind::Post, "user_id", post.user_id)?;
        index_add(&mut self.posts_by_user, post.user_id, post.id);
        self.posts.insert(post.id, post);
        Ok(())
    }

    /// Add a comment by an existing user on an existing post.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` on an id collision, or
    /// `CoreError::DanglingReference` if the author or post is unknown.
    pub fn insert_comment(&mut self, comment: Comment) -> Result<(), CoreError> {
        if self.comments.contains_key(&comment.id) {
            return Err(duplicate(EntityKind::Comment, format!("id {}", comment.id)));
        }
        self.require_user(EntityKind::Comment, "author_id", comment.author_id)?;
        self.require_post(EntityKind::Comment, comment.post_id)?;
        index_add(&mut self.comments_by_author, comment.author_id, comment.id);
        index_add(&mut self.comments_by_post, comment.post_id, comment.id);
        self.comments.insert(comment.id, comment);
        Ok(())
    }

    /// Add a media item attached to an existing post.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` on an id collision, or
    /// `CoreError::DanglingReference` if the post is unknown.
    pub fn insert_media(&mut self, media: Media) -> Result<(), CoreError> {
        if self.media.contains_key(&media.id) {
            return Err(duplicate(EntityKind::Media, format!("id {}", media.id)));
        }
        self.require_post(EntityKind::Media, media.post_id)?;
        index_add(&mut self.media_by_post, media.post_id, media.id);
        self.media.insert(media.id, media);
        Ok(())
    }

    /// Record that `user_from_id` follows `user_to_id`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` if the pair already exists, or
    /// `CoreError::DanglingReference` if either user is unknown.
    pub fn insert_follower(&mut self, follower: Follower) -> Result<(), CoreError> {
        if self.followers.contains(&follower) {
            return Err(duplicate(
                EntityKind::Follower,
                format!("{} -> {}", follower.user_from_id, follower.user_to_id),
            ));
        }
        self.require_user(EntityKind::Follower, "user_from_id", follower.user_from_id)?;
        self.require_user(EntityKind::Follower, "user_to_id", follower.user_to_id)?;
        index_add(&mut self.followed_by, follower.user_to_id, follower.user_from_id);
        index_add(&mut self.follows, follower.user_from_id, follower.user_to_id);
        self.followers.insert(follower);
        Ok(())
    }

    fn require_user(
        &self,
        entity: EntityKind,
        field: &'static str,
        user_id: i64,
    ) -> Result<(), CoreError> {
        if self.users.contains_key(&user_id) {
            Ok(())
        } else {
            Err(CoreError::DanglingReference {
                entity,
                field,
                target: EntityKind::User,
                target_id: user_id,
            })
        }
    }

    fn require_post(&self, entity: EntityKind, post_id: i64) -> Result<(), CoreError> {
        if self.posts.contains_key(&post_id) {
            Ok(())
        } else {
            Err(CoreError::DanglingReference {
                entity,
                field: "post_id",
                target: EntityKind::Post,
                target_id: post_id,
            })
        }
    }

    // -----------------------------------------------------------------------
    // Lookup by id
    // -----------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no user has this id.
    pub fn user(&self, id: i64) -> Result<&User, CoreError> {
        self.users
            .get(&id)
            .ok_or_else(|| CoreError::not_found(EntityKind::User, id))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no post has this id.
    pub fn post(&self, id: i64) -> Result<&Post, CoreError> {
        self.posts
            .get(&id)
            .ok_or_else(|| CoreError::not_found(EntityKind::Post, id))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no comment has this id.
    pub fn comment(&self, id: i64) -> Result<&Comment, CoreError> {
        self.comments
            .get(&id)
            .ok_or_else(|| CoreError::not_found(EntityKind::Comment, id))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no media item has this id.
    pub fn media(&self, id: i64) -> Result<&Media, CoreError> {
        self.media
            .get(&id)
            .ok_or_else(|| CoreError::not_found(EntityKind::Media, id))
    }

    #[must_use]
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.emails.get(email).and_then(|id| self.users.get(id))
    }

    // -----------------------------------------------------------------------
    // Foreign-key lookups (ascending id)
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn posts_by_user(&self, user_id: i64) -> Vec<&Post> {
        index_get(&self.posts_by_user, user_id)
            .filter_map(|id| self.posts.get(&id))
            .collect()
    }

    #[must_use]
    pub fn comments_by_author(&self, user_id: i64) -> Vec<&Comment> {
        index_get(&self.comments_by_author, user_id)
            .filter_map(|id| self.comments.get(&id))
            .collect()
    }

    #[must_use]
    pub fn comments_by_post(&self, post_id: i64) -> Vec<&Comment> {
        index_get(&self.comments_by_post, post_id)
            .filter_map(|id| self.comments.get(&id))
            .collect()
    }

    #[must_use]
    pub fn media_by_post(&self, post_id: i64) -> Vec<&Media> {
        index_get(&self.media_by_post, post_id)
            .filter_map(|id| self.media.get(&id))
            .collect()
    }

    /// Ids of the users following `user_id`.
    #[must_use]
    pub fn followers_of(&self, user_id: i64) -> Vec<i64> {
        index_get(&self.followed_by, user_id).collect()
    }

    /// Ids of the users `user_id` follows.
    #[must_use]
    pub fn following_of(&self, user_id: i64) -> Vec<i64> {
        index_get(&self.follows, user_id).collect()
    }

    // -----------------------------------------------------------------------
    // Iteration
    // -----------------------------------------------------------------------

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.values()
    }

    pub fn media_items(&self) -> impl Iterator<Item = &Media> {
        self.media.values()
    }

    pub fn followers(&self) -> impl Iterator<Item = &Follower> {
        self.followers.iter()
    }

    /// Number of rows held for `kind`.
    #[must_use]
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::User => self.users.len(),
            EntityKind::Post => self.posts.len(),
            EntityKind::Comment => self.comments.len(),
            EntityKind::Media => self.media.len(),
            EntityKind::Follower => self.followers.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|kind| self.len(*kind) == 0)
    }
}

fn duplicate(entity: EntityKind, key: String) -> CoreError {
    CoreError::Duplicate { entity, key }
}
