//! Repository modules implementing inserts and lookups for all Picto entities.
//!
//! Each module adds methods to `PictoService` via `impl PictoService` blocks.
//! There are no update or delete operations.

pub mod comment;
pub mod follower;
pub mod graph;
pub mod media;
pub mod post;
pub mod user;
