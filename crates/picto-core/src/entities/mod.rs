//! Entity structs for all Picto records.
//!
//! Each entity maps to a table in the libSQL database (see `crate::schema`).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation. `New*` payloads carry everything but the
//! storage-assigned id.

mod comment;
mod follower;
mod media;
mod post;
mod user;

pub use comment::{Comment, NewComment};
pub use follower::Follower;
pub use media::{Media, NewMedia};
pub use post::{NewPost, Post};
pub use user::{NewUser, User};
