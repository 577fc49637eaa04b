//! Cross-cutting error types for Picto.
//!
//! Storage errors (`DatabaseError`) and schema/diagram errors live in their
//! respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

use crate::enums::EntityKind;

/// Errors raised while building or walking the entity graph.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity} {id}")]
    NotFound { entity: EntityKind, id: String },

    /// A record collides with an existing primary key or unique column.
    #[error("Duplicate {entity}: {key}")]
    Duplicate { entity: EntityKind, key: String },

    /// A foreign key points at a row that is not in the graph.
    #[error("Dangling reference: {entity}.{field} = {target_id} has no matching {target}")]
    DanglingReference {
        entity: EntityKind,
        field: &'static str,
        target: EntityKind,
        target_id: i64,
    },
}

impl CoreError {
    pub(crate) fn not_found(entity: EntityKind, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
