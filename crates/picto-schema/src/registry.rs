//! Central schema registry for Picto records and views.
//!
//! The `SchemaRegistry` builds JSON Schemas from picto-core types at
//! construction time using [`schemars::schema_for!`] and validates values
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Store of the JSON Schemas for every stored record and `to_dict` view.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry with the five record schemas and the three view
    /// schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Stored records (5) ---
        register!(schemas, "user", picto_core::entities::User);
        register!(schemas, "post", picto_core::entities::Post);
        register!(schemas, "comment", picto_core::entities::Comment);
        register!(schemas, "media", picto_core::entities::Media);
        register!(schemas, "follower", picto_core::entities::Follower);

        // --- to_dict views (3) ---
        register!(schemas, "user_dict", picto_core::dict::UserDict);
        register!(schemas, "post_dict", picto_core::dict::PostDict);
        register!(schemas, "comment_dict", picto_core::dict::CommentDict);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(schema = name, count = errors.len(), "validation failed");
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picto_core::entities::{Follower, Media, User};
    use pretty_assertions::assert_eq;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_names() {
        let reg = registry();
        assert_eq!(reg.schema_count(), 8);
        assert_eq!(
            reg.list(),
            vec![
                "comment",
                "comment_dict",
                "follower",
                "media",
                "post",
                "post_dict",
                "user",
                "user_dict",
            ]
        );
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("likes").is_none());
    }

    #[test]
    fn validate_valid_user() {
        let user = User {
            id: 1,
            username: "ana".into(),
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            email: "a@x.com".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(registry().validate("user", &json).is_ok());
    }

    #[test]
    fn media_schema_uses_type_key() {
        let media = Media {
            id: 1,
            media_type: "image".into(),
            url: "https://cdn.example/1.jpg".into(),
            post_id: 1,
        };
        let json = serde_json::to_value(&media).unwrap();
        assert!(registry().validate("media", &json).is_ok());

        let renamed = serde_json::json!({
            "id": 1,
            "media_type": "image",
            "url": "https://cdn.example/1.jpg",
            "post_id": 1
        });
        assert!(registry().validate("media", &renamed).is_err());
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let invalid = serde_json::json!({ "user_from_id": 1 });
        let result = registry().validate("follower", &invalid);
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(!errors.is_empty());
        } else {
            panic!("Expected ValidationFailed");
        }
        let valid = serde_json::to_value(Follower::new(1, 2)).unwrap();
        assert!(registry().validate("follower", &valid).is_ok());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn user_dict_reference_form_validates() {
        let reference = serde_json::json!({
            "id": 2,
            "username": "bo",
            "first_name": "Bo",
            "last_name": "Diaz",
            "email": "bo@x.com"
        });
        assert!(registry().validate("user_dict", &reference).is_ok());
    }
}
