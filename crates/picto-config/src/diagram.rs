//! ER diagram rendering configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Graphviz layout directions accepted for `rankdir`.
pub const RANKDIRS: [&str; 4] = ["TB", "LR", "BT", "RL"];

fn default_output() -> String {
    "diagram.png".to_string()
}

fn default_graphviz() -> String {
    "dot".to_string()
}

fn default_rankdir() -> String {
    "LR".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiagramConfig {
    /// Destination file. The extension selects the output format.
    #[serde(default = "default_output")]
    pub output: String,

    /// Graphviz executable used for image formats.
    #[serde(default = "default_graphviz")]
    pub graphviz: String,

    /// Graphviz layout direction.
    #[serde(default = "default_rankdir")]
    pub rankdir: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            graphviz: default_graphviz(),
            rankdir: default_rankdir(),
        }
    }
}

impl DiagramConfig {
    /// The layout direction, upper-cased and checked against [`RANKDIRS`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for anything else.
    pub fn validated_rankdir(&self) -> Result<String, ConfigError> {
        let upper = self.rankdir.trim().to_ascii_uppercase();
        if RANKDIRS.contains(&upper.as_str()) {
            Ok(upper)
        } else {
            Err(ConfigError::InvalidValue {
                field: "diagram.rankdir".into(),
                reason: format!("expected one of {RANKDIRS:?}, got '{}'", self.rankdir),
            })
        }
    }
}
