//! Filtering configuration.
//!
//! Every key is optional; a missing file or key falls back to the card
//! browser defaults.
//!
//! ```yaml
//! secondary_field: cardBack
//! title_field: name
//! hidden_fields: [availableDate, cardImageUrl, cardBack, era]
//! shortcuts:
//!   color: { B: Black, U: Blue, G: Green, Y: Yellow, R: Red }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CriteriaError, Result};
use crate::filter::Shortcuts;
use crate::record::{FieldDescriptor, DEFAULT_SECONDARY_FIELD};

/// Configuration for loading, describing and filtering records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key of the secondary sub-record searched as a fallback.
    pub secondary_field: String,
    /// Field used to name a record in listings.
    pub title_field: String,
    /// Fields left out of field listings.
    pub hidden_fields: Vec<String>,
    /// Per-field maps from button ids to filter text.
    pub shortcuts: HashMap<String, HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        let colors = [
            ("B", "Black"),
            ("U", "Blue"),
            ("G", "Green"),
            ("Y", "Yellow"),
            ("R", "Red"),
        ]
        .into_iter()
        .map(|(id, text)| (id.to_string(), text.to_string()))
        .collect();

        Config {
            secondary_field: DEFAULT_SECONDARY_FIELD.to_string(),
            title_field: "name".to_string(),
            hidden_fields: ["availableDate", "cardImageUrl", "cardBack", "era"]
                .into_iter()
                .map(String::from)
                .collect(),
            shortcuts: HashMap::from([("color".to_string(), colors)]),
        }
    }
}

impl Config {
    /// Parses configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to null, not to an empty map
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CriteriaError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = Config::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns the shortcut maps.
    pub fn shortcuts(&self) -> Shortcuts {
        Shortcuts::from(self.shortcuts.clone())
    }

    /// Returns `true` if `field` is left out of field listings.
    pub fn is_hidden(&self, field: &str) -> bool {
        self.hidden_fields.iter().any(|hidden| hidden == field)
    }

    /// Drops hidden fields from a descriptor list.
    pub fn visible_fields(&self, fields: Vec<FieldDescriptor>) -> Vec<FieldDescriptor> {
        fields
            .into_iter()
            .filter(|field| !self.is_hidden(&field.field_name))
            .collect()
    }
}
