//! Site items and their attributes.
//!
//! Attributes come from YAML front matter. The keys the helpers understand
//! are typed fields; everything else lands in [`ItemAttributes::extra`] and
//! stays reachable through [`ItemAttributes::get`] (used for sort keys).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::identifier::normalize_identifier;

/// Item attributes loaded from front matter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttributes {
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short title used by breadcrumbs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,

    /// Item kind (e.g., "article", "page").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Any other front matter key.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ItemAttributes {
    /// Parse attributes from YAML content.
    ///
    /// Empty content returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, MetadataError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed)
            .map_err(|e| MetadataError::Parse(format!("Invalid YAML: {e}")))
    }

    /// Look up an attribute as a string.
    ///
    /// Numbers and booleans are converted to their string form. Arrays,
    /// objects and nulls have no string value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "title" => self.title.clone(),
            "short_title" => self.short_title.clone(),
            "kind" => self.kind.clone(),
            _ => match self.extra.get(key)? {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                serde_json::Value::Bool(b) => Some(b.to_string()),
                _ => None,
            },
        }
    }
}

/// Error type for attribute parsing.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

/// A compiled site item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    identifier: String,
    path: String,
    attributes: ItemAttributes,
    compiled_content: Option<String>,
}

impl Item {
    /// Create an item. The output path defaults to the identifier.
    #[must_use]
    pub fn new(identifier: &str) -> Self {
        let identifier = normalize_identifier(identifier);
        Self {
            path: identifier.clone(),
            identifier,
            attributes: ItemAttributes::default(),
            compiled_content: None,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: ItemAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the title attribute.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.attributes.title = Some(title.into());
        self
    }

    /// Set the compiled (pre-layout) HTML content.
    #[must_use]
    pub fn with_compiled_content(mut self, content: impl Into<String>) -> Self {
        self.compiled_content = Some(content.into());
        self
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Output path (e.g., "/blog/first-post/").
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn attributes(&self) -> &ItemAttributes {
        &self.attributes
    }

    #[must_use]
    pub fn compiled_content(&self) -> Option<&str> {
        self.compiled_content.as_deref()
    }

    /// Title attribute, falling back to the identifier.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.attributes.title.as_deref().unwrap_or(&self.identifier)
    }

    /// Short title, then title, then identifier.
    #[must_use]
    pub fn short_title(&self) -> &str {
        self.attributes
            .short_title
            .as_deref()
            .unwrap_or_else(|| self.display_title())
    }
}
