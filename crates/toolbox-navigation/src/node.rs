//! Uniform menu tree node.

use serde::Serialize;

/// Menu entry with children, produced by every extractor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    /// Display text. May contain inline markup taken from a heading.
    pub title: String,
    /// Link target (URL or `#anchor`).
    pub link: String,
    /// Child entries in document or hierarchy order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<MenuNode>,
    /// Class applied to the item element.
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
}

impl MenuNode {
    /// Create a leaf node.
    #[must_use]
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            subsections: Vec::new(),
            css_class: None,
        }
    }

    #[must_use]
    pub fn with_subsections(mut self, subsections: Vec<MenuNode>) -> Self {
        self.subsections = subsections;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.subsections.is_empty()
    }
}
