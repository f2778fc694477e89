//! Rendering and extraction options.

/// Options controlling menu markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of levels to render. Zero or less renders the top level only.
    pub depth: i32,
    /// Tag wrapping each level.
    pub collection_tag: String,
    /// Class of each collection element. Empty omits the attribute.
    pub collection_class: String,
    /// Tag wrapping each entry.
    pub item_tag: String,
    /// Tag wrapping the optional heading.
    pub title_tag: String,
    /// Heading rendered before the menu.
    pub title: Option<String>,
    /// Text inserted between an entry's link and its nested list.
    pub separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            depth: 3,
            collection_tag: "ol".to_owned(),
            collection_class: "menu".to_owned(),
            item_tag: "li".to_owned(),
            title_tag: "h2".to_owned(),
            title: None,
            separator: String::new(),
        }
    }
}

impl RenderOptions {
    /// Defaults for breadcrumb trails (unordered list).
    #[must_use]
    pub fn breadcrumb() -> Self {
        Self {
            collection_tag: "ul".to_owned(),
            ..Self::default()
        }
    }
}

/// Options for the item hierarchy extractor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Keep only items whose `kind` attribute equals this value.
    pub kind: Option<String>,
    /// Attribute to sort siblings by.
    pub sort: Option<String>,
    /// Identifier depth beyond which branches off the current path collapse.
    pub fold_at: Option<usize>,
}

/// Options for the table of contents extractor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocOptions {
    /// CSS selector matching section elements.
    pub path: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            path: "div.section".to_owned(),
        }
    }
}
