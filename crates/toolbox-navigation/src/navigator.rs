//! Template-facing entry points.

use toolbox_site::{Item, ItemStore};

use crate::extract::{extract_breadcrumbs, extract_item_tree, extract_toc};
use crate::node::MenuNode;
use crate::options::{NavigationOptions, RenderOptions, TocOptions};
use crate::render::MenuRenderer;

/// Navigation helpers bound to an item store and the page being rendered.
///
/// When a current item is set, links are relative to its output path, its
/// navigation entry is marked `selected`, and entries linking to it are
/// rendered as plain text.
#[derive(Clone, Copy)]
pub struct Navigator<'a> {
    store: &'a ItemStore,
    current: Option<&'a Item>,
}

impl<'a> Navigator<'a> {
    #[must_use]
    pub fn new(store: &'a ItemStore) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Set the item being rendered.
    #[must_use]
    pub fn with_current(mut self, item: &'a Item) -> Self {
        self.current = Some(item);
        self
    }

    /// Navigation menu for the descendants of `root_identifier`.
    ///
    /// The root itself is not rendered. Returns `None` if the root does not
    /// exist or has no children.
    #[must_use]
    pub fn navigation_for(
        &self,
        root_identifier: &str,
        render: &RenderOptions,
        options: &NavigationOptions,
    ) -> Option<String> {
        let Some(root) = self.store.find(root_identifier) else {
            tracing::debug!(identifier = %root_identifier, "Navigation root not found");
            return None;
        };

        let nodes = extract_item_tree(self.store, root, self.current, options)?;
        self.render(&nodes, render)
    }

    /// Table of contents of an item's compiled content.
    ///
    /// Returns an empty string when the item has no compiled content or no
    /// sections match.
    #[must_use]
    pub fn toc_for(&self, item: &Item, render: &RenderOptions, options: &TocOptions) -> String {
        let Some(content) = item.compiled_content() else {
            tracing::debug!(identifier = %item.identifier(), "No compiled content for table of contents");
            return String::new();
        };

        let nodes = extract_toc(content, options);
        MenuRenderer::new(render).render(&nodes).unwrap_or_default()
    }

    /// Breadcrumb trail from the site root to `identifier`.
    ///
    /// Returns `None` if no segment of the trail exists.
    #[must_use]
    pub fn breadcrumb_for(&self, identifier: &str, render: &RenderOptions) -> Option<String> {
        let nodes = extract_breadcrumbs(self.store, identifier, self.current);
        self.render(&nodes, render)
    }

    /// Render with the current item's self-link as the current path.
    ///
    /// Extractors build links with the same `link_to(current, ..)` call, so
    /// the entry for the current item carries exactly this link (`./` for
    /// directory-style paths, the file name otherwise) and no other entry
    /// does, since output paths are unique.
    fn render(&self, nodes: &[MenuNode], options: &RenderOptions) -> Option<String> {
        let current_link = self
            .current
            .map(|item| self.store.link_to(Some(item), item));

        let renderer = MenuRenderer::new(options);
        match current_link.as_deref() {
            Some(link) => renderer.with_current_path(link).render(nodes),
            None => renderer.render(nodes),
        }
    }
}
