//! Menu tree to nested list markup.
//!
//! Output for the default options:
//!
//! ```text
//! <ol class="menu">
//!   <li>
//!     <a href="http://example.com">Title</a>
//!     <ol class="menu">
//!       <li><a href="http://example.com">Title</a></li>
//!     </ol>
//!   </li>
//! </ol>
//! ```
//!
//! (whitespace added for readability; the renderer emits none).

use toolbox_html::{Attributes, content_tag, link_to};

use crate::node::MenuNode;
use crate::options::RenderOptions;

/// Renders [`MenuNode`] trees as nested lists.
///
/// Each level receives its own remaining depth by value, so every branch is
/// cut at the same level regardless of sibling order, and rendering the same
/// tree twice yields identical output.
#[derive(Clone, Copy, Debug)]
pub struct MenuRenderer<'a> {
    options: &'a RenderOptions,
    current_path: Option<&'a str>,
}

impl<'a> MenuRenderer<'a> {
    #[must_use]
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            current_path: None,
        }
    }

    /// Render entries whose link equals `path` as plain text.
    #[must_use]
    pub fn with_current_path(mut self, path: &'a str) -> Self {
        self.current_path = Some(path);
        self
    }

    /// Render a menu.
    ///
    /// Returns `None` for an empty node list so callers can tell "nothing to
    /// show" apart from an empty list element.
    #[must_use]
    pub fn render(&self, nodes: &[MenuNode]) -> Option<String> {
        let menu = self.render_level(nodes, self.options.depth)?;

        match &self.options.title {
            Some(title) => {
                let heading = content_tag(&self.options.title_tag, title, &Attributes::new());
                Some(format!("{heading}{menu}"))
            }
            None => Some(menu),
        }
    }

    fn render_level(&self, nodes: &[MenuNode], depth: i32) -> Option<String> {
        if nodes.is_empty() {
            return None;
        }

        let remaining = depth.saturating_sub(1);
        let items: String = nodes
            .iter()
            .map(|node| self.render_item(node, remaining))
            .collect();

        Some(content_tag(
            &self.options.collection_tag,
            &items,
            &self.collection_attributes(),
        ))
    }

    fn render_item(&self, node: &MenuNode, remaining: i32) -> String {
        let nested = if remaining > 0 {
            self.render_level(&node.subsections, remaining)
        } else {
            None
        };

        let label = if self.current_path == Some(node.link.as_str()) {
            node.title.clone()
        } else {
            link_to(&node.title, &node.link, &Attributes::new())
        };

        let content = format!(
            "{label}{}{}",
            self.options.separator,
            nested.unwrap_or_default()
        );
        let attributes = node
            .css_class
            .as_deref()
            .map(Attributes::class)
            .unwrap_or_default();

        content_tag(&self.options.item_tag, &content, &attributes)
    }

    fn collection_attributes(&self) -> Attributes {
        if self.options.collection_class.is_empty() {
            Attributes::new()
        } else {
            Attributes::class(self.options.collection_class.as_str())
        }
    }
}

/// Render a menu with [`MenuRenderer`] and no current path.
#[must_use]
pub fn render_menu(nodes: &[MenuNode], options: &RenderOptions) -> Option<String> {
    MenuRenderer::new(options).render(nodes)
}
