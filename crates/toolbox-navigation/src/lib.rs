//! Navigation menus, tables of contents and breadcrumbs for site templates.
//!
//! Every helper follows the same pipeline: an extractor turns a source into
//! a tree of [`MenuNode`]s, then [`MenuRenderer`] turns the tree into nested
//! list markup.
//!
//! | Entry point                      | Extractor               | Source                   |
//! |----------------------------------|-------------------------|--------------------------|
//! | [`Navigator::navigation_for`]    | [`extract_item_tree`]   | item hierarchy           |
//! | [`Navigator::toc_for`]           | [`extract_toc`]         | compiled HTML sections   |
//! | [`Navigator::breadcrumb_for`]    | [`extract_breadcrumbs`] | identifier prefixes      |
//!
//! Nothing here fails a page build: missing items, empty documents and
//! unmatched selectors produce `None` or an empty string.
//!
//! # Example
//!
//! ```
//! use toolbox_navigation::{NavigationOptions, Navigator, RenderOptions};
//! use toolbox_site::{Item, ItemStoreBuilder};
//!
//! let mut builder = ItemStoreBuilder::new();
//! builder.add_item(Item::new("/"));
//! builder.add_item(Item::new("/guide/").with_title("Guide"));
//! let store = builder.build();
//!
//! let render = RenderOptions {
//!     collection_class: String::new(),
//!     ..RenderOptions::default()
//! };
//! let html = Navigator::new(&store)
//!     .navigation_for("/", &render, &NavigationOptions::default())
//!     .unwrap();
//! assert_eq!(html, r#"<ol><li><a href="/guide/">Guide</a></li></ol>"#);
//! ```

mod extract;
mod navigator;
mod node;
mod options;
mod render;

pub use extract::{extract_breadcrumbs, extract_item_tree, extract_toc};
pub use navigator::Navigator;
pub use node::MenuNode;
pub use options::{NavigationOptions, RenderOptions, TocOptions};
pub use render::{MenuRenderer, render_menu};
