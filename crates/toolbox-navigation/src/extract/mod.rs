//! Extractors turning a source into [`MenuNode`](crate::MenuNode) trees.

mod breadcrumbs;
mod toc;
mod tree;

pub use breadcrumbs::extract_breadcrumbs;
pub use toc::extract_toc;
pub use tree::extract_item_tree;
