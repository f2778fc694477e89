//! Hierarchical item store for site helpers.
//!
//! This crate provides:
//! - [`Item`]: a compiled site item with identifier, output path and attributes
//! - [`ItemAttributes`]: typed attributes parsed from YAML front matter
//! - [`ItemStore`]: identifier lookups and children traversal
//! - [`relative_path`]: relative URL resolution between output paths
//!
//! Identifiers follow the `/segment/segment/` convention: a leading and a
//! trailing slash, with `/` for the site root. Parent/child relationships are
//! derived from identifiers when the store is built.
//!
//! # Quick Start
//!
//! ```
//! use toolbox_site::{Item, ItemStoreBuilder};
//!
//! let mut builder = ItemStoreBuilder::new();
//! builder.add_item(Item::new("/"));
//! builder.add_item(Item::new("/guide/"));
//! let store = builder.build();
//!
//! let root = store.find("/").unwrap();
//! assert_eq!(store.children(root).len(), 1);
//! ```

mod identifier;
mod item;
mod store;
mod util;

pub use identifier::{
    ancestor_identifiers, identifier_basename, identifier_depth, normalize_identifier,
};
pub use item::{Item, ItemAttributes, MetadataError};
pub use store::{ItemStore, ItemStoreBuilder};
pub use util::relative_path;
