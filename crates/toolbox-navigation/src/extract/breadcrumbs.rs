//! Breadcrumb trail from identifier prefixes.

use toolbox_site::{Item, ItemStore, ancestor_identifiers};

use crate::node::MenuNode;

/// Build the breadcrumb trail for `identifier`, root first.
///
/// Every prefix of the identifier (`/`, `/a/`, `/a/b/`) is looked up in the
/// store; prefixes without an item are skipped. Entries are titled with the
/// short title, then the title, then the identifier.
#[must_use]
pub fn extract_breadcrumbs(
    store: &ItemStore,
    identifier: &str,
    current: Option<&Item>,
) -> Vec<MenuNode> {
    ancestor_identifiers(identifier)
        .iter()
        .filter_map(|prefix| {
            let item = store.find(prefix);
            if item.is_none() {
                tracing::trace!(identifier = %prefix, "Breadcrumb segment not found");
            }
            item
        })
        .map(|item| MenuNode::new(item.short_title(), store.link_to(current, item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toolbox_site::{ItemAttributes, ItemStoreBuilder};

    fn build_store(items: Vec<Item>) -> ItemStore {
        let mut builder = ItemStoreBuilder::new();
        for item in items {
            builder.add_item(item);
        }
        builder.build()
    }

    #[test]
    fn test_full_trail() {
        let store = build_store(vec![
            Item::new("/").with_title("Home"),
            Item::new("/a/").with_title("A"),
            Item::new("/a/b/").with_title("B"),
        ]);

        let trail = extract_breadcrumbs(&store, "/a/b/", None);

        assert_eq!(
            trail,
            vec![
                MenuNode::new("Home", "/"),
                MenuNode::new("A", "/a/"),
                MenuNode::new("B", "/a/b/"),
            ]
        );
    }

    #[test]
    fn test_missing_segment_skipped() {
        let store = build_store(vec![
            Item::new("/").with_title("Home"),
            Item::new("/a/b/").with_title("B"),
        ]);

        let trail = extract_breadcrumbs(&store, "/a/b/", None);

        let links: Vec<_> = trail.iter().map(|n| n.link.as_str()).collect();
        assert_eq!(links, ["/", "/a/b/"]);
    }

    #[test]
    fn test_unknown_identifier_keeps_known_ancestors() {
        let store = build_store(vec![Item::new("/").with_title("Home")]);

        let trail = extract_breadcrumbs(&store, "/nowhere/", None);

        assert_eq!(trail, vec![MenuNode::new("Home", "/")]);
    }

    #[test]
    fn test_empty_store_gives_empty_trail() {
        let store = ItemStoreBuilder::new().build();

        assert!(extract_breadcrumbs(&store, "/a/", None).is_empty());
    }

    #[test]
    fn test_title_fallbacks() {
        let short = ItemAttributes {
            title: Some("Documentation".to_owned()),
            short_title: Some("Docs".to_owned()),
            ..Default::default()
        };
        let store = build_store(vec![
            Item::new("/"),
            Item::new("/docs/").with_attributes(short),
            Item::new("/docs/api/").with_title("API"),
        ]);

        let trail = extract_breadcrumbs(&store, "/docs/api/", None);

        let titles: Vec<_> = trail.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["/", "Docs", "API"]);
    }

    #[test]
    fn test_entries_are_leaves() {
        let store = build_store(vec![Item::new("/"), Item::new("/a/"), Item::new("/a/b/")]);

        let trail = extract_breadcrumbs(&store, "/a/", None);

        assert_eq!(trail.len(), 2);
        assert!(trail.iter().all(MenuNode::is_leaf));
    }

    #[test]
    fn test_links_relative_to_current() {
        let store = build_store(vec![Item::new("/"), Item::new("/a/"), Item::new("/a/b/")]);
        let current = store.find("/a/b/").unwrap();

        let trail = extract_breadcrumbs(&store, "/a/b/", Some(current));

        let links: Vec<_> = trail.iter().map(|n| n.link.as_str()).collect();
        assert_eq!(links, ["../../", "../", "./"]);
    }
}
