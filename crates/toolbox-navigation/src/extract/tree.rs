//! Navigation tree from the item hierarchy.

use toolbox_site::{Item, ItemStore, identifier_basename, identifier_depth};

use crate::node::MenuNode;
use crate::options::NavigationOptions;

/// Class of the entry matching the current item.
const SELECTED_CLASS: &str = "selected";

/// Build the navigation tree below `root`.
///
/// The root itself is not part of the tree. Returns `None` when the root
/// has no children.
///
/// # Folding
///
/// With `fold_at` set, an item deeper than `fold_at` is left out unless it
/// is `current` or one of its ancestors (the current identifier starts with
/// the item identifier). Deep branches collapse except the chain leading to
/// the current page.
#[must_use]
pub fn extract_item_tree(
    store: &ItemStore,
    root: &Item,
    current: Option<&Item>,
    options: &NavigationOptions,
) -> Option<Vec<MenuNode>> {
    if store.children(root).is_empty() {
        return None;
    }

    Some(build_children(store, root, current, options))
}

/// Recursively build entries for the children of `parent`.
fn build_children(
    store: &ItemStore,
    parent: &Item,
    current: Option<&Item>,
    options: &NavigationOptions,
) -> Vec<MenuNode> {
    let mut children: Vec<&Item> = store
        .children(parent)
        .into_iter()
        .filter(|child| matches_kind(child, options.kind.as_deref()))
        .filter(|child| !is_folded(child, current, options.fold_at))
        .collect();

    if let Some(key) = &options.sort {
        children.sort_by_cached_key(|child| sort_key(child, key));
    }

    children
        .into_iter()
        .map(|child| MenuNode {
            title: child.display_title().to_owned(),
            link: store.link_to(current, child),
            subsections: build_children(store, child, current, options),
            css_class: is_current(child, current).then(|| SELECTED_CLASS.to_owned()),
        })
        .collect()
}

fn matches_kind(item: &Item, kind: Option<&str>) -> bool {
    kind.is_none_or(|kind| item.attributes().kind.as_deref() == Some(kind))
}

fn is_folded(item: &Item, current: Option<&Item>, fold_at: Option<usize>) -> bool {
    let Some(fold_at) = fold_at else {
        return false;
    };
    if identifier_depth(item.identifier()) <= fold_at {
        return false;
    }
    !current.is_some_and(|current| current.identifier().starts_with(item.identifier()))
}

/// Sort attribute value, falling back to the last identifier segment.
fn sort_key(item: &Item, key: &str) -> String {
    item.attributes()
        .get(key)
        .unwrap_or_else(|| identifier_basename(item.identifier()).to_owned())
}

fn is_current(item: &Item, current: Option<&Item>) -> bool {
    current.is_some_and(|current| current.identifier() == item.identifier())
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

    fn titled(identifier: &str, title: &str) -> Item {
        Item::new(identifier).with_title(title)
    }

    fn with_attrs(identifier: &str, yaml: &str) -> Item {
        Item::new(identifier).with_attributes(ItemAttributes::from_yaml(yaml).unwrap())
    }

    fn titles(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.title.as_str()).collect()
    }

    /// `/` with branches `/a/` and `/b/`, each holding two levels.
    fn two_branch_store() -> ItemStore {
        build_store(vec![
            Item::new("/"),
            titled("/a/", "A"),
            titled("/a/1/", "A1"),
            titled("/a/1/x/", "A1x"),
            titled("/b/", "B"),
            titled("/b/1/", "B1"),
            titled("/b/1/x/", "B1x"),
        ])
    }

    #[test]
    fn test_root_without_children_returns_none() {
        let store = build_store(vec![Item::new("/"), Item::new("/x/")]);
        let x = store.find("/x/").unwrap();

        let tree = extract_item_tree(&store, x, None, &NavigationOptions::default());

        assert_eq!(tree, None);
    }

    #[test]
    fn test_builds_full_tree_in_store_order() {
        let store = two_branch_store();
        let root = store.find("/").unwrap();

        let tree = extract_item_tree(&store, root, None, &NavigationOptions::default()).unwrap();

        assert_eq!(titles(&tree), ["A", "B"]);
        assert_eq!(titles(&tree[0].subsections), ["A1"]);
        assert_eq!(titles(&tree[0].subsections[0].subsections), ["A1x"]);
        assert!(tree[0].subsections[0].subsections[0].subsections.is_empty());
    }

    #[test]
    fn test_title_falls_back_to_identifier() {
        let store = build_store(vec![Item::new("/"), Item::new("/untitled/")]);
        let root = store.find("/").unwrap();

        let tree = extract_item_tree(&store, root, None, &NavigationOptions::default()).unwrap();

        assert_eq!(tree[0].title, "/untitled/");
    }

    #[test]
    fn test_links_absolute_without_current() {
        let store = two_branch_store();
        let root = store.find("/").unwrap();

        let tree = extract_item_tree(&store, root, None, &NavigationOptions::default()).unwrap();

        assert_eq!(tree[1].link, "/b/");
        assert_eq!(tree[1].subsections[0].link, "/b/1/");
    }

    #[test]
    fn test_links_relative_to_current() {
        let store = two_branch_store();
        let root = store.find("/").unwrap();
        let current = store.find("/a/1/").unwrap();

        let tree =
            extract_item_tree(&store, root, Some(current), &NavigationOptions::default()).unwrap();

        assert_eq!(tree[0].link, "../");
        assert_eq!(tree[0].subsections[0].link, "./");
        assert_eq!(tree[1].link, "../../b/");
    }

    #[test]
    fn test_current_item_selected() {
        let store = two_branch_store();
        let root = store.find("/").unwrap();
        let current = store.find("/b/1/").unwrap();

        let tree =
            extract_item_tree(&store, root, Some(current), &NavigationOptions::default()).unwrap();

        assert_eq!(tree[1].subsections[0].css_class.as_deref(), Some("selected"));
        assert_eq!(tree[1].css_class, None);
        assert_eq!(tree[0].css_class, None);
    }

    #[test]
    fn test_fold_excludes_unrelated_grandchildren() {
        let store = two_branch_store();
        let root = store.find("/").unwrap();
        let current = store.find("/a/").unwrap();
        let options = NavigationOptions {
            fold_at: Some(1),
            ..Default::default()
        };

        let tree = extract_item_tree(&store, root, Some(current), &options).unwrap();

        // Children of the current item are not on its ancestor chain.
        assert_eq!(titles(&tree), ["A", "B"]);
        assert!(tree[0].subsections.is_empty());
        assert!(tree[1].subsections.is_empty());
    }

    #[test]
    fn test_fold_excludes_siblings_of_ancestors() {
        let store = build_store(vec![
            Item::new("/"),
            titled("/a/", "A"),
            titled("/a/1/", "A1"),
            titled("/a/2/", "A2"),
            titled("/a/1/x/", "A1x"),
            titled("/b/", "B"),
            titled("/b/1/", "B1"),
        ]);
        let root = store.find("/").unwrap();
        let current = store.find("/a/1/x/").unwrap();
        let options = NavigationOptions {
            fold_at: Some(1),
            ..Default::default()
        };

        let tree = extract_item_tree(&store, root, Some(current), &options).unwrap();

        assert_eq!(titles(&tree), ["A", "B"]);
        assert_eq!(titles(&tree[0].subsections), ["A1"]);
        assert_eq!(titles(&tree[0].subsections[0].subsections), ["A1x"]);
        assert!(tree[1].subsections.is_empty());
    }

    #[test]
    fn test_fold_keeps_path_to_current() {
        let store = two_branch_store();
        let root = store.find("/").unwrap();
        let current = store.find("/a/1/x/").unwrap();
        let options = NavigationOptions {
            fold_at: Some(1),
            ..Default::default()
        };

        let tree = extract_item_tree(&store, root, Some(current), &options).unwrap();

        assert_eq!(titles(&tree[0].subsections), ["A1"]);
        assert_eq!(titles(&tree[0].subsections[0].subsections), ["A1x"]);
        assert!(tree[1].subsections.is_empty());
    }

    #[test]
    fn test_fold_without_current_collapses_everything_deep() {
        let store = two_branch_store();
        let root = store.find("/").unwrap();
        let options = NavigationOptions {
            fold_at: Some(1),
            ..Default::default()
        };

        let tree = extract_item_tree(&store, root, None, &options).unwrap();

        assert!(tree.iter().all(MenuNode::is_leaf));
    }

    #[test]
    fn test_kind_filter() {
        let store = build_store(vec![
            Item::new("/"),
            with_attrs("/post/", "title: Post\nkind: article"),
            with_attrs("/about/", "title: About\nkind: page"),
            titled("/misc/", "Misc"),
        ]);
        let root = store.find("/").unwrap();
        let options = NavigationOptions {
            kind: Some("article".to_owned()),
            ..Default::default()
        };

        let tree = extract_item_tree(&store, root, None, &options).unwrap();

        assert_eq!(titles(&tree), ["Post"]);
    }

    #[test]
    fn test_sort_by_attribute() {
        let store = build_store(vec![
            Item::new("/"),
            with_attrs("/c/", "title: Charlie\nposition: '1'"),
            with_attrs("/a/", "title: Alpha\nposition: '3'"),
            with_attrs("/b/", "title: Bravo\nposition: '2'"),
        ]);
        let root = store.find("/").unwrap();
        let options = NavigationOptions {
            sort: Some("position".to_owned()),
            ..Default::default()
        };

        let tree = extract_item_tree(&store, root, None, &options).unwrap();

        assert_eq!(titles(&tree), ["Charlie", "Bravo", "Alpha"]);
    }

    #[test]
    fn test_sort_falls_back_to_filename() {
        let store = build_store(vec![
            Item::new("/"),
            titled("/zeta/", "Zeta"),
            titled("/alpha/", "Alpha"),
            with_attrs("/mid/", "title: Mid\norder: beta"),
        ]);
        let root = store.find("/").unwrap();
        let options = NavigationOptions {
            sort: Some("order".to_owned()),
            ..Default::default()
        };

        let tree = extract_item_tree(&store, root, None, &options).unwrap();

        assert_eq!(titles(&tree), ["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_sort_applies_at_every_level() {
        let store = build_store(vec![
            Item::new("/"),
            titled("/docs/", "Docs"),
            titled("/docs/b/", "B"),
            titled("/docs/a/", "A"),
        ]);
        let root = store.find("/").unwrap();
        let options = NavigationOptions {
            sort: Some("title".to_owned()),
            ..Default::default()
        };

        let tree = extract_item_tree(&store, root, None, &options).unwrap();

        assert_eq!(titles(&tree[0].subsections), ["A", "B"]);
    }
}
