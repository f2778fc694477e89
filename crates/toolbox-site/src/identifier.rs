//! Identifier helpers.

/// Normalize an identifier to the `/a/b/` form.
///
/// ```
/// use toolbox_site::normalize_identifier;
///
/// assert_eq!(normalize_identifier("a/b"), "/a/b/");
/// assert_eq!(normalize_identifier(""), "/");
/// ```
#[must_use]
pub fn normalize_identifier(identifier: &str) -> String {
    let segments: Vec<&str> = identifier.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_owned()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

/// Number of segments in an identifier (`/` is 0, `/a/b/` is 2).
#[must_use]
pub fn identifier_depth(identifier: &str) -> usize {
    identifier.split('/').filter(|s| !s.is_empty()).count()
}

/// Identifier of the direct parent, `None` for the root.
pub(crate) fn parent_identifier(identifier: &str) -> Option<String> {
    let segments: Vec<&str> = identifier.split('/').filter(|s| !s.is_empty()).collect();
    let (_, parent) = segments.split_last()?;
    Some(normalize_identifier(&parent.join("/")))
}

/// Last segment of an identifier, empty for the root.
#[must_use]
pub fn identifier_basename(identifier: &str) -> &str {
    identifier
        .split('/')
        .rfind(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Strictly increasing chain of prefixes from the root to `identifier`.
///
/// ```
/// use toolbox_site::ancestor_identifiers;
///
/// assert_eq!(ancestor_identifiers("/a/b/"), ["/", "/a/", "/a/b/"]);
/// ```
#[must_use]
pub fn ancestor_identifiers(identifier: &str) -> Vec<String> {
    let mut prefixes = vec!["/".to_owned()];
    let mut current = String::from("/");
    for segment in identifier.split('/').filter(|s| !s.is_empty()) {
        current.push_str(segment);
        current.push('/');
        prefixes.push(current.clone());
    }
    prefixes
}
