//! Link resolution between output paths.

/// Compute a relative URL from one output path to another (RFC 3986).
///
/// The last segment of `from` is the current document unless `from` ends
/// with a slash, in which case every segment is a directory. A trailing
/// slash on `to` is preserved.
///
/// # Examples
///
/// ```
/// use toolbox_site::relative_path;
///
/// assert_eq!(relative_path("/a/b/", "/a/c/"), "../c/");
/// assert_eq!(relative_path("/", "/blog/"), "blog/");
/// assert_eq!(relative_path("/blog/", "/blog/"), "./");
/// ```
#[must_use]
pub fn relative_path(from: &str, to: &str) -> String {
    let from_segs: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to_segs: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();

    let from_dir = if from.ends_with('/') || from_segs.is_empty() {
        &from_segs[..]
    } else {
        &from_segs[..from_segs.len() - 1]
    };

    let common = from_dir
        .iter()
        .zip(&to_segs)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = "../".repeat(from_dir.len() - common);
    let remaining = &to_segs[common..];

    let mut result = format!("{ups}{}", remaining.join("/"));
    if !remaining.is_empty() && to.ends_with('/') {
        result.push('/');
    }

    if result.is_empty() {
        "./".to_owned()
    } else {
        result
    }
}
