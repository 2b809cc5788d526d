/// Drop a trailing `?query` or `#fragment` suffix. Whichever appears first
/// in the string wins, matching how a URL's components are ordered.
#[inline]
pub fn strip_query_and_fragment(path: &str) -> &str {
    let cut = memchr::memchr2(b'?', b'#', path.as_bytes()).unwrap_or(path.len());
    &path[..cut]
}

/// Ensure a single leading slash and strip exactly one trailing slash unless
/// the path is `/`. Empty input becomes `/` (spec.md §4.1).
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str) -> String {
    let path = strip_query_and_fragment(path);
    if path.is_empty() {
        return "/".to_string();
    }

    let mut out = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        out.push('/');
    }
    out.push_str(path);

    while out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Split a normalized path into segments, discarding empty segments produced
/// by repeated slashes. `/` and the empty string both yield `[]`.
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn split_segments(path: &str) -> Vec<String> {
    let path = strip_query_and_fragment(path);
    path.split('/')
        .filter(|seg| !seg.is_empty())
        .map(str::to_string)
        .collect()
}
