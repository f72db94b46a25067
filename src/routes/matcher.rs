/// Matches `path` against a route pattern such as `/companies/:name`.
///
/// Returns `None` on mismatch, otherwise `Some` with the value of the single
/// `:param` segment if the pattern has one. Query strings, fragments and a
/// trailing slash on the path are ignored.
pub(super) fn match_pattern(pattern: &str, path: &str) -> Option<Option<String>> {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();

    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);
    let mut param = None;

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(param),
            (Some(expected), Some(actual)) => {
                if expected.starts_with(':') {
                    param = Some(actual.to_string());
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
