/// Canonicalize a slash-separated path.
///
/// The result always starts with `/`, never ends with one (except for the
/// root itself), and has empty and `.` segments removed.
pub fn parse_path(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    format!("/{}", segments.join("/"))
}

/// Split a path at its last separator into the canonical parent directory
/// and the leaf name.
pub fn split_path(path: &str) -> (String, String) {
    match path.rsplit_once('/') {
        Some((dir, name)) => (parse_path(dir), name.to_string()),
        None => ("/".to_string(), path.to_string()),
    }
}
