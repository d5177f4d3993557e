use std::path::Path;

/// Build the object key for `path` uploaded under the `target` prefix.
///
/// The prefix and path are joined with `/`, lexically cleaned, and forced to
/// start with exactly one `/`. An absolute matched path is nested under the
/// prefix rather than replacing it. Windows separators become `/`.
///
/// # Example
///
/// ```
/// use s3_uploader::utils::key::target_key;
///
/// assert_eq!(target_key("bundle", "dist/app.js"), "/bundle/dist/app.js");
/// assert_eq!(target_key("", "/tmp/build/app.js"), "/tmp/build/app.js");
/// assert_eq!(target_key("/releases/", "./notes.txt"), "/releases/notes.txt");
/// ```
pub fn target_key(target: &str, path: impl AsRef<Path>) -> String {
    let path = path.as_ref().to_string_lossy().replace('\\', "/");
    let target = target.replace('\\', "/");

    let joined = [target.as_str(), path.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    let cleaned = clean(&joined);
    if cleaned.starts_with('/') {
        cleaned
    } else if cleaned == "." {
        "/".to_string()
    } else {
        format!("/{}", cleaned)
    }
}

/// Lexically normalise a `/`-separated path: drop empty and `.` segments
/// and resolve `..` against preceding segments. A rooted path never climbs
/// above `/`.
fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if !rooted => segments.push(".."),
                _ => {}
            },
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    match (rooted, body.is_empty()) {
        (true, _) => format!("/{}", body),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
