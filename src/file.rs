use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Turns a normalized title into a single safe path segment. Titles free of
/// reserved characters come back unchanged.
pub(crate) fn sanitize_component(title: &str, id: u64) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if RESERVED.contains(&c) || c.is_control() { '_' } else { c })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => format!("untitled_{}", id),
        _ => cleaned,
    }
}

/// Creates `path` (and parents) unless it is already there.
pub(crate) async fn ensure_dir(path: &Path) -> std::io::Result<()> {
    match fs::create_dir_all(path).await {
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        other => other,
    }
}
