pub(crate) mod album;
pub(crate) mod photo;

/// Replaces every space with an underscore, leaving all other characters alone.
pub(crate) fn normalize_title(title: &str) -> String {
    title.replace(' ', "_")
}
