//! Filename sanitization for clip titles.

/// Map an arbitrary title to a filesystem-safe file stem.
///
/// Every character that is not alphanumeric, a space, a dot, or an
/// underscore is replaced with an underscore; all spaces are then replaced
/// with underscores. No length cap, no collapsing of consecutive
/// underscores. Total over all inputs.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
