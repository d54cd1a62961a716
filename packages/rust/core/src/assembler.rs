//! Clip document assembler.
//!
//! Renders a [`ClippedDocument`] as Markdown with YAML frontmatter and
//! persists it under the target directory, named after the sanitized title.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use clipmark_markdown::sanitize_filename;
use clipmark_shared::{ClipmarkError, ClippedDocument, Result};

/// Render the document in the fixed output format:
///
/// ```text
/// ---
/// title: "<title>"
/// URL: <url>
/// tags: [<tag1>, <tag2>, ...]
/// ---
///
/// <cleaned body>
/// ```
///
/// Exactly three frontmatter keys, in this order. The title is double-quoted
/// and written verbatim; the tags list is empty-bracketed when no tags were
/// supplied. The body is followed by a single trailing newline.
pub fn render_document(doc: &ClippedDocument) -> String {
    let tags_yaml = doc.tags.join(", ");
    format!(
        "---\ntitle: \"{}\"\nURL: {}\ntags: [{}]\n---\n\n{}\n",
        doc.title, doc.url, tags_yaml, doc.body
    )
}

/// Write the rendered document to `{target_dir}/{sanitized_title}.md`.
///
/// Creates all missing intermediate directories. An existing file at the
/// same path is silently overwritten — there is no collision detection.
pub fn write_clip(target_dir: &Path, doc: &ClippedDocument) -> Result<PathBuf> {
    if !target_dir.exists() {
        info!(path = %target_dir.display(), "creating directory");
    }
    std::fs::create_dir_all(target_dir).map_err(|e| ClipmarkError::io(target_dir, e))?;

    let file_path = target_dir.join(format!("{}.md", sanitize_filename(&doc.title)));
    std::fs::write(&file_path, render_document(doc))
        .map_err(|e| ClipmarkError::io(&file_path, e))?;

    debug!(path = %file_path.display(), title = %doc.title, "wrote clip");
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("clipmark-assembler-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn make_doc() -> ClippedDocument {
        ClippedDocument {
            title: "My Page".into(),
            url: "https://example.com".into(),
            tags: vec!["a".into(), "b".into()],
            body: "Hello".into(),
        }
    }

    #[test]
    fn render_matches_fixed_format() {
        let rendered = render_document(&make_doc());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "---",
                "title: \"My Page\"",
                "URL: https://example.com",
                "tags: [a, b]",
                "---",
                "",
                "Hello",
            ]
        );
        assert!(rendered.ends_with("Hello\n"));
    }

    #[test]
    fn render_empty_tags_is_empty_brackets() {
        let mut doc = make_doc();
        doc.tags.clear();
        assert!(render_document(&doc).contains("tags: []"));
    }

    #[test]
    fn write_clip_names_file_from_sanitized_title() {
        let tmp = temp_dir();
        let path = write_clip(&tmp, &make_doc()).unwrap();

        assert_eq!(path, tmp.join("My_Page.md"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\ntitle: \"My Page\"\n"));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn write_clip_creates_intermediate_directories() {
        let tmp = temp_dir();
        let nested = tmp.join("notes").join("rust");
        let path = write_clip(&nested, &make_doc()).unwrap();

        assert!(path.exists());
        assert!(nested.is_dir());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn write_clip_overwrites_existing_file() {
        let tmp = temp_dir();
        let first = write_clip(&tmp, &make_doc()).unwrap();

        let mut doc = make_doc();
        doc.body = "Replaced".into();
        let second = write_clip(&tmp, &doc).unwrap();

        assert_eq!(first, second);
        let content = std::fs::read_to_string(&second).unwrap();
        assert!(content.contains("Replaced"));
        assert!(!content.contains("Hello"));

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
