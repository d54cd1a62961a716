//! Boilerplate removal for extracted Markdown.
//!
//! A single forward pass over the lines, no backtracking:
//! 1. A configured section-boundary pattern (comment/discussion headings or a
//!    bare `---` horizontal rule) truncates the document at that line.
//! 2. Lines containing a configured social/follow keyword are dropped.
//! 3. Everything else is kept verbatim.
//!
//! Note the horizontal-rule boundary is deliberately aggressive: a bare `---`
//! anywhere in the document truncates the rest, even with no comment section
//! in sight. Rules often precede comment blocks, and this matches the
//! long-standing production behavior. It also makes the cleaner
//! non-idempotent on documents whose cleaned output still contains a rule.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use clipmark_shared::{CleanerConfig, ClipmarkError, Result};

/// Compiled cleaner rules, built once from a [`CleanerConfig`].
#[derive(Debug)]
pub struct CleanFilter {
    boundary_patterns: Vec<Regex>,
    follow_keywords: Vec<String>,
}

impl CleanFilter {
    /// Compile the configured patterns. Fails on an invalid regex.
    pub fn new(config: &CleanerConfig) -> Result<Self> {
        let boundary_patterns = config
            .section_heading_patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        ClipmarkError::config(format!("invalid cleaner pattern `{p}`: {e}"))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        // Keyword matching is case-insensitive substring containment.
        let follow_keywords = config
            .follow_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();

        Ok(Self {
            boundary_patterns,
            follow_keywords,
        })
    }

    /// Remove comment sections and social-follow lines from Markdown.
    ///
    /// Returns the kept lines rejoined with `\n`, trimmed of leading and
    /// trailing whitespace.
    pub fn clean(&self, content: &str) -> String {
        let mut kept: Vec<&str> = Vec::new();

        for line in content.lines() {
            let lower = line.to_lowercase();

            // A boundary pattern match alone is not enough: the line must
            // also name a comment/discussion section, or be a bare rule.
            // A matched heading like "## Leave a reply" that carries neither
            // word falls through and is kept.
            if self.boundary_patterns.iter().any(|p| p.is_match(line))
                && (lower.contains("comment")
                    || lower.contains("discussion")
                    || line.trim() == "---")
            {
                debug!(line, "trimming content at possible comment section");
                break;
            }

            if self.follow_keywords.iter().any(|kw| lower.contains(kw)) {
                continue;
            }

            kept.push(line);
        }

        kept.join("\n").trim().to_string()
    }
}

impl Default for CleanFilter {
    fn default() -> Self {
        Self::new(&CleanerConfig::default()).expect("default cleaner patterns compile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> CleanFilter {
        CleanFilter::default()
    }

    #[test]
    fn truncates_at_comments_heading() {
        let input = "# Title\n\nBody text.\n\n## Comments\n\nGreat post!\nThanks!";
        let out = filter().clean(input);
        assert_eq!(out, "# Title\n\nBody text.");
        assert!(!out.contains("Great post!"));
    }

    #[test]
    fn truncates_at_discussion_heading_case_insensitive() {
        let input = "Intro\n### DISCUSSION\nreply reply";
        assert_eq!(filter().clean(input), "Intro");
    }

    #[test]
    fn bare_horizontal_rule_truncates_everything_after() {
        // Over-aggressive on purpose: any bare rule ends the document.
        let input = "Part one\n---\nPart two";
        assert_eq!(filter().clean(input), "Part one");
    }

    #[test]
    fn horizontal_rule_with_trailing_spaces_truncates() {
        let input = "Part one\n---   \nPart two";
        assert_eq!(filter().clean(input), "Part one");
    }

    #[test]
    fn leave_a_reply_heading_is_kept() {
        // Matches a boundary pattern but names neither "comment" nor
        // "discussion", so it falls through the truncation gate.
        let input = "Body\n## Leave a reply\nAfter";
        assert_eq!(filter().clean(input), "Body\n## Leave a reply\nAfter");
    }

    #[test]
    fn post_a_comment_heading_truncates() {
        let input = "Body\n## Post a Comment\nAfter";
        assert_eq!(filter().clean(input), "Body");
    }

    #[test]
    fn drops_follow_lines_keeps_neighbors_in_order() {
        let input = "First line\nFollow me on Twitter for updates\nLast line";
        assert_eq!(filter().clean(input), "First line\nLast line");
    }

    #[test]
    fn keyword_match_is_substring_based() {
        // False positives in ordinary prose are expected behavior.
        let input = "The code lives on github somewhere\nPlain line";
        assert_eq!(filter().clean(input), "Plain line");
    }

    #[test]
    fn result_is_whitespace_trimmed() {
        let input = "\n\nBody\n\n";
        assert_eq!(filter().clean(input), "Body");
    }

    #[test]
    fn idempotent_without_remaining_rules() {
        let input = "# Title\n\nBody.\nSubscribe to our newsletter!\n\n## Comments\nhi";
        let once = filter().clean(input);
        let twice = filter().clean(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn not_idempotent_when_input_contains_a_rule() {
        // Known edge case: a bare rule makes a second pass truncate again.
        let once = "kept\n---\ntail";
        let twice = filter().clean(once);
        assert_eq!(twice, "kept");
        assert_ne!(once, twice);
    }

    #[test]
    fn custom_rules_override_defaults() {
        let config = CleanerConfig {
            section_heading_patterns: vec![r"^#+\s+Replies about comments".into()],
            follow_keywords: vec!["ping me".into()],
        };
        let filter = CleanFilter::new(&config).unwrap();

        let input = "Body\nPing me on IRC\n## Replies about comments\nAfter\n## Comments\nkept now";
        let out = filter.clean(input);
        assert_eq!(out, "Body");

        // Default keywords are no longer active
        let input2 = "Find me on twitter\nBody";
        assert_eq!(filter.clean(input2), "Find me on twitter\nBody");
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let config = CleanerConfig {
            section_heading_patterns: vec!["[unclosed".into()],
            follow_keywords: vec![],
        };
        let err = CleanFilter::new(&config).unwrap_err();
        assert!(err.to_string().contains("invalid cleaner pattern"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(filter().clean(""), "");
    }
}
