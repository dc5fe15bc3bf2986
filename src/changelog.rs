//! Changelog-line classification
//!
//! Turns raw changelog text into the "release note": each line that starts
//! with a known conventional-commit prefix becomes an emoji-prefixed bullet,
//! empty lines are dropped, and everything else passes through verbatim.

use crate::log_debug;

/// Prefix-to-emoji table for changelog classification.
///
/// Declaration order is match priority; the first prefix the raw line starts
/// with wins. There is deliberately no fallback marker for unknown prefixes.
pub const PREFIX_EMOJI: &[(&str, &str)] = &[
    ("build", ":tools:"),
    ("feat", ":star2:"),
    ("fix", ":bug:"),
    ("refactor", ":recycle:"),
    ("docs", ":books:"),
    ("style", ":art:"),
    ("perf", ":zap:"),
    ("test", ":white_check_mark:"),
    ("chore", ":wrench:"),
    ("revert", ":rewind:"),
    ("ci", ":robot:"),
    ("deps", ":package:"),
    ("misc", ":label:"),
];

/// Format raw changelog text into the release note.
///
/// Per line, checked against the raw (untrimmed) text:
/// - empty lines contribute nothing;
/// - lines starting with a known prefix become `• <emoji> <trimmed line>`;
/// - all other lines pass through unchanged, newline-terminated.
///
/// Matching is case-sensitive and anchored at the line start; a line that
/// merely contains a prefix somewhere inside is not a match.
pub fn format_release_note(changes: &str) -> String {
    let mut note = String::new();

    for line in changes.split('\n') {
        if line.is_empty() {
            continue;
        }
        match classify_line(line) {
            Some(emoji) => {
                note.push_str(&format!("• {} {}\n", emoji, line.trim()));
            }
            None => {
                note.push_str(line);
                note.push('\n');
            }
        }
    }

    log_debug!(
        "Classified changelog: {} input lines, {} note bytes",
        changes.split('\n').count(),
        note.len()
    );
    note
}

/// Return the emoji token for the first matching prefix, if any
fn classify_line(line: &str) -> Option<&'static str> {
    PREFIX_EMOJI
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix))
        .map(|&(_, emoji)| emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_is_anchored_not_substring() {
        // "fix" appears inside the line but not at the start
        let note = format_release_note("hot fix for login\n");
        assert_eq!(note, "hot fix for login\n");
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let note = format_release_note("Fix: crash\n");
        assert_eq!(note, "Fix: crash\n");
    }

    #[test]
    fn bullet_text_is_trimmed_but_match_is_not() {
        // Trailing whitespace is trimmed in the bullet; a leading space
        // prevents the match entirely.
        assert_eq!(
            format_release_note("feat: add login  \n"),
            "• :star2: feat: add login\n"
        );
        assert_eq!(format_release_note(" feat: indented\n"), " feat: indented\n");
    }
}
