#![allow(clippy::unwrap_used)]

use release_herald::changelog::{PREFIX_EMOJI, format_release_note};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_known_prefixes_become_emoji_bullets() {
    for &(prefix, emoji) in PREFIX_EMOJI {
        let line = format!("{prefix}: describe the change");
        let note = format_release_note(&line);
        assert_eq!(
            note,
            format!("• {emoji} {line}\n"),
            "prefix '{prefix}' should map to '{emoji}'"
        );
    }
}

#[test]
fn test_empty_lines_contribute_nothing() {
    let note = format_release_note("feat: add login\n\nfix: crash on exit\n");
    assert_eq!(
        note,
        "• :star2: feat: add login\n• :bug: fix: crash on exit\n"
    );
}

#[test]
fn test_blank_input_produces_empty_note() {
    assert_eq!(format_release_note(""), "");
    assert_eq!(format_release_note("\n\n\n"), "");
}

#[test]
fn test_unmatched_lines_pass_through_verbatim() {
    let note = format_release_note("Initial release\nfeat: add login\n");
    assert_eq!(note, "Initial release\n• :star2: feat: add login\n");
}

#[test]
fn test_original_order_is_preserved() {
    let input = "fix: b\nfeat: a\ndocs: c\n";
    let note = format_release_note(input);
    let lines: Vec<&str> = note.lines().collect();
    assert_eq!(
        lines,
        vec!["• :bug: fix: b", "• :star2: feat: a", "• :books: docs: c"]
    );
}

#[test]
fn test_prefix_inside_line_is_not_matched() {
    // Matching is a strict prefix test against the raw line
    let note = format_release_note("this commit is a fix for the build\n");
    assert_eq!(note, "this commit is a fix for the build\n");
}

#[test]
fn test_matching_is_case_sensitive() {
    let note = format_release_note("FEAT: shouting\n");
    assert_eq!(note, "FEAT: shouting\n");
}

#[test]
fn test_leading_whitespace_prevents_a_match() {
    let note = format_release_note("  feat: indented\n");
    assert_eq!(note, "  feat: indented\n");
}

#[test]
fn test_bullet_text_is_trimmed() {
    let note = format_release_note("chore: tidy up   \n");
    assert_eq!(note, "• :wrench: chore: tidy up\n");
}

#[test]
fn test_prefix_without_colon_still_matches() {
    // The test is starts_with on the prefix token alone
    let note = format_release_note("testing: more coverage\n");
    assert_eq!(note, "• :white_check_mark: testing: more coverage\n");
}

#[test]
fn test_formats_note_read_from_changelog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("changes.md");
    fs::write(&path, "feat: add webhook retry toggle\n\ndeps: bump serde\n")
        .expect("Failed to write changelog");

    let changes = fs::read_to_string(&path).expect("Failed to read changelog");
    let note = format_release_note(&changes);
    assert_eq!(
        note,
        "• :star2: feat: add webhook retry toggle\n• :package: deps: bump serde\n"
    );
}
