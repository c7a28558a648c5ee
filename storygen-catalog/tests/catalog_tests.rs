//! Shape checks on the embedded story catalog.

use std::collections::HashSet;

use rstest::rstest;
use storygen_catalog::{story_set, STORIES};

#[test]
fn catalog_builds_a_valid_set() {
    let set = story_set().expect("catalog paths must be valid and unique");
    assert_eq!(set.len(), STORIES.len());
    assert_eq!(set.len(), 16);
}

#[test]
fn paths_are_unique_markdown_under_docs_stories() {
    let mut seen = HashSet::new();
    for (path, _) in STORIES {
        assert!(path.starts_with("docs/stories/epic-"), "unexpected root: {path}");
        assert!(path.ends_with(".md"), "not markdown: {path}");
        assert!(seen.insert(*path), "duplicate path: {path}");
    }
}

#[test]
fn payloads_are_non_empty_story_documents() {
    for (path, content) in STORIES {
        assert!(!content.is_empty(), "empty payload: {path}");
        assert!(content.starts_with("# "), "missing title in {path}");
        assert!(content.contains("**Epic:**"), "missing epic header in {path}");
        assert!(content.ends_with('\n'), "missing trailing newline in {path}");
    }
}

#[test]
fn set_keeps_catalog_order() {
    let set = story_set().unwrap();
    let from_set: Vec<_> = set.iter().map(|e| e.path.as_str()).collect();
    let from_table: Vec<_> = STORIES.iter().map(|(p, _)| *p).collect();
    assert_eq!(from_set, from_table);
}

#[rstest]
#[case("epic-1-crash-survivor-foundation", 4)]
#[case("epic-2-threat-escalation-and-room-depth", 4)]
#[case("epic-3-equipment-matrix-and-progression", 4)]
#[case("epic-4-atmosphere-ux-polish-and-live-ops-hooks", 4)]
fn each_epic_has_four_stories(#[case] epic: &str, #[case] expected: usize) {
    let prefix = format!("docs/stories/{epic}/");
    let count = STORIES.iter().filter(|(p, _)| p.starts_with(&prefix)).count();
    assert_eq!(count, expected);
}

#[test]
fn first_story_is_the_project_spine() {
    let set = story_set().unwrap();
    let first = set.iter().next().expect("non-empty");
    assert!(first.path.as_str().ends_with("1.1-godot-project-spine-and-dice-loop-skeleton.md"));
    assert!(first
        .content
        .starts_with("# Godot Story: Godot Project Spine & Dice Loop Skeleton"));
}
