use super::*;
use crate::catalog::LinkType;

fn standard() -> Catalog {
    Catalog::standard()
}

#[test]
fn test_exact_outward_phrase() {
    let catalog = standard();
    let result = match_phrase("blocks", &catalog);
    assert_eq!(result.kind, MatchKind::Exact);
    assert_eq!(result.parameter(), "Blocks");
}

#[test]
fn test_exact_inward_phrase() {
    let catalog = standard();
    let result = match_phrase("is child of", &catalog);
    assert_eq!(result.kind, MatchKind::Exact);
    assert_eq!(result.parameter(), "Hierarchy");
}

#[test]
fn test_exact_idea_phrase() {
    let catalog = standard();
    let result = match_phrase("is idea for", &catalog);
    assert_eq!(result, LinkMatch::exact(catalog.get("Idea").unwrap()));
}

#[test]
fn test_exact_match_ignores_case() {
    let catalog = standard();
    let result = match_phrase("IS Blocked BY", &catalog);
    assert_eq!(result.kind, MatchKind::Exact);
    assert_eq!(result.parameter(), "Blocks");
}

#[test]
fn test_exact_pass_runs_before_word_pass() {
    // "has" also occurs in Gantt Dependency, which comes earlier
    let catalog = standard();
    let result = match_phrase("has to be started", &catalog);
    assert_eq!(result.kind, MatchKind::Exact);
    assert_eq!(result.parameter(), "Gantt Finish to Start");
}

#[test]
fn test_exact_first_record_wins() {
    let catalog = Catalog::from_link_types(vec![
        LinkType::new("First", "depends on", "is needed by"),
        LinkType::new("Second", "is needed by", "depends on"),
    ]);
    assert_eq!(match_phrase("depends on", &catalog).parameter(), "First");
    assert_eq!(match_phrase("is needed by", &catalog).parameter(), "First");
}

#[test]
fn test_partial_match_on_word() {
    let catalog = standard();
    let result = match_phrase("blocked", &catalog);
    assert_eq!(result.kind, MatchKind::Partial);
    assert_eq!(result.parameter(), "Blocks");
}

#[test]
fn test_partial_match_is_substring_not_word_equality() {
    let catalog = standard();
    // "mitigat" is only a fragment of "is mitigated by"
    let result = match_phrase("mitigat later", &catalog);
    assert_eq!(result.kind, MatchKind::Partial);
    assert_eq!(result.parameter(), "Risk Mitigation");
}

#[test]
fn test_partial_short_words_match_early_records() {
    let catalog = standard();
    assert_eq!(match_phrase("is waiting on", &catalog).parameter(), "Blocks");
    let to = match_phrase("linked to", &catalog);
    assert_eq!(to.kind, MatchKind::Partial);
    assert_eq!(to.parameter(), "Relates");
}

#[test]
fn test_partial_checks_outward_phrase() {
    let catalog = Catalog::from_link_types(vec![
        LinkType::new("Alpha", "precedes", "follows"),
        LinkType::new("Beta", "is tested by", "tests"),
    ]);
    let result = match_phrase("follow-up", &catalog);
    assert_eq!(result, LinkMatch::not_found());
    let result = match_phrase("it follows", &catalog);
    assert_eq!(result.kind, MatchKind::Partial);
    assert_eq!(result.parameter(), "Alpha");
}

#[test]
fn test_not_found() {
    let catalog = standard();
    let result = match_phrase("xyz unrelated phrase", &catalog);
    assert_eq!(result.kind, MatchKind::None);
    assert!(!result.is_found());
    assert_eq!(result.parameter(), NOT_FOUND);
}

#[test]
fn test_empty_phrase_is_not_found() {
    let catalog = standard();
    assert_eq!(match_phrase("", &catalog), LinkMatch::not_found());
    assert_eq!(match_phrase("   ", &catalog), LinkMatch::not_found());
}

#[test]
fn test_match_kind_display() {
    assert_eq!(MatchKind::Exact.to_string(), "exact");
    assert_eq!(MatchKind::Partial.to_string(), "partial");
    assert_eq!(MatchKind::None.to_string(), "none");
}

#[test]
fn test_match_kind_serialization() {
    assert_eq!(serde_json::to_string(&MatchKind::Partial).unwrap(), "\"partial\"");
    assert_eq!(serde_json::to_string(&MatchKind::None).unwrap(), "\"none\"");
}

#[test]
fn test_ascii_separators_split_words() {
    let catalog = standard();
    let result = match_phrase("blocked\u{1f}xyz", &catalog);
    assert_eq!(result.kind, MatchKind::Partial);
    assert_eq!(result.parameter(), "Blocks");
    assert_eq!(match_phrase("xyz\u{1c}qqq", &catalog), LinkMatch::not_found());
}
