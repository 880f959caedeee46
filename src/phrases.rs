//! Link phrases as they appear in the Jira issue view.

/// The phrases mapped when no other list is configured.
pub const DEFAULT_UI_DESCRIPTIONS: &[&str] = &[
    "is blocked by",
    "blocks",
    "is cloned by",
    "clones",
    "is duplicated by",
    "duplicates",
    "has to be finished together with",
    "has to be done after",
    "has to be done before",
    "earliest end is start of",
    "start is earliest end of",
    "has to be started",
    "is child of",
    "is parent of",
    "added to idea",
    "is idea for",
    "merged into",
    "merged from",
    "is implemented by",
    "implements",
    "is caused by",
    "causes",
    "relates to",
    "is mitigated by",
    "mitigates risk",
    "split from",
    "split to",
];
