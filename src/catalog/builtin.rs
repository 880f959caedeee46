/// Link types found on standard Jira installations and the common Gantt,
/// idea and risk plugins, as `(name, inward, outward)`.
///
/// Order matters: the first record that matches a phrase wins.
pub const STANDARD_LINK_TYPES: &[(&str, &str, &str)] = &[
    ("Blocks", "is blocked by", "blocks"),
    ("Cloners", "is cloned by", "clones"),
    ("Duplicate", "is duplicated by", "duplicates"),
    ("Relates", "relates to", "relates to"),
    ("Causes", "is caused by", "causes"),
    (
        "Gantt Dependency",
        "has to be finished together with",
        "has to be finished together with",
    ),
    (
        "Gantt Start to Finish",
        "has to be done after",
        "has to be done before",
    ),
    (
        "Gantt Start to Start",
        "has to be started together with",
        "has to be started together with",
    ),
    (
        "Gantt Finish to Finish",
        "earliest end is start of",
        "start is earliest end of",
    ),
    (
        "Gantt Finish to Start",
        "has to be started",
        "has to be finished before start of",
    ),
    ("Hierarchy", "is child of", "is parent of"),
    ("Idea", "added to idea", "is idea for"),
    ("Merge", "merged into", "merged from"),
    ("Implements", "is implemented by", "implements"),
    ("Risk Mitigation", "is mitigated by", "mitigates risk"),
    ("Split", "split from", "split to"),
];
