use serde::{Deserialize, Serialize};

/// A Jira issue link type: the API name plus the two phrases the UI shows
/// depending on which side of the link the viewed issue is on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LinkType {
    /// Name expected by the API (e.g. `Blocks`)
    pub name: String,
    /// Phrase shown on the target issue (e.g. "is blocked by")
    pub inward: String,
    /// Phrase shown on the source issue (e.g. "blocks")
    pub outward: String,
}

impl LinkType {
    #[must_use]
    pub fn new(name: &str, inward: &str, outward: &str) -> Self {
        Self {
            name: name.to_string(),
            inward: inward.to_string(),
            outward: outward.to_string(),
        }
    }
}
