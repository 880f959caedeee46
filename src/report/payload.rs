use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Issue key placed on the inward side of example payloads.
pub const EXAMPLE_INWARD_ISSUE_KEY: &str = "PROJ-123";
/// Issue key placed on the outward side of example payloads.
pub const EXAMPLE_OUTWARD_ISSUE_KEY: &str = "PROJ-456";

/// Arguments for the `jira_create_issue_link` tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueLinkPayload {
    pub link_type: String,
    pub inward_issue_key: String,
    pub outward_issue_key: String,
}

impl IssueLinkPayload {
    /// Payload linking the two placeholder issues.
    #[must_use]
    pub fn example(link_type: &str) -> Self {
        Self {
            link_type: link_type.to_string(),
            inward_issue_key: EXAMPLE_INWARD_ISSUE_KEY.to_string(),
            outward_issue_key: EXAMPLE_OUTWARD_ISSUE_KEY.to_string(),
        }
    }

    /// Write the payload as the hand-laid snippet used in the text report.
    ///
    /// Values are inserted verbatim and the inward key line keeps its
    /// trailing space, so this is not serde output.
    pub fn write_snippet<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{{")?;
        writeln!(out, "  \"link_type\": \"{}\",", self.link_type)?;
        writeln!(out, "  \"inward_issue_key\": \"{}\", ", self.inward_issue_key)?;
        writeln!(out, "  \"outward_issue_key\": \"{}\"", self.outward_issue_key)?;
        writeln!(out, "}}")
    }
}
