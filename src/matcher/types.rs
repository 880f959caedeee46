use crate::catalog::LinkType;
use serde::{Deserialize, Serialize};

/// Value recorded for a phrase that matched no link type.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// How a phrase was resolved to a link type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The phrase equals an inward or outward phrase, ignoring case
    Exact,
    /// One of the phrase's words occurs inside an inward or outward phrase
    Partial,
    None,
}

impl MatchKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of matching one phrase against a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    pub link_type: Option<&'a LinkType>,
    pub kind: MatchKind,
}

impl<'a> LinkMatch<'a> {
    #[must_use]
    pub fn exact(link_type: &'a LinkType) -> Self {
        Self {
            link_type: Some(link_type),
            kind: MatchKind::Exact,
        }
    }

    #[must_use]
    pub fn partial(link_type: &'a LinkType) -> Self {
        Self {
            link_type: Some(link_type),
            kind: MatchKind::Partial,
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self {
            link_type: None,
            kind: MatchKind::None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.link_type.is_some()
    }

    /// The link type name to pass to the API, or [`NOT_FOUND`].
    #[must_use]
    pub fn parameter(&self) -> &'a str {
        self.link_type.map_or(NOT_FOUND, |lt| lt.name.as_str())
    }
}

/// A query phrase paired with its match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch<'a> {
    pub phrase: String,
    pub result: LinkMatch<'a>,
}
