//! Map the issue link phrases shown in the Jira UI (e.g. "is blocked by")
//! to the link type names the Jira API expects (e.g. `Blocks`).
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

pub mod catalog;
pub mod logging;
pub mod matcher;
pub mod phrases;
pub mod report;
pub mod user_config;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, LinkType, STANDARD_LINK_TYPES};
pub use matcher::{
    build_mapping, match_phrase, LinkMapping, LinkMatch, MappingSummary, MatchKind, PhraseMatch,
    NOT_FOUND,
};
pub use phrases::DEFAULT_UI_DESCRIPTIONS;
pub use report::{write_report, write_text_report, IssueLinkPayload, ReportFormat};
pub use user_config::{load_user_config, UserConfig, UserConfigError};
