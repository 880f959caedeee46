mod mapping;
mod types;

pub use mapping::{build_mapping, LinkMapping, MappingSummary};
pub use types::{LinkMatch, MatchKind, PhraseMatch, NOT_FOUND};

use crate::catalog::Catalog;
use tracing::debug;

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Resolve a UI phrase to a link type.
///
/// All inward and outward phrases are first compared case-insensitively
/// (inward before outward, catalog order). Only if none is equal does the
/// word pass run: the first link type whose inward or outward phrase
/// contains any whitespace-separated word of `phrase` as a substring wins.
/// Short words like "is" or "to" therefore match early catalog entries.
#[must_use]
pub fn match_phrase<'a>(phrase: &str, catalog: &'a Catalog) -> LinkMatch<'a> {
    let needle = phrase.to_lowercase();

    let result = if let Some(lt) = catalog
        .iter()
        .find(|lt| needle == lt.inward.to_lowercase() || needle == lt.outward.to_lowercase())
    {
        LinkMatch::exact(lt)
    } else {
        let words: Vec<&str> = needle
            .split(is_word_separator)
            .filter(|w| !w.is_empty())
            .collect();
        catalog
            .iter()
            .find(|lt| {
                let inward = lt.inward.to_lowercase();
                let outward = lt.outward.to_lowercase();
                words.iter().any(|w| inward.contains(w)) || words.iter().any(|w| outward.contains(w))
            })
            .map_or_else(LinkMatch::not_found, LinkMatch::partial)
    };

    debug!(
        phrase,
        kind = %result.kind,
        parameter = result.parameter(),
        "Matched link phrase"
    );
    result
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
