use super::{match_phrase, PhraseMatch};
#[cfg(test)]
use super::LinkMatch;
use crate::catalog::Catalog;
use serde::Serialize;
use std::collections::HashMap;

/// Number of leading mapping entries considered for usage examples.
pub(crate) const EXAMPLE_WINDOW: usize = 3;

/// Counts reported in the summary block.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MappingSummary {
    /// Number of input phrases, repeats included
    pub total: usize,
    pub mapped: usize,
    pub not_found: usize,
}

/// Phrase to link type mapping, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMapping<'a> {
    matches: Vec<PhraseMatch<'a>>,
    entries: Vec<PhraseMatch<'a>>,
}

impl<'a> LinkMapping<'a> {
    /// One match per input phrase, repeats included.
    #[must_use]
    pub fn matches(&self) -> &[PhraseMatch<'a>] {
        &self.matches
    }

    /// One entry per distinct phrase. A repeated phrase keeps the position
    /// of its first occurrence and the result of its last.
    #[must_use]
    pub fn entries(&self) -> &[PhraseMatch<'a>] {
        &self.entries
    }

    #[must_use]
    #[cfg(test)]
    pub(crate) fn get(&self, phrase: &str) -> Option<&LinkMatch<'a>> {
        self.entries
            .iter()
            .find(|e| e.phrase == phrase)
            .map(|e| &e.result)
    }

    #[must_use]
    pub fn summary(&self) -> MappingSummary {
        let mapped = self.entries.iter().filter(|e| e.result.is_found()).count();
        MappingSummary {
            total: self.matches.len(),
            mapped,
            not_found: self.entries.len().saturating_sub(mapped),
        }
    }

    /// Found entries among the first [`EXAMPLE_WINDOW`] entries. Unmatched
    /// entries inside the window are skipped, not replaced by later ones.
    pub fn examples(&self) -> impl Iterator<Item = &PhraseMatch<'a>> {
        self.entries
            .iter()
            .take(EXAMPLE_WINDOW)
            .filter(|e| e.result.is_found())
    }
}

/// Match every phrase against the catalog, preserving input order.
pub fn build_mapping<'a, I, S>(phrases: I, catalog: &'a Catalog) -> LinkMapping<'a>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mapping = LinkMapping::default();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for phrase in phrases {
        let phrase = phrase.as_ref();
        let result = match_phrase(phrase, catalog);
        mapping.matches.push(PhraseMatch {
            phrase: phrase.to_string(),
            result,
        });

        match positions.get(phrase).copied() {
            Some(pos) => {
                if let Some(entry) = mapping.entries.get_mut(pos) {
                    entry.result = result;
                }
            }
            None => {
                positions.insert(phrase.to_string(), mapping.entries.len());
                mapping.entries.push(PhraseMatch {
                    phrase: phrase.to_string(),
                    result,
                });
            }
        }
    }

    mapping
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
