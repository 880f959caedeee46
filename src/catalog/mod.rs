mod builtin;
mod types;
mod validate;

pub use builtin::STANDARD_LINK_TYPES;
pub use types::LinkType;
pub use validate::CatalogError;
#[cfg(test)]
use validate::validate_link_types;

use tracing::debug;

/// Ordered collection of link types searched by the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    link_types: Vec<LinkType>,
}

impl Catalog {
    /// The built-in catalog of standard Jira link types.
    #[must_use]
    pub fn standard() -> Self {
        let link_types = STANDARD_LINK_TYPES
            .iter()
            .map(|(name, inward, outward)| LinkType::new(name, inward, outward))
            .collect();
        Self { link_types }
    }

    /// Build a catalog from an explicit list, keeping its order.
    #[must_use]
    #[cfg(test)]
    pub(crate) fn from_link_types(link_types: Vec<LinkType>) -> Self {
        Self { link_types }
    }

    /// Append user-defined link types after the current ones, so existing
    /// records keep precedence on ties.
    #[must_use]
    pub fn with_custom(mut self, custom: &[LinkType]) -> Self {
        if !custom.is_empty() {
            debug!("Adding {} custom link types to catalog", custom.len());
        }
        self.link_types.extend_from_slice(custom);
        self
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        validate::validate_link_types(&self.link_types)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkType> {
        self.link_types.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.link_types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.link_types.is_empty()
    }

    /// Look up a link type by its API name.
    #[must_use]
    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&LinkType> {
        self.link_types.iter().find(|lt| lt.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a LinkType;
    type IntoIter = std::slice::Iter<'a, LinkType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
