use super::types::LinkType;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Link type #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("Duplicate link type name: {0}")]
    DuplicateName(String),
}

/// Check that every record has all three fields and that names are unique.
pub(crate) fn validate_link_types(link_types: &[LinkType]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, link_type) in link_types.iter().enumerate() {
        for (field, value) in [
            ("name", &link_type.name),
            ("inward", &link_type.inward),
            ("outward", &link_type.outward),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field });
            }
        }
        if !seen.insert(link_type.name.as_str()) {
            return Err(CatalogError::DuplicateName(link_type.name.clone()));
        }
    }
    Ok(())
}
