//! Reset actions.
//!
//! A reset either clears a whole scope or removes the fields of one named
//! section, leaving every other stored value untouched.

use super::schema::section_fields;
use super::scope::Scope;
use super::set::OptionSet;
use crate::error::{Result, RossError};

/// A request to reset stored options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequest {
    pub scope: Scope,
    /// Section to reset, or `None` for the whole scope.
    pub section: Option<String>,
    pub token: Option<String>,
}

impl ResetRequest {
    /// Reset a whole scope.
    pub fn scope(scope: Scope, token: Option<String>) -> Self {
        Self {
            scope,
            section: None,
            token,
        }
    }

    /// Reset one section of a scope.
    pub fn section(scope: Scope, section: impl Into<String>, token: Option<String>) -> Self {
        Self {
            scope,
            section: Some(section.into()),
            token,
        }
    }

    /// Produce the option set that remains after this reset.
    ///
    /// Returns the names of removed fields alongside the new set.
    pub fn apply(&self, mut current: OptionSet) -> Result<(OptionSet, Vec<String>)> {
        let Some(section) = &self.section else {
            let removed = current.keys().cloned().collect();
            return Ok((OptionSet::new(), removed));
        };

        let fields =
            section_fields(self.scope, section).ok_or_else(|| RossError::UnknownSection {
                scope: self.scope.to_string(),
                section: section.clone(),
            })?;

        let removed = fields
            .into_iter()
            .filter(|name| current.remove(*name).is_some())
            .map(String::from)
            .collect();

        Ok((current, removed))
    }
}
