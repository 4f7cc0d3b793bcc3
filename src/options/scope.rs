//! Option scopes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RossError;

/// One independently persisted option group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Header,
    Footer,
    General,
}

impl Scope {
    /// All scopes, in the order their CSS is emitted.
    pub const ALL: [Scope; 3] = [Scope::General, Scope::Header, Scope::Footer];

    /// Parse a scope name, returning `None` for anything unknown.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "header" => Some(Self::Header),
            "footer" => Some(Self::Footer),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    /// The scope's storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
            Self::General => "general",
        }
    }

    /// Token action for saving this scope.
    pub fn save_action(&self) -> String {
        format!("ross_save_{}", self.as_str())
    }

    /// Token action for resetting this scope.
    pub fn reset_action(&self) -> String {
        format!("ross_reset_{}", self.as_str())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = RossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RossError::UnknownScope { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_scopes() {
        assert_eq!(Scope::parse("header"), Some(Scope::Header));
        assert_eq!(Scope::parse("footer"), Some(Scope::Footer));
        assert_eq!(Scope::parse("general"), Some(Scope::General));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Scope::parse("Header"), None);
        assert_eq!(Scope::parse("sidebar"), None);
    }

    #[test]
    fn from_str_reports_unknown_scope() {
        let err = "sidebar".parse::<Scope>().unwrap_err();
        assert!(matches!(err, RossError::UnknownScope { .. }));
    }

    #[test]
    fn actions_include_scope_name() {
        assert_eq!(Scope::Footer.save_action(), "ross_save_footer");
        assert_eq!(Scope::General.reset_action(), "ross_reset_general");
    }
}
