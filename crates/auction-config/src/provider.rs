//! Data provider selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backing store implementation for the data-access layer.
///
/// MySQL is the only implementation shipped. MariaDB speaks the same
/// protocol and is accepted as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataProvider {
    #[default]
    MySql,
}

impl DataProvider {
    /// Parses a provider name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for empty or unknown names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Some(Self::MySql),
            _ => None,
        }
    }

    /// Returns the canonical provider name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
        }
    }
}

impl fmt::Display for DataProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(DataProvider::parse("MySQL"), Some(DataProvider::MySql));
        assert_eq!(DataProvider::parse(" mariadb "), Some(DataProvider::MySql));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(DataProvider::parse("oracle"), None);
        assert_eq!(DataProvider::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(DataProvider::MySql.to_string(), "mysql");
    }
}
