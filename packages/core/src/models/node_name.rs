//! Node Names
//!
//! A [`NodeName`] is the single-token grammar of the naming convention: every
//! path segment and every suffix token must be one. The validator here is the
//! sole gate guaranteeing the suffix encoding stays unambiguous: if a name
//! could contain the delimiter, a basename could no longer be split back into
//! its tokens.

use crate::models::rules::{CodecRules, SEGMENT_SEPARATOR};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Validation errors for node names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeNameError {
    /// The candidate name is empty
    #[error("Node name must not be empty")]
    Empty,

    /// The candidate name contains the configured suffix delimiter
    #[error("Node name {name:?} contains the suffix delimiter {delimiter:?}")]
    ContainsDelimiter { name: String, delimiter: String },

    /// The candidate name contains the segment separator control character
    #[error("Node name {name:?} contains the segment separator")]
    ContainsSeparator { name: String },
}

/// A validated single naming token.
///
/// Invariants (enforced by [`NodeName::parse`]):
/// - non-empty
/// - contains no occurrence of the configured suffix delimiter
/// - contains no occurrence of [`SEGMENT_SEPARATOR`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeName(String);

impl NodeName {
    /// Validate a raw string as a node name under the given rules.
    pub fn parse(raw: &str, rules: &CodecRules) -> Result<Self, NodeNameError> {
        if raw.is_empty() {
            return Err(NodeNameError::Empty);
        }
        if raw.contains(rules.suffix_delimiter()) {
            return Err(NodeNameError::ContainsDelimiter {
                name: raw.to_string(),
                delimiter: rules.suffix_delimiter().to_string(),
            });
        }
        if raw.contains(SEGMENT_SEPARATOR) {
            return Err(NodeNameError::ContainsSeparator {
                name: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rules::LibrarySettings;

    fn rules() -> CodecRules {
        CodecRules::new(LibrarySettings::default()).unwrap()
    }

    #[test]
    fn accepts_plain_names() {
        let rules = rules();
        assert_eq!(NodeName::parse("Recipes", &rules).unwrap(), "Recipes");
        assert_eq!(NodeName::parse("Note 1", &rules).unwrap(), "Note 1");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(NodeName::parse("", &rules()), Err(NodeNameError::Empty));
    }

    #[test]
    fn rejects_delimiter() {
        assert!(matches!(
            NodeName::parse("Note-A", &rules()),
            Err(NodeNameError::ContainsDelimiter { .. })
        ));
    }

    #[test]
    fn rejects_segment_separator() {
        let name = format!("Note{}x", SEGMENT_SEPARATOR);
        assert!(matches!(
            NodeName::parse(&name, &rules()),
            Err(NodeNameError::ContainsSeparator { .. })
        ));
    }

    #[test]
    fn respects_configured_delimiter() {
        let rules = CodecRules::new(LibrarySettings {
            suffix_delimiter: "_".to_string(),
            ..LibrarySettings::default()
        })
        .unwrap();
        assert!(NodeName::parse("Note-A", &rules).is_ok());
        assert!(NodeName::parse("Note_A", &rules).is_err());
    }
}
