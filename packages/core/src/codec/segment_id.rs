//! Segment ID Codec
//!
//! A segment ID is the tree-address token for one node:
//! `coreName<SEP>kind[<SEP>extension]`, with [`SEGMENT_SEPARATOR`] as `<SEP>`.
//! The separator is disjoint from every legal suffix delimiter and node name,
//! so the encoding never collides with user-chosen names.
//!
//! Per-kind wire shapes:
//!
//! - section: `name<SEP>section` (extension forbidden)
//! - scroll:  `name<SEP>scroll<SEP>md` (extension fixed to `md`)
//! - file:    `name<SEP>file<SEP>ext` (extension required)
//!
//! Constructors are kind-specific and return the common [`SegmentId`] type;
//! parsing is the exact inverse with per-kind errors.

use crate::codec::error::SegmentIdError;
use crate::models::{NodeKind, NodeName, MD_EXTENSION, SEGMENT_SEPARATOR};
use serde::Serialize;
use std::fmt;

const SECTION_KIND_TOKEN: &str = "section";
const SCROLL_KIND_TOKEN: &str = "scroll";
const FILE_KIND_TOKEN: &str = "file";

/// An encoded tree-address token for a single node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SegmentId(String);

/// The decoded form of a [`SegmentId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSegmentId {
    pub core_name: String,
    pub kind: NodeKind,
    pub extension: Option<String>,
}

impl SegmentId {
    /// Segment ID for a section (folder) node.
    pub fn section(core_name: &NodeName) -> Self {
        Self(format!(
            "{core}{sep}{kind}",
            core = core_name,
            sep = SEGMENT_SEPARATOR,
            kind = SECTION_KIND_TOKEN
        ))
    }

    /// Segment ID for a scroll (markdown leaf) node.
    pub fn scroll(core_name: &NodeName) -> Self {
        Self(format!(
            "{core}{sep}{kind}{sep}{ext}",
            core = core_name,
            sep = SEGMENT_SEPARATOR,
            kind = SCROLL_KIND_TOKEN,
            ext = MD_EXTENSION
        ))
    }

    /// Segment ID for a plain file node. The extension must be non-empty and
    /// free of the segment separator.
    pub fn file(core_name: &NodeName, extension: &str) -> Result<Self, SegmentIdError> {
        if extension.is_empty() || extension.contains(SEGMENT_SEPARATOR) {
            return Err(SegmentIdError::InvalidExtension {
                raw: core_name.as_str().to_string(),
                extension: extension.to_string(),
            });
        }
        Ok(Self(format!(
            "{core}{sep}{kind}{sep}{ext}",
            core = core_name,
            sep = SEGMENT_SEPARATOR,
            kind = FILE_KIND_TOKEN,
            ext = extension
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the wire token back into (core name, kind, extension).
    pub fn parse(&self) -> Result<ParsedSegmentId, SegmentIdError> {
        Self::parse_str(&self.0)
    }

    /// Decode an arbitrary wire token.
    pub fn parse_str(raw: &str) -> Result<ParsedSegmentId, SegmentIdError> {
        let parts: Vec<&str> = raw.split(SEGMENT_SEPARATOR).collect();
        if parts.len() < 2 {
            return Err(SegmentIdError::MissingParts {
                raw: raw.to_string(),
            });
        }
        if parts.len() > 3 {
            return Err(SegmentIdError::InvalidFormat {
                raw: raw.to_string(),
            });
        }

        let core_name = parts[0];
        if core_name.is_empty() {
            return Err(SegmentIdError::InvalidNodeName {
                raw: raw.to_string(),
            });
        }

        let kind_token = parts[1];
        let extension = parts.get(2).copied();

        match kind_token {
            SECTION_KIND_TOKEN => match extension {
                None => Ok(ParsedSegmentId {
                    core_name: core_name.to_string(),
                    kind: NodeKind::Section,
                    extension: None,
                }),
                Some(ext) => Err(SegmentIdError::InvalidExtension {
                    raw: raw.to_string(),
                    extension: ext.to_string(),
                }),
            },
            SCROLL_KIND_TOKEN => match extension {
                Some(MD_EXTENSION) => Ok(ParsedSegmentId {
                    core_name: core_name.to_string(),
                    kind: NodeKind::Scroll,
                    extension: Some(MD_EXTENSION.to_string()),
                }),
                Some(ext) => Err(SegmentIdError::InvalidExtension {
                    raw: raw.to_string(),
                    extension: ext.to_string(),
                }),
                None => Err(SegmentIdError::MissingParts {
                    raw: raw.to_string(),
                }),
            },
            FILE_KIND_TOKEN => match extension {
                Some(ext) if !ext.is_empty() => Ok(ParsedSegmentId {
                    core_name: core_name.to_string(),
                    kind: NodeKind::File,
                    extension: Some(ext.to_string()),
                }),
                Some(ext) => Err(SegmentIdError::InvalidExtension {
                    raw: raw.to_string(),
                    extension: ext.to_string(),
                }),
                None => Err(SegmentIdError::MissingParts {
                    raw: raw.to_string(),
                }),
            },
            other => Err(SegmentIdError::UnknownType {
                raw: raw.to_string(),
                kind_token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
