//! Split Paths
//!
//! This module defines the path-shaped data the engine operates on:
//!
//! - [`SplitPath`] - the external, vault-facing path shape (ancestor parts +
//!   basename + kind)
//! - [`SplitPathInsideLibrary`] - a split path proven to live under the
//!   configured library root
//! - [`SeparatedSuffixedBasename`] - a basename decomposed into core name and
//!   suffix tokens
//! - [`CanonicalSplitPathInsideLibrary`] - a split path whose basename and
//!   location agree with the naming convention
//!
//! Canonical values can only be produced by the canonical codec, so holding one
//! is proof that its invariants were checked.

use crate::models::node_name::NodeName;
use crate::models::rules::{CodecRules, MD_EXTENSION};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The vault-side kind of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathKind {
    /// A non-markdown file
    File,
    /// A directory
    Folder,
    /// A markdown file
    MdFile,
}

/// The tree-side kind of a node.
///
/// Folders become sections, markdown leaves become scrolls, everything else
/// stays a plain file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Section,
    Scroll,
    File,
}

impl From<PathKind> for NodeKind {
    fn from(kind: PathKind) -> Self {
        match kind {
            PathKind::Folder => NodeKind::Section,
            PathKind::MdFile => NodeKind::Scroll,
            PathKind::File => NodeKind::File,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Section => "section",
            NodeKind::Scroll => "scroll",
            NodeKind::File => "file",
        };
        f.write_str(label)
    }
}

/// A filesystem path split into its components, as delivered by the vault layer.
///
/// `path_parts` are the ancestor folder names from the vault root down to the
/// node's parent (inclusive); `basename` is the node's own name without
/// extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitPath {
    pub path_parts: Vec<String>,
    pub basename: String,
    pub kind: PathKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl SplitPath {
    /// A folder path (no extension).
    pub fn folder(path_parts: Vec<String>, basename: impl Into<String>) -> Self {
        Self {
            path_parts,
            basename: basename.into(),
            kind: PathKind::Folder,
            extension: None,
        }
    }

    /// A markdown file path (extension fixed to `md`).
    pub fn md_file(path_parts: Vec<String>, basename: impl Into<String>) -> Self {
        Self {
            path_parts,
            basename: basename.into(),
            kind: PathKind::MdFile,
            extension: Some(MD_EXTENSION.to_string()),
        }
    }

    /// A non-markdown file path with an explicit extension.
    pub fn file(
        path_parts: Vec<String>,
        basename: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            path_parts,
            basename: basename.into(),
            kind: PathKind::File,
            extension: Some(extension.into()),
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        NodeKind::from(self.kind)
    }

    /// Slash-joined rendering for diagnostics.
    pub fn display_path(&self) -> String {
        let mut parts = self.path_parts.clone();
        parts.push(self.basename.clone());
        parts.join("/")
    }
}

/// Error for paths that do not live under the configured library root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Path {path:?} is outside the library root {root:?}")]
pub struct OutsideLibraryError {
    pub path: String,
    pub root: String,
}

/// A [`SplitPath`] proven to live inside the configured library.
///
/// Invariant: `path_parts` is either empty (the library root itself) or starts
/// with the configured library root name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SplitPathInsideLibrary {
    inner: SplitPath,
}

impl SplitPathInsideLibrary {
    /// Check a split path against the library root.
    pub fn new(path: SplitPath, rules: &CodecRules) -> Result<Self, OutsideLibraryError> {
        match path.path_parts.first() {
            None => Ok(Self { inner: path }),
            Some(first) if first == rules.library_root_name() => Ok(Self { inner: path }),
            Some(_) => Err(OutsideLibraryError {
                path: path.display_path(),
                root: rules.library_root_name().to_string(),
            }),
        }
    }

    pub fn path_parts(&self) -> &[String] {
        &self.inner.path_parts
    }

    pub fn basename(&self) -> &str {
        &self.inner.basename
    }

    pub fn kind(&self) -> PathKind {
        self.inner.kind
    }

    pub fn extension(&self) -> Option<&str> {
        self.inner.extension.as_deref()
    }

    pub fn as_split_path(&self) -> &SplitPath {
        &self.inner
    }

    pub fn into_split_path(self) -> SplitPath {
        self.inner
    }
}

/// A basename decomposed into its tokens.
///
/// `suffix_parts` are ordered nearest-ancestor-first (the token adjacent to
/// the core name is the node's immediate parent folder) and never include the
/// library root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeparatedSuffixedBasename {
    pub core_name: NodeName,
    pub suffix_parts: Vec<NodeName>,
}

impl SeparatedSuffixedBasename {
    pub fn new(core_name: NodeName, suffix_parts: Vec<NodeName>) -> Self {
        Self {
            core_name,
            suffix_parts,
        }
    }
}

/// A split path whose basename agrees with its location.
///
/// Invariants (enforced by the canonical codec, the only producer):
/// - `suffix_parts` is exactly the reversed `path_parts` minus the library root
/// - folders always have empty `suffix_parts`
/// - every path part and suffix token is a valid [`NodeName`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalSplitPathInsideLibrary {
    split_path: SplitPathInsideLibrary,
    separated_basename: SeparatedSuffixedBasename,
}

impl CanonicalSplitPathInsideLibrary {
    /// Producer-side constructor; only the canonical codec may build one.
    pub(crate) fn from_checked_parts(
        split_path: SplitPathInsideLibrary,
        separated_basename: SeparatedSuffixedBasename,
    ) -> Self {
        Self {
            split_path,
            separated_basename,
        }
    }

    pub fn split_path(&self) -> &SplitPathInsideLibrary {
        &self.split_path
    }

    pub fn separated_basename(&self) -> &SeparatedSuffixedBasename {
        &self.separated_basename
    }

    pub fn core_name(&self) -> &NodeName {
        &self.separated_basename.core_name
    }

    pub fn suffix_parts(&self) -> &[NodeName] {
        &self.separated_basename.suffix_parts
    }

    pub fn path_parts(&self) -> &[String] {
        self.split_path.path_parts()
    }

    pub fn kind(&self) -> PathKind {
        self.split_path.kind()
    }

    pub fn node_kind(&self) -> NodeKind {
        NodeKind::from(self.split_path.kind())
    }

    pub fn extension(&self) -> Option<&str> {
        self.split_path.extension()
    }
}
